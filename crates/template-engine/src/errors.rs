//! Error types for catalog loading

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Invalid catalog TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Duplicate template category: {0}")]
    DuplicateCategory(String),

    #[error("Template category name must not be empty")]
    EmptyCategory,
}
