//! Legal document template engine
//!
//! This crate turns a document category and the values a user typed into
//! the category form into the starting text of the document editor:
//! - Template catalog (built-in templates and TOML-configured catalogs)
//! - Placeholder extraction and key derivation
//! - Placeholder substitution
//!
//! Rendering never fails. An unknown category yields
//! [`TEMPLATE_NOT_FOUND`] and placeholders with no matching value stay in
//! the output as literal bracket text.

pub mod errors;
pub mod resolver;
pub mod templates;

pub use errors::CatalogError;
pub use resolver::{
    extract_placeholders, placeholder_key, render_template, substitute, Placeholder,
    RenderReport, TEMPLATE_NOT_FOUND,
};
pub use templates::{TemplateCatalog, TemplateEntry, TemplateInfo};
