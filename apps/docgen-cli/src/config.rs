//! Configuration file for the docgen CLI
//!
//! Every setting is optional; command-line flags take precedence over the
//! file.
//!
//! ```toml
//! catalog = "templates/catalog.toml"
//! output_dir = "out"
//! file_stem = "contract"
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Looked up in the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "docgen.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Template catalog file; the built-in catalog is used when unset
    pub catalog: Option<PathBuf>,
    /// Directory exports are written to
    pub output_dir: Option<PathBuf>,
    /// Export file name without extension
    pub file_stem: Option<String>,
}

impl CliConfig {
    pub fn from_toml_str(s: &str) -> anyhow::Result<Self> {
        toml::from_str(s).context("Failed to parse docgen config")
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Load the explicit config file, or `docgen.toml` from `dir` if present
    pub fn load(explicit: Option<&Path>, dir: &Path) -> anyhow::Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = dir.join(DEFAULT_CONFIG_FILE);
                if default_path.is_file() {
                    Self::from_file(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn output_dir(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn file_stem(&self) -> &str {
        self.file_stem.as_deref().unwrap_or("document")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = CliConfig::from_toml_str("").unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.output_dir(), PathBuf::from("."));
        assert_eq!(config.file_stem(), "document");
    }

    #[test]
    fn test_full_config() {
        let config = CliConfig::from_toml_str(
            r#"
            catalog = "catalog.toml"
            output_dir = "out"
            file_stem = "bond"
            "#,
        )
        .unwrap();
        assert_eq!(config.catalog, Some(PathBuf::from("catalog.toml")));
        assert_eq!(config.output_dir(), PathBuf::from("out"));
        assert_eq!(config.file_stem(), "bond");
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(CliConfig::from_toml_str("theme = \"dark\"").is_err());
    }

    #[test]
    fn test_load_default_file_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "file_stem = \"lease\"\n").unwrap();
        let config = CliConfig::load(None, dir.path()).unwrap();
        assert_eq!(config.file_stem(), "lease");
    }

    #[test]
    fn test_load_without_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(CliConfig::load(None, dir.path()).unwrap(), CliConfig::default());
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = CliConfig::load(Some(&missing), dir.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
