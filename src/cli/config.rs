//! TOML configuration file support.
//!
//! Settings that would otherwise be repeated on every invocation:
//!
//! ```toml
//! # nanolab.toml
//! [normalize]
//! upload_dir = "uploads/"
//!
//! [suppliers]
//! T = "Testbourne"
//! L = "Lesker"
//! ```
//!
//! Supplier codes listed here are added to (or override) the built-in ones.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use nanolab::normalize::NormalizeConfig;

/// File looked up in the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "nanolab.toml";

/// Root configuration structure for nanolab.toml files.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Normalization settings.
    #[serde(default)]
    pub normalize: NormalizeSettings,

    /// Extra supplier codes for target file names.
    #[serde(default)]
    pub suppliers: BTreeMap<String, String>,
}

/// Configuration for the normalize and validate commands.
#[derive(Debug, Default, Deserialize)]
pub struct NormalizeSettings {
    /// Directory raw files are resolved against.
    pub upload_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }

    /// Explicit file, else `nanolab.toml` if present, else defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.is_file() {
                    log::info!("Using {}", default.display());
                    Self::from_file(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Normalization settings with the configured suppliers merged in.
    pub fn normalize_config(&self) -> NormalizeConfig {
        let mut config = NormalizeConfig::default();
        config
            .suppliers
            .extend(self.suppliers.iter().map(|(k, v)| (k.clone(), v.clone())));
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml = r#"
            [normalize]
            upload_dir = "uploads/"

            [suppliers]
            T = "Testbourne Ltd"
            K = "Kurt J. Lesker"
        "#;

        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.normalize.upload_dir, Some(PathBuf::from("uploads/")));

        let normalize = config.normalize_config();
        assert_eq!(normalize.suppliers["T"], "Testbourne Ltd");
        assert_eq!(normalize.suppliers["K"], "Kurt J. Lesker");
        assert_eq!(normalize.suppliers["L"], "Lesker");
    }

    #[test]
    fn test_partial_config() {
        let config = Config::from_str("[suppliers]\nX = \"Other\"\n").unwrap();
        assert_eq!(config.normalize.upload_dir, None);
        assert_eq!(config.normalize_config().suppliers.len(), 3);
    }

    #[test]
    fn test_empty_config() {
        let config = Config::from_str("").unwrap();
        assert!(config.suppliers.is_empty());
        assert_eq!(config.normalize_config(), NormalizeConfig::default());
    }

    #[test]
    fn test_invalid_config() {
        assert!(Config::from_str("[normalize]\nupload_dir = 3\n").is_err());
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nanolab.toml");
        std::fs::write(&path, "[normalize]\nupload_dir = \"raw\"\n").unwrap();
        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.normalize.upload_dir, Some(PathBuf::from("raw")));
        assert!(Config::load(Some(&dir.path().join("missing.toml"))).is_err());
    }
}
