//! Configuration for the scanner and parser binaries.
//!
//! Layered lookup: current directory, then `$HOME/.config/cfe`, then the
//! platform config directory, falling back to defaults if none exist.

use std::path::{Path, PathBuf};

use dirs::{config_dir, home_dir};
use serde::{Deserialize, Serialize};

use crate::error::{DrvError, Result};

pub const CONFIG_FILE_NAME: &str = "cfe.toml";

fn default_tokens_path() -> String {
    "tokens.txt".to_string()
}

/// Settings shared by `cfescan` and `cfeparse`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Raise the tracing filter to `debug`.
    #[serde(default)]
    pub verbose: bool,

    /// Path to the token interchange file, read by the parser and written
    /// by the scanner.
    #[serde(default = "default_tokens_path")]
    pub tokens_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            verbose: false,
            tokens_path: default_tokens_path(),
        }
    }
}

impl Config {
    /// Loads configuration from the first of: current directory, home
    /// directory, system config directory. Falls back to defaults.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DrvError::Config(format!(
                "configuration file not found: {}",
                path.display()
            )));
        }
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| DrvError::Config(format!("failed to parse {}: {e}", path.display())))
    }

    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("cfe").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("cfe").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_uses_tokens_txt() {
        let config = Config::default();
        assert!(!config.verbose);
        assert_eq!(config.tokens_path, "tokens.txt");
    }

    #[test]
    fn load_from_path_parses_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cfe.toml");
        std::fs::write(&path, "verbose = true\ntokens_path = \"out/tokens.txt\"\n").unwrap();

        let config = Config::load_from_path(&path).unwrap();
        assert!(config.verbose);
        assert_eq!(config.tokens_path, "out/tokens.txt");
    }

    #[test]
    fn load_from_missing_path_is_an_error() {
        let result = Config::load_from_path(Path::new("/nonexistent/cfe.toml"));
        assert!(result.is_err());
    }
}
