//! Configuration
//!
//! Limits shared by the reader and the classifier, plus REPL settings.
//! A config file is JSON; missing keys fall back to defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Default maximum nesting depth
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Default REPL prompt
pub const DEFAULT_PROMPT: &str = "fn> ";

/// fnlang configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Maximum nesting depth accepted by the reader and the classifier
    pub max_depth: usize,
    /// Prompt shown by the REPL
    pub prompt: String,
    /// Prompt shown while a form is still open
    pub continuation_prompt: String,
    /// Where the REPL keeps its line history
    pub history_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            prompt: DEFAULT_PROMPT.to_string(),
            continuation_prompt: "...> ".to_string(),
            history_file: None,
        }
    }
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum nesting depth (at least 1)
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth.max(1);
        self
    }

    /// Set the REPL prompt
    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Set the history file
    pub fn history_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.history_file = Some(path.into());
        self
    }

    /// Load a config from a JSON file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let config: Config =
            serde_json::from_str(&json).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;

        debug!(path = %path.display(), max_depth = config.max_depth, "loaded config");
        Ok(config)
    }

    /// Save this config as pretty-printed JSON
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))?;
        fs::write(path, json)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.max_depth == 0 {
            return Err(Error::Config("max_depth must be at least 1".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builder() {
        let config = Config::new().max_depth(8).prompt("λ> ");
        assert_eq!(config.max_depth, 8);
        assert_eq!(config.prompt, "λ> ");
        assert_eq!(config.history_file, None);
    }

    #[test]
    fn test_builder_clamps_zero_depth() {
        assert_eq!(Config::new().max_depth(0).max_depth, 1);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fnlang.json");

        let config = Config::new().max_depth(64).history_file("/tmp/history");
        config.save_to_file(&path).unwrap();

        assert_eq!(Config::load_from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "max_depth": 16 }}"#).unwrap();

        let config = Config::load_from_file(file.path()).unwrap();
        assert_eq!(config.max_depth, 16);
        assert_eq!(config.prompt, DEFAULT_PROMPT);
    }

    #[test]
    fn test_rejects_bad_files() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "depth": 16 }}"#).unwrap();
        assert!(matches!(
            Config::load_from_file(file.path()),
            Err(Error::Config(_))
        ));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "max_depth": 0 }}"#).unwrap();
        assert!(matches!(
            Config::load_from_file(file.path()),
            Err(Error::Config(_))
        ));

        assert!(matches!(
            Config::load_from_file("/nonexistent/fnlang.json"),
            Err(Error::Io(_))
        ));
    }
}
