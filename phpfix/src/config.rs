//! Configuration loading for whitespace-aware rules.

use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::constants::CONFIG_FILENAME;
use crate::fixer::{ConfigError, WhitespacesConfig};

#[derive(Debug, Deserialize, Default, Clone)]
/// Top-level configuration struct.
pub struct Config {
    #[serde(default)]
    /// The main configuration section.
    pub phpfix: PhpfixConfig,
    /// The path to the configuration file this was loaded from.
    /// Set during `load_from_path`, `None` if using defaults.
    #[serde(skip)]
    pub config_file_path: Option<std::path::PathBuf>,
}

#[derive(Debug, Deserialize, Default, Clone)]
/// Configuration options for the fixers.
pub struct PhpfixConfig {
    /// Line ending written by whitespace-aware rules (`"\n"` or `"\r\n"`).
    pub line_ending: Option<String>,
    /// Indent unit (spaces or a single tab).
    pub indent: Option<String>,
}

impl Config {
    /// Load configuration from a specific TOML file.
    ///
    /// # Errors
    /// Fails when the file cannot be read or parsed.
    pub fn load_from_path(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let mut config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.config_file_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Load `phpfix.toml` from `dir` if present, defaults otherwise.
    ///
    /// # Errors
    /// Fails when a present file cannot be read or parsed.
    pub fn load(dir: &Path) -> anyhow::Result<Self> {
        let path = dir.join(CONFIG_FILENAME);
        if path.is_file() {
            Self::load_from_path(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Produce the validated whitespace configuration, applying defaults for
    /// unset fields.
    ///
    /// # Errors
    /// Rejects invalid line endings or indents.
    pub fn whitespaces(&self) -> Result<WhitespacesConfig, ConfigError> {
        let indent = self.phpfix.indent.as_deref().unwrap_or("    ");
        let line_ending = self.phpfix.line_ending.as_deref().unwrap_or("\n");
        WhitespacesConfig::new(indent, line_ending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let config = Config::default();
        let ws = config.whitespaces().unwrap();
        assert_eq!(ws.indent(), "    ");
        assert_eq!(ws.line_ending(), "\n");
    }

    #[test]
    fn parses_toml_section() {
        let config: Config = toml::from_str("[phpfix]\nline_ending = \"\\r\\n\"\nindent = \"\\t\"\n")
            .unwrap();
        let ws = config.whitespaces().unwrap();
        assert_eq!(ws.line_ending(), "\r\n");
        assert_eq!(ws.indent(), "\t");
    }

    #[test]
    fn invalid_line_ending_is_rejected() {
        let config: Config = toml::from_str("[phpfix]\nline_ending = \"\\r\"\n").unwrap();
        assert!(matches!(
            config.whitespaces(),
            Err(ConfigError::InvalidLineEnding(_))
        ));
    }
}
