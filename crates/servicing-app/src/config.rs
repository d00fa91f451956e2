//! Configuration management for car servicing checks
//!
//! Config stored at: ~/.config/car-servicing/config.toml

use serde::{Deserialize, Serialize};
use servicing_types::{ConfigError, OutputFormat, Result, ValidationPolicy};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// How to treat readings that go backwards (lenient, strict)
    #[serde(default)]
    pub validation: ValidationPolicy,

    /// Default report format (table, json)
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Log filter used when RUST_LOG is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            validation: ValidationPolicy::default(),
            output_format: OutputFormat::default(),
            log_filter: default_log_filter(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("car-servicing");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load config from the default location, or fall back to defaults
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from a file, or fall back to defaults when it is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml_str(&content)
        } else {
            Ok(Config::default())
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()).into())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Car Servicing Configuration")?;
        writeln!(f, "===========================")?;
        writeln!(f)?;
        writeln!(f, "Validation:     {}", self.validation)?;
        writeln!(f, "Output format:  {}", self.output_format)?;
        writeln!(f, "Log filter:     {}", self.log_filter)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:    {}", path.display())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use servicing_types::Error;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.validation, ValidationPolicy::Lenient);
        assert_eq!(config.output_format, OutputFormat::Table);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_parse_full() {
        let config = Config::from_toml_str(
            r#"
validation = "strict"
output_format = "json"
log_filter = "servicing_domain=debug"
"#,
        )
        .unwrap();
        assert_eq!(config.validation, ValidationPolicy::Strict);
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.log_filter, "servicing_domain=debug");
    }

    #[test]
    fn test_parse_partial_uses_defaults() {
        let config = Config::from_toml_str("validation = \"strict\"\n").unwrap();
        assert_eq!(config.validation, ValidationPolicy::Strict);
        assert_eq!(config.output_format, OutputFormat::Table);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_parse_error() {
        let err = Config::from_toml_str("validation = \"sometimes\"\n").unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "output_format = \"json\"\n").unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_display() {
        let text = Config::default().to_string();
        assert!(text.contains("Validation:     lenient"));
        assert!(text.contains("Output format:  table"));
    }
}
