use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Output format for inspection reports
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = crate::ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => Err(crate::ConfigError::ParseError(format!(
                "unknown output format: {}",
                other
            ))),
        }
    }
}

/// How inspection treats cars whose readings go backwards
///
/// `Lenient` evaluates them with plain arithmetic (a negative delta is
/// simply "not due"); `Strict` rejects them before any check runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationPolicy {
    #[default]
    Lenient,
    Strict,
}

impl std::fmt::Display for ValidationPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationPolicy::Lenient => write!(f, "lenient"),
            ValidationPolicy::Strict => write!(f, "strict"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_parse() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!(" Table ".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_policy_serde_lowercase() {
        let json = serde_json::to_string(&ValidationPolicy::Strict).unwrap();
        assert_eq!(json, "\"strict\"");
        let back: ValidationPolicy = serde_json::from_str("\"lenient\"").unwrap();
        assert_eq!(back, ValidationPolicy::Lenient);
    }
}
