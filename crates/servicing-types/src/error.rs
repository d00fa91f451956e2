//! Error types for car servicing checks

use chrono::NaiveDate;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),
}

/// Input that the lenient service check would accept but that cannot
/// describe a real car
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Mileage must not be negative (got {0})")]
    NegativeMileage(i64),

    #[error("Current mileage {current} is below last service mileage {last_service}")]
    MileageWentBackwards { last_service: i64, current: i64 },

    #[error("Current date {current} is before last service date {last_service}")]
    DateWentBackwards {
        last_service: NaiveDate,
        current: NaiveDate,
    },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid car {id}: {source}")]
    Validation {
        id: String,
        #[source]
        source: ValidationError,
    },

    #[error("Unknown car model: {0}")]
    UnknownModel(String),

    #[error("Fleet manifest error: {0}")]
    Manifest(String),
}

pub type Result<T> = std::result::Result<T, Error>;
