//! Error types for Gold SWIM

use thiserror::Error;

/// Main error type for Gold SWIM
#[derive(Error, Debug)]
pub enum GoldSwimError {
    #[error("Invalid quarter sequence: quarter {quarter} received prior record {prior_quarter:?}")]
    InvalidSequence {
        quarter: u32,
        prior_quarter: Option<u32>,
    },

    #[error("Unknown financial model: {0}")]
    UnknownModel(String),

    #[error("Invalid parameter {name}: {value}")]
    InvalidParameter { name: String, value: f64 },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

/// Result type alias for Gold SWIM operations
pub type Result<T> = std::result::Result<T, GoldSwimError>;
