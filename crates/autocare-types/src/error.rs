//! Error types for autocare

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

/// Reference-data errors (schedule catalog, knowledge base, repair guides)
#[derive(Debug, Error)]
pub enum ReferenceError {
    #[error("Reference data file not found: {0}")]
    NotFound(String),

    #[error("Failed to parse reference data: {0}")]
    ParseError(String),

    #[error("Invalid reference data: {0}")]
    Invalid(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Reference data error: {0}")]
    Reference(#[from] ReferenceError),

    #[error("Vehicle not found: {0}")]
    VehicleNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("History import error: {0}")]
    HistoryImport(String),
}

pub type Result<T> = std::result::Result<T, Error>;
