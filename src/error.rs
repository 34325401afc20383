//! Error types shared by the loaders, the energy predictor and the API layer.
//!
//! The carbon, score and advisor computations are total over well-typed input
//! and have no error type of their own.

use std::path::PathBuf;
use thiserror::Error;

/// Reference data failed to load or is incomplete
#[derive(Debug, Error)]
pub enum DataError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Missing emission factor '{category}.{key}'")]
    MissingFactor { category: &'static str, key: &'static str },

    #[error("Emission factor '{category}.{key}' must be finite and non-negative, got {value}")]
    InvalidFactor { category: &'static str, key: String, value: f64 },

    #[error("Reference constant '{0}' must be positive")]
    InvalidConstant(&'static str),
}

/// Energy prediction failures
#[derive(Debug, Error)]
pub enum PredictError {
    /// No trained artifact could be loaded
    #[error("ML model is not loaded: {0}")]
    ServiceUnavailable(String),

    /// The model was loaded but evaluating it failed
    #[error("Prediction failed due to an internal error: {0}")]
    Internal(String),
}

/// Caller-supplied field outside its declared range
#[derive(Debug, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self { field, message: message.into() }
    }
}

/// Server configuration read from the environment
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: '{value}'")]
    InvalidValue { name: &'static str, value: String },
}
