//! Error types for marga

use thiserror::Error;

use crate::core::GridCoord;

/// Marga error type
#[derive(Error, Debug)]
pub enum MargaError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid risk value {value} at {coord}")]
    InvalidRisk { coord: GridCoord, value: f64 },

    #[error("Risk field error: {0}")]
    RiskField(String),
}

impl From<serde_yaml::Error> for MargaError {
    fn from(e: serde_yaml::Error) -> Self {
        MargaError::Parse(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, MargaError>;
