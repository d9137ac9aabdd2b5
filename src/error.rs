use thiserror::Error;

use crate::chart::ChartError;

/// Crate error type
#[derive(Error, Debug)]
pub enum Error {
    /// Chart series validation error
    #[error("Chart error: {0}")]
    Chart(#[from] ChartError),

    /// Lookup by identifier found no matching record
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/Deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal setup or rendering error
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Shorthand for a not-found lookup failure
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }
}
