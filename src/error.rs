//! Error types for gottengeo

use thiserror::Error;

/// Main error type for gottengeo operations
#[derive(Error, Debug)]
pub enum Error {
    /// The gazetteer (or another reference resource) could not be opened or read
    #[error("Resource unavailable: {resource}: {source}")]
    ResourceUnavailable {
        resource: String,
        #[source]
        source: std::io::Error,
    },

    /// The document is well-formed but not the kind we were asked to read
    #[error("Format mismatch: expected {expected}, found {found}")]
    FormatMismatch { expected: String, found: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Build a `ResourceUnavailable` error for the named resource
    pub fn unavailable(resource: impl Into<String>, source: std::io::Error) -> Self {
        Self::ResourceUnavailable {
            resource: resource.into(),
            source,
        }
    }
}

/// Result type alias for gottengeo operations
pub type Result<T> = std::result::Result<T, Error>;
