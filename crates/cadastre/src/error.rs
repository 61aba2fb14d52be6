//! Error types for the Cadastre library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Cadastre operations.
#[derive(Debug, Error)]
pub enum CadastreError {
    /// Error reading or writing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed area configuration document.
    ///
    /// Callers that want the lenient behavior log this and proceed as if no
    /// configuration exists.
    #[error("Failed to parse configuration '{path}': {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// Transport or authorization failure from a text-generation provider.
    #[error("{provider} API error: {message}")]
    Api {
        provider: &'static str,
        message: String,
    },

    /// Invalid provider construction or request setup.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Cadastre operations.
pub type Result<T> = std::result::Result<T, CadastreError>;
