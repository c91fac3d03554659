use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or decoding a model descriptor.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Failed to read model file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode binary model descriptor: {0}")]
    Decode(String),

    #[error("Failed to encode binary model descriptor: {0}")]
    Encode(String),

    #[error("Failed to parse JSON model descriptor: {0}")]
    Json(String),
}

/// Errors that can occur when converting a custom user format into a `ModelDefinition`.
#[derive(Error, Debug, Clone)]
pub enum ModelConversionError {
    #[error("Invalid custom model data: {0}")]
    ValidationError(String),
}

/// Errors that can occur while writing the rendered graph description.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Could not write graph description to '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
