//! Errors locating a map or reading its decoded dump.

use super::error_code::{self, MapgateErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("Map file not found: {path}")]
    NotFound { path: String },

    #[error("Failed to read map dump {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid map dump {path}: {message}")]
    Decode { path: String, message: String },
}

impl MapgateErrorCode for MapError {
    fn error_code(&self) -> &'static str {
        error_code::MAP_ERROR
    }
}
