//! Rule-file loading errors.

use super::error_code::{self, MapgateErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum RulesetError {
    #[error("Rules directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("Invalid rule file pattern {pattern}: {message}")]
    Pattern { pattern: String, message: String },

    #[error("Failed to read rule file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse rule file {path}: {message}")]
    Parse { path: String, message: String },

    #[error("Rule file {path} has no top-level `rules` list")]
    MissingRules { path: String },
}

impl MapgateErrorCode for RulesetError {
    fn error_code(&self) -> &'static str {
        error_code::RULESET_ERROR
    }
}
