//! Errors raised by a rule's check itself, as opposed to violations it found.

use super::error_code::{self, MapgateErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum EvaluationError {
    #[error("No map object is available to the rule")]
    MissingMap,

    #[error("No raw map file is available to the rule")]
    MissingRawFile,

    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    CheckFailed(String),

    #[error("Rule panicked: {0}")]
    Panicked(String),
}

impl EvaluationError {
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl MapgateErrorCode for EvaluationError {
    fn error_code(&self) -> &'static str {
        error_code::EVALUATION_ERROR
    }
}
