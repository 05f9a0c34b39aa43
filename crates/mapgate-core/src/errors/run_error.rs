//! Infrastructure errors that prevent a run from starting.
//! Aggregates subsystem errors via `From` conversions.

use super::error_code::MapgateErrorCode;
use super::{ConfigError, MapError, RulesetError};

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Ruleset error: {0}")]
    Ruleset(#[from] RulesetError),

    #[error("Map error: {0}")]
    Map(#[from] MapError),
}

impl MapgateErrorCode for RunError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Ruleset(e) => e.error_code(),
            Self::Map(e) => e.error_code(),
        }
    }
}
