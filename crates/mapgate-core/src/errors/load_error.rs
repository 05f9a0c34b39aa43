//! Rule implementation lookup errors.

use super::error_code::{self, MapgateErrorCode};

/// The registry could not resolve a rule's `module` / `class_name`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    #[error("Module '{module}' not found")]
    UnknownModule { module: String },

    #[error("Rule class '{class_name}' not found in module '{module}'")]
    UnknownClass { module: String, class_name: String },
}

impl MapgateErrorCode for LoadError {
    fn error_code(&self) -> &'static str {
        error_code::RULE_LOAD_ERROR
    }
}
