//! Rule record errors. A rule entry that raises one of these is dropped
//! from the run.

use super::error_code::{self, MapgateErrorCode};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RuleConfigError {
    #[error("Malformed rule record{}: {message}", fmt_rule(.rule))]
    Malformed { rule: Option<String>, message: String },

    #[error("Rule '{rule}' has unknown type '{value}' (expected require, fail or skip)")]
    UnknownType { rule: String, value: String },

    #[error("Rule '{rule}' is declared more than once")]
    DuplicateName { rule: String },

    #[error("Invalid params for rule '{rule}': {message}")]
    InvalidParams { rule: String, message: String },
}

fn fmt_rule(rule: &Option<String>) -> String {
    match rule {
        Some(name) => format!(" '{name}'"),
        None => String::new(),
    }
}

impl RuleConfigError {
    /// Name of the offending rule, when the record carried one.
    pub fn rule_name(&self) -> Option<&str> {
        match self {
            Self::Malformed { rule, .. } => rule.as_deref(),
            Self::UnknownType { rule, .. }
            | Self::DuplicateName { rule }
            | Self::InvalidParams { rule, .. } => Some(rule),
        }
    }
}

impl MapgateErrorCode for RuleConfigError {
    fn error_code(&self) -> &'static str {
        error_code::RULE_CONFIG_ERROR
    }
}
