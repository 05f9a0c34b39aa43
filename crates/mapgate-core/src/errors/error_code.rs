//! MapgateErrorCode trait for machine-readable error output.

/// Every error enum implements this to expose a stable code string.
/// The CLI prints infrastructure errors as `coded_string()` on stderr.
pub trait MapgateErrorCode {
    /// Returns the error code string (e.g., "RULE_LOAD_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const RULE_CONFIG_ERROR: &str = "RULE_CONFIG_ERROR";
pub const RULE_LOAD_ERROR: &str = "RULE_LOAD_ERROR";
pub const EVALUATION_ERROR: &str = "EVALUATION_ERROR";
pub const RULESET_ERROR: &str = "RULESET_ERROR";
pub const MAP_ERROR: &str = "MAP_ERROR";
