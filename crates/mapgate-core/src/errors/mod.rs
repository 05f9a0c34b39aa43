//! Error handling for mapgate.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod evaluation_error;
pub mod load_error;
pub mod map_error;
pub mod rule_config_error;
pub mod ruleset_error;
pub mod run_error;

pub use config_error::ConfigError;
pub use error_code::MapgateErrorCode;
pub use evaluation_error::EvaluationError;
pub use load_error::LoadError;
pub use map_error::MapError;
pub use rule_config_error::RuleConfigError;
pub use ruleset_error::RulesetError;
pub use run_error::RunError;
