//! Workspace-wide constants.

/// Environment variable holding the `EnvFilter` directives.
pub const LOG_ENV_VAR: &str = "MAPGATE_LOG";

/// Filter used when `MAPGATE_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "mapgate=info";

/// Project-level config file name.
pub const PROJECT_CONFIG_FILE: &str = "mapgate.toml";

/// Directory (under the user's home) holding the user-level config.
pub const USER_CONFIG_DIR: &str = ".mapgate";

/// Default directory scanned for `*.yaml` rule files.
pub const DEFAULT_RULES_DIR: &str = "map_rules";

/// Default report format.
pub const DEFAULT_REPORT_FORMAT: &str = "markdown";

/// Report formats understood by the reporters.
pub const REPORT_FORMATS: &[&str] = &["markdown", "json"];
