//! Top-level mapgate configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{ReportConfig, RulesConfig};
use crate::constants::{PROJECT_CONFIG_FILE, REPORT_FORMATS, USER_CONFIG_DIR};
use crate::errors::ConfigError;

/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`MAPGATE_*`)
/// 3. Project config (`mapgate.toml` in the project root)
/// 4. User config (`~/.mapgate/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MapgateConfig {
    pub rules: RulesConfig,
    pub report: ReportConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub rules_dir: Option<String>,
    pub rules_exclude: Option<Vec<String>>,
    pub report_format: Option<String>,
    pub report_ci: Option<bool>,
}

impl MapgateConfig {
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(err @ ConfigError::ParseError { .. }) => return Err(err),
                    Err(err) => {
                        tracing::warn!(path = %user_config_path.display(), error = %err, "ignoring unreadable user config");
                    }
                }
            }
        }

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    pub fn validate(config: &MapgateConfig) -> Result<(), ConfigError> {
        if let Some(ref dir) = config.rules.dir {
            if dir.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "rules.dir".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        if let Some(ref format) = config.report.format {
            if !REPORT_FORMATS.contains(&format.as_str()) {
                return Err(ConfigError::ValidationFailed {
                    field: "report.format".to_string(),
                    message: format!("must be one of {}", REPORT_FORMATS.join(", ")),
                });
            }
        }
        Ok(())
    }

    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(USER_CONFIG_DIR).join("config.toml"))
    }

    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut MapgateConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: MapgateConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// `other` wins only where it has a value.
    fn merge(base: &mut MapgateConfig, other: &MapgateConfig) {
        if other.rules.dir.is_some() {
            base.rules.dir = other.rules.dir.clone();
        }
        if !other.rules.exclude.is_empty() {
            base.rules.exclude = other.rules.exclude.clone();
        }
        if other.report.format.is_some() {
            base.report.format = other.report.format.clone();
        }
        if other.report.ci.is_some() {
            base.report.ci = other.report.ci;
        }
    }

    /// Pattern: `MAPGATE_RULES_DIR`, `MAPGATE_RULES_EXCLUDE` (comma separated),
    /// `MAPGATE_REPORT_FORMAT`, `MAPGATE_REPORT_CI`.
    fn apply_env_overrides(config: &mut MapgateConfig) {
        if let Ok(val) = std::env::var("MAPGATE_RULES_DIR") {
            config.rules.dir = Some(val);
        }
        if let Ok(val) = std::env::var("MAPGATE_RULES_EXCLUDE") {
            config.rules.exclude = split_list(&val);
        }
        if let Ok(val) = std::env::var("MAPGATE_REPORT_FORMAT") {
            config.report.format = Some(val);
        }
        if let Ok(val) = std::env::var("MAPGATE_REPORT_CI") {
            if let Ok(v) = val.parse::<bool>() {
                config.report.ci = Some(v);
            }
        }
    }

    fn apply_cli_overrides(config: &mut MapgateConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.rules_dir {
            config.rules.dir = Some(v.clone());
        }
        if let Some(ref v) = cli.rules_exclude {
            config.rules.exclude = v.clone();
        }
        if let Some(ref v) = cli.report_format {
            config.report.format = Some(v.clone());
        }
        if let Some(v) = cli.report_ci {
            config.report.ci = Some(v);
        }
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Splits `a,b, c` into trimmed, non-empty entries.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_list_trims_and_drops_empties() {
        assert_eq!(split_list("a, b,,c "), vec!["a", "b", "c"]);
        assert!(split_list("").is_empty());
    }

    #[test]
    fn merge_only_overrides_set_values() {
        let mut base = MapgateConfig::from_toml("[rules]\ndir = \"one\"\nexclude = [\"x\"]\n").unwrap();
        let other = MapgateConfig::from_toml("[report]\nci = true\n").unwrap();
        MapgateConfig::merge(&mut base, &other);
        assert_eq!(base.rules.effective_dir(), "one");
        assert_eq!(base.rules.exclude, vec!["x"]);
        assert!(base.report.effective_ci());
    }
}
