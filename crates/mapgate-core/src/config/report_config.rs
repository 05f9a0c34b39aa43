//! Report output configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_REPORT_FORMAT;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReportConfig {
    /// "markdown" | "json". Default: "markdown".
    pub format: Option<String>,
    /// Wrap the report in CI headings. Default: false.
    pub ci: Option<bool>,
}

impl ReportConfig {
    pub fn effective_format(&self) -> &str {
        self.format.as_deref().unwrap_or(DEFAULT_REPORT_FORMAT)
    }

    pub fn effective_ci(&self) -> bool {
        self.ci.unwrap_or(false)
    }
}
