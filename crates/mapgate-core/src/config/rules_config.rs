//! Rule-file discovery configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_RULES_DIR;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RulesConfig {
    /// Directory holding `*.yaml` rule files. Default: "map_rules".
    pub dir: Option<String>,
    /// Filename prefixes to leave out of the merge.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl RulesConfig {
    pub fn effective_dir(&self) -> &str {
        self.dir.as_deref().unwrap_or(DEFAULT_RULES_DIR)
    }
}
