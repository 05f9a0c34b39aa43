//! Per-rule result records and the run report.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::rules::{RuleConfig, Violation};

/// Terminal status of one rule. `Failed` is the initial state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleStatus {
    #[default]
    Failed,
    Completed,
    Warn,
    Skipped,
}

impl RuleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Failed => "failed",
            Self::Completed => "completed",
            Self::Warn => "warn",
            Self::Skipped => "skipped",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Completed => "✅",
            Self::Failed => "❌",
            Self::Warn => "⚠️",
            Self::Skipped => "⏭️",
        }
    }
}

impl fmt::Display for RuleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a rule arrived at its status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RuleOutcome {
    /// Evaluated with no violations.
    Passed,
    /// Evaluated and returned violations.
    Violated,
    /// The check itself failed.
    Errored,
    /// Dependencies had not completed; the rule was never loaded.
    DependencyUnmet { unmet: Vec<String> },
    /// The registry could not resolve the rule's implementation.
    LoadFailed,
}

/// Execution record of one rule.
#[derive(Debug, Clone, Serialize)]
pub struct RuleResult {
    pub rule: RuleConfig,
    pub status: RuleStatus,
    pub outcome: RuleOutcome,
    pub explanation: Option<String>,
    pub violations: Vec<Violation>,
    /// Diagnostic of an evaluation or load error.
    pub error: Option<String>,
    /// Evaluation wall time. Never rendered, so reports stay reproducible.
    #[serde(skip)]
    pub elapsed: Option<Duration>,
}

impl RuleResult {
    pub(crate) fn new(rule: RuleConfig, outcome: RuleOutcome) -> Self {
        Self {
            rule,
            status: RuleStatus::Failed,
            outcome,
            explanation: None,
            violations: Vec::new(),
            error: None,
            elapsed: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.rule.name
    }

    pub fn is_completed(&self) -> bool {
        self.status == RuleStatus::Completed
    }
}

/// All results of one run, in the order they were recorded.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub results: Vec<RuleResult>,
    /// The `require` rule that stopped the run, if any.
    pub halted_by: Option<String>,
}

impl RunReport {
    /// `true` iff no rule ended `Failed` and the run was not halted.
    pub fn verdict(&self) -> bool {
        self.halted_by.is_none() && self.results.iter().all(|r| r.status != RuleStatus::Failed)
    }

    pub fn is_halted(&self) -> bool {
        self.halted_by.is_some()
    }

    pub fn get(&self, name: &str) -> Option<&RuleResult> {
        self.results.iter().find(|r| r.name() == name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.results.iter().map(RuleResult::name).collect()
    }

    pub fn count(&self, status: RuleStatus) -> usize {
        self.results.iter().filter(|r| r.status == status).count()
    }

    pub fn violation_count(&self) -> usize {
        self.results.iter().map(|r| r.violations.len()).sum()
    }
}
