//! Dependency eligibility over the results recorded so far.
//!
//! Only declared order counts as topology: a dependency that has not been
//! recorded yet is unmet, and anything other than `Completed` is unmet.

use super::results::RunResults;
use super::status::RuleStatus;
use crate::rules::RuleConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Eligibility {
    Eligible,
    Ineligible { unmet: Vec<String> },
}

impl Eligibility {
    pub fn is_eligible(&self) -> bool {
        matches!(self, Self::Eligible)
    }
}

/// Read-only view over the coordinator's results.
pub struct DependencyResolver<'r> {
    results: &'r RunResults,
}

impl<'r> DependencyResolver<'r> {
    pub fn new(results: &'r RunResults) -> Self {
        Self { results }
    }

    pub fn is_met(&self, dependency: &str) -> bool {
        self.results.status_of(dependency) == Some(RuleStatus::Completed)
    }

    pub fn check(&self, rule: &RuleConfig) -> Eligibility {
        let unmet: Vec<String> = rule
            .depends_on
            .iter()
            .filter(|dep| !self.is_met(dep))
            .cloned()
            .collect();
        if unmet.is_empty() {
            Eligibility::Eligible
        } else {
            Eligibility::Ineligible { unmet }
        }
    }
}
