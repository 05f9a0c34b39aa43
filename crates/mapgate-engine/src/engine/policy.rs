//! Failure policy keyed by rule type.

use super::status::RuleStatus;
use crate::rules::RuleType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolicyDecision {
    pub status: RuleStatus,
    pub halt: bool,
}

impl PolicyDecision {
    /// Outcome of a rule that returned violations or errored.
    pub fn on_failure(rule_type: RuleType) -> Self {
        match rule_type {
            RuleType::Require => Self {
                status: RuleStatus::Failed,
                halt: true,
            },
            RuleType::Fail => Self {
                status: RuleStatus::Warn,
                halt: false,
            },
            RuleType::Skip => Self {
                status: RuleStatus::Skipped,
                halt: false,
            },
        }
    }

    /// Outcome of a rule whose dependencies were unmet: always `Failed`,
    /// and only a `require` rule stops the run.
    pub fn on_unmet_dependency(rule_type: RuleType) -> Self {
        Self {
            status: RuleStatus::Failed,
            halt: rule_type == RuleType::Require,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_policy_table() {
        assert_eq!(
            PolicyDecision::on_failure(RuleType::Require),
            PolicyDecision {
                status: RuleStatus::Failed,
                halt: true
            }
        );
        assert_eq!(PolicyDecision::on_failure(RuleType::Fail).status, RuleStatus::Warn);
        assert_eq!(PolicyDecision::on_failure(RuleType::Skip).status, RuleStatus::Skipped);
        assert!(!PolicyDecision::on_failure(RuleType::Fail).halt);
        assert!(!PolicyDecision::on_failure(RuleType::Skip).halt);
    }

    #[test]
    fn unmet_dependency_is_always_failed() {
        for &rule_type in RuleType::all() {
            let decision = PolicyDecision::on_unmet_dependency(rule_type);
            assert_eq!(decision.status, RuleStatus::Failed);
            assert_eq!(decision.halt, rule_type == RuleType::Require);
        }
    }
}
