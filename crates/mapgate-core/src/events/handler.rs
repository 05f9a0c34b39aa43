//! RunEventHandler trait, all methods no-op by default.

use super::types::*;

/// Handlers override only the events they care about.
pub trait RunEventHandler: Send + Sync {
    fn on_rule_dropped(&self, _event: &RuleDroppedEvent) {}
    fn on_rule_ineligible(&self, _event: &RuleIneligibleEvent) {}
    fn on_rule_load_failed(&self, _event: &RuleLoadFailedEvent) {}
    fn on_rule_passed(&self, _event: &RulePassedEvent) {}
    fn on_rule_violated(&self, _event: &RuleViolatedEvent) {}
    fn on_rule_errored(&self, _event: &RuleErroredEvent) {}
    fn on_run_halted(&self, _event: &RunHaltedEvent) {}
    fn on_run_complete(&self, _event: &RunCompleteEvent) {}
}
