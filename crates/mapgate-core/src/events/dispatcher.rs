//! EventDispatcher: synchronous event dispatch, free when no handler is registered.

use std::sync::Arc;

use super::handler::RunEventHandler;
use super::types::*;

#[derive(Default, Clone)]
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn RunEventHandler>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, handler: Arc<dyn RunEventHandler>) {
        self.handlers.push(handler);
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// A panicking handler does not stop later handlers from seeing the event.
    fn emit<F: Fn(&dyn RunEventHandler)>(&self, f: F) {
        for handler in &self.handlers {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                f(handler.as_ref());
            }));
            if result.is_err() {
                ::tracing::warn!("run event handler panicked; continuing");
            }
        }
    }

    pub fn emit_rule_dropped(&self, event: &RuleDroppedEvent) {
        self.emit(|h| h.on_rule_dropped(event));
    }

    pub fn emit_rule_ineligible(&self, event: &RuleIneligibleEvent) {
        self.emit(|h| h.on_rule_ineligible(event));
    }

    pub fn emit_rule_load_failed(&self, event: &RuleLoadFailedEvent) {
        self.emit(|h| h.on_rule_load_failed(event));
    }

    pub fn emit_rule_passed(&self, event: &RulePassedEvent) {
        self.emit(|h| h.on_rule_passed(event));
    }

    pub fn emit_rule_violated(&self, event: &RuleViolatedEvent) {
        self.emit(|h| h.on_rule_violated(event));
    }

    pub fn emit_rule_errored(&self, event: &RuleErroredEvent) {
        self.emit(|h| h.on_rule_errored(event));
    }

    pub fn emit_run_halted(&self, event: &RunHaltedEvent) {
        self.emit(|h| h.on_run_halted(event));
    }

    pub fn emit_run_complete(&self, event: &RunCompleteEvent) {
        self.emit(|h| h.on_run_complete(event));
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
