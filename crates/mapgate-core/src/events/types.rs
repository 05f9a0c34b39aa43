//! Event payloads, one per rule transition.

use serde::{Deserialize, Serialize};

/// A rule record was rejected before anything was recorded for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleDroppedEvent {
    pub rule: Option<String>,
    pub reason: String,
}

/// A rule's dependencies had not completed; it was never loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleIneligibleEvent {
    pub rule: String,
    pub unmet: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleLoadFailedEvent {
    pub rule: String,
    pub module: String,
    pub class_name: String,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RulePassedEvent {
    pub rule: String,
    pub elapsed_ms: u64,
}

/// The rule ran and returned violations. `status` is the policy outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleViolatedEvent {
    pub rule: String,
    pub status: String,
    pub violation_count: usize,
    pub elapsed_ms: u64,
}

/// The rule's check itself failed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleErroredEvent {
    pub rule: String,
    pub status: String,
    pub error: String,
    pub elapsed_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunHaltedEvent {
    pub rule: String,
    pub recorded: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunCompleteEvent {
    pub recorded: usize,
    pub verdict: bool,
}
