//! Execution coordinator: drives each rule from record to result and decides
//! whether the run continues.

use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use std::time::{Duration, Instant};

use mapgate_core::errors::{EvaluationError, RuleConfigError};
use mapgate_core::events::*;
use serde_json::Value;

use super::policy::PolicyDecision;
use super::resolver::{DependencyResolver, Eligibility};
use super::results::RunResults;
use super::status::{RuleOutcome, RuleResult, RuleStatus, RunReport};
use crate::map::MapSource;
use crate::rules::{ConfigureError, RuleConfig, RuleConfigDecoder, RuleContext, RuleRegistry};

/// Runs rule records strictly in declared order. A later rule always sees
/// the settled result of every earlier one.
#[derive(Debug, Default)]
pub struct RuleEngine {
    registry: RuleRegistry,
    events: EventDispatcher,
}

/// What one rule pass produced.
enum Step {
    Dropped(RuleConfigError),
    Recorded { result: RuleResult, halt: bool },
}

impl RuleEngine {
    pub fn new(registry: RuleRegistry) -> Self {
        Self {
            registry,
            events: EventDispatcher::new(),
        }
    }

    /// Engine over the built-in checks.
    pub fn with_builtin() -> Self {
        Self::new(RuleRegistry::with_builtin())
    }

    pub fn with_events(mut self, events: EventDispatcher) -> Self {
        self.events = events;
        self
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Validate `map` (decoded from `raw_file`) against `records`.
    pub fn run(&self, records: &[Value], raw_file: &Path, map: &dyn MapSource) -> RunReport {
        self.run_with_context(records, RuleContext::new(raw_file, map))
    }

    pub fn run_with_context(&self, records: &[Value], ctx: RuleContext<'_>) -> RunReport {
        let mut decoder = RuleConfigDecoder::new();
        let mut results = RunResults::new();

        for record in records {
            let config = match decoder.decode(record) {
                Ok(config) => config,
                Err(err) => {
                    self.drop_rule(err);
                    continue;
                }
            };

            match self.execute(config, &results, ctx) {
                Step::Dropped(err) => self.drop_rule(err),
                Step::Recorded { result, halt } => {
                    let name = result.rule.name.clone();
                    results.record(result);
                    if halt {
                        tracing::error!(rule = %name, recorded = results.len(), "required rule failed, halting run");
                        self.events.emit_run_halted(&RunHaltedEvent {
                            rule: name.clone(),
                            recorded: results.len(),
                        });
                        return RunReport {
                            results: results.into_vec(),
                            halted_by: Some(name),
                        };
                    }
                }
            }
        }

        let report = RunReport {
            results: results.into_vec(),
            halted_by: None,
        };
        let verdict = report.verdict();
        tracing::info!(recorded = report.results.len(), verdict, "all rules processed");
        self.events.emit_run_complete(&RunCompleteEvent {
            recorded: report.results.len(),
            verdict,
        });
        report
    }

    fn drop_rule(&self, err: RuleConfigError) {
        tracing::error!(rule = err.rule_name().unwrap_or("<unnamed>"), error = %err, "dropping rule entry");
        self.events.emit_rule_dropped(&RuleDroppedEvent {
            rule: err.rule_name().map(str::to_string),
            reason: err.to_string(),
        });
    }

    fn execute(&self, config: RuleConfig, results: &RunResults, ctx: RuleContext<'_>) -> Step {
        if let Eligibility::Ineligible { unmet } = DependencyResolver::new(results).check(&config) {
            return self.ineligible(config, unmet);
        }

        let instance = match self.registry.configure(&config, ctx) {
            Ok(instance) => instance,
            Err(ConfigureError::Config(err)) => return Step::Dropped(err),
            Err(ConfigureError::Load(err)) => {
                tracing::warn!(rule = %config.name, module = %config.module, class_name = %config.class_name, error = %err, "rule implementation not found");
                self.events.emit_rule_load_failed(&RuleLoadFailedEvent {
                    rule: config.name.clone(),
                    module: config.module.clone(),
                    class_name: config.class_name.clone(),
                    reason: err.to_string(),
                });
                let mut result = RuleResult::new(config, RuleOutcome::LoadFailed);
                result.status = RuleStatus::Warn;
                result.error = Some(err.to_string());
                return Step::Recorded {
                    result,
                    halt: false,
                };
            }
        };

        let explanation = instance.explain();

        let start = Instant::now();
        let evaluated = panic::catch_unwind(AssertUnwindSafe(|| instance.evaluate()))
            .unwrap_or_else(|payload| Err(EvaluationError::Panicked(panic_message(payload.as_ref()))));
        let elapsed = start.elapsed();

        let mut result = RuleResult::new(config, RuleOutcome::Passed);
        result.explanation = Some(explanation);
        result.elapsed = Some(elapsed);

        let halt = match evaluated {
            Ok(violations) if violations.is_empty() => {
                tracing::info!(rule = %result.rule.name, elapsed_ms = millis(elapsed), "rule passed");
                result.status = RuleStatus::Completed;
                self.events.emit_rule_passed(&RulePassedEvent {
                    rule: result.rule.name.clone(),
                    elapsed_ms: millis(elapsed),
                });
                false
            }
            Ok(violations) => {
                let decision = PolicyDecision::on_failure(result.rule.rule_type);
                for violation in &violations {
                    tracing::info!(rule = %result.rule.name, %violation, "violation");
                }
                log_policy(&result.rule, decision, elapsed, "rule failed");
                result.status = decision.status;
                result.outcome = RuleOutcome::Violated;
                result.violations = violations;
                self.events.emit_rule_violated(&RuleViolatedEvent {
                    rule: result.rule.name.clone(),
                    status: decision.status.to_string(),
                    violation_count: result.violations.len(),
                    elapsed_ms: millis(elapsed),
                });
                decision.halt
            }
            Err(err) => {
                let decision = PolicyDecision::on_failure(result.rule.rule_type);
                tracing::error!(rule = %result.rule.name, error = ?err, "rule evaluation error");
                log_policy(&result.rule, decision, elapsed, "rule encountered an error");
                result.status = decision.status;
                result.outcome = RuleOutcome::Errored;
                result.error = Some(err.to_string());
                self.events.emit_rule_errored(&RuleErroredEvent {
                    rule: result.rule.name.clone(),
                    status: decision.status.to_string(),
                    error: err.to_string(),
                    elapsed_ms: millis(elapsed),
                });
                decision.halt
            }
        };

        Step::Recorded { result, halt }
    }

    fn ineligible(&self, config: RuleConfig, unmet: Vec<String>) -> Step {
        let decision = PolicyDecision::on_unmet_dependency(config.rule_type);
        tracing::info!(rule = %config.name, unmet = ?unmet, "skipping rule due to unmet dependencies");
        self.events.emit_rule_ineligible(&RuleIneligibleEvent {
            rule: config.name.clone(),
            unmet: unmet.clone(),
        });
        let mut result = RuleResult::new(config, RuleOutcome::DependencyUnmet { unmet });
        result.status = decision.status;
        Step::Recorded {
            result,
            halt: decision.halt,
        }
    }
}

fn log_policy(rule: &RuleConfig, decision: PolicyDecision, elapsed: Duration, what: &str) {
    let elapsed_ms = millis(elapsed);
    match decision.status {
        RuleStatus::Failed => {
            tracing::error!(rule = %rule.name, rule_type = %rule.rule_type, elapsed_ms, "{what} (required)")
        }
        RuleStatus::Warn => {
            tracing::warn!(rule = %rule.name, rule_type = %rule.rule_type, elapsed_ms, "{what}, continuing")
        }
        _ => {
            tracing::warn!(rule = %rule.name, rule_type = %rule.rule_type, elapsed_ms, "{what}, skipping")
        }
    }
}

fn millis(elapsed: Duration) -> u64 {
    elapsed.as_millis() as u64
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
