#[path = "../common/mod.rs"]
mod common;

use common::*;
use mapgate_engine::engine::RuleOutcome;
use mapgate_engine::reporters::create_reporter;
use mapgate_engine::{RuleEngine, RuleStatus, RunReport};
use proptest::prelude::*;
use serde_json::Value;

const CLASSES: [&str; 3] = ["Pass", "Violate", "Broken"];
const TYPES: [&str; 3] = ["require", "fail", "skip"];

fn records(plan: &[(usize, usize, Vec<usize>)]) -> Vec<Value> {
    plan.iter()
        .enumerate()
        .map(|(i, (class, rule_type, deps))| {
            let deps: Vec<String> = deps.iter().map(|d| format!("r{d}")).collect();
            let deps: Vec<&str> = deps.iter().map(String::as_str).collect();
            record(&format!("r{i}"), CLASSES[*class], TYPES[*rule_type], &deps)
        })
        .collect()
}

fn run(records: &[Value]) -> RunReport {
    RuleEngine::new(registry().registry).run(records, raw_file(), &empty_map())
}

fn ruleset() -> impl Strategy<Value = Vec<(usize, usize, Vec<usize>)>> {
    prop::collection::vec(
        (0usize..3, 0usize..3, prop::collection::vec(0usize..10, 0..3)),
        0..10,
    )
}

proptest! {
    #[test]
    fn each_rule_recorded_at_most_once_in_declared_order(plan in ruleset()) {
        let records = records(&plan);
        let report = run(&records);

        let expected: Vec<String> = (0..report.results.len()).map(|i| format!("r{i}")).collect();
        prop_assert_eq!(report.names(), expected.iter().map(String::as_str).collect::<Vec<_>>());
        if !report.is_halted() {
            prop_assert_eq!(report.results.len(), records.len());
        }
    }

    #[test]
    fn halt_only_on_last_required_failure(plan in ruleset()) {
        let report = run(&records(&plan));
        if let Some(name) = &report.halted_by {
            let last = report.results.last().unwrap();
            prop_assert_eq!(last.name(), name.as_str());
            prop_assert_eq!(last.status, RuleStatus::Failed);
            prop_assert!(last.rule.is_required());
        }
        for result in report.results.iter().rev().skip(1) {
            prop_assert!(!(result.rule.is_required() && result.status == RuleStatus::Failed));
        }
    }

    #[test]
    fn dependencies_gate_on_completed_only(plan in ruleset()) {
        let report = run(&records(&plan));
        for (i, result) in report.results.iter().enumerate() {
            let met = result.rule.depends_on.iter().all(|dep| {
                report.results[..i]
                    .iter()
                    .any(|earlier| earlier.name() == dep && earlier.status == RuleStatus::Completed)
            });
            let gated = matches!(result.outcome, RuleOutcome::DependencyUnmet { .. });
            prop_assert_eq!(gated, !met);
            if gated {
                prop_assert_eq!(result.status, RuleStatus::Failed);
            }
        }
    }

    #[test]
    fn verdict_matches_statuses(plan in ruleset()) {
        let report = run(&records(&plan));
        let expected = !report.is_halted()
            && report.results.iter().all(|r| r.status != RuleStatus::Failed);
        prop_assert_eq!(report.verdict(), expected);
    }

    #[test]
    fn repeated_runs_render_identically(plan in ruleset()) {
        let records = records(&plan);
        let first = run(&records);
        let second = run(&records);
        for format in ["markdown", "json"] {
            let reporter = create_reporter(format).unwrap();
            prop_assert_eq!(reporter.generate(&first).unwrap(), reporter.generate(&second).unwrap());
        }
    }
}
