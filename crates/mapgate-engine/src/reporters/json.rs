//! JSON reporter for tooling.

use serde::Serialize;

use super::Reporter;
use crate::engine::{RuleResult, RunReport};

#[derive(Default)]
pub struct JsonReporter {
    pub pretty: bool,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    verdict: bool,
    halted_by: Option<&'a str>,
    results: &'a [RuleResult],
}

impl Reporter for JsonReporter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn generate(&self, report: &RunReport) -> Result<String, String> {
        let body = JsonReport {
            verdict: report.verdict(),
            halted_by: report.halted_by.as_deref(),
            results: &report.results,
        };
        let rendered = if self.pretty {
            serde_json::to_string_pretty(&body)
        } else {
            serde_json::to_string(&body)
        };
        rendered.map_err(|e| e.to_string())
    }
}
