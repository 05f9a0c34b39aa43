//! Markdown reporter: the summary posted on CI runs.

use std::fmt::Write as _;

use super::Reporter;
use crate::engine::{RuleResult, RuleStatus, RunReport};

pub struct MarkdownReporter;

impl MarkdownReporter {
    fn render_result(result: &RuleResult) -> String {
        let mut out = String::new();
        let explanation = match (&result.explanation, result.status) {
            (Some(text), status) if status != RuleStatus::Completed => text.as_str(),
            _ => "-",
        };

        let _ = writeln!(out, "#### {} {}", result.status.symbol(), result.rule.name);
        let _ = writeln!(out, "**Explanation**: {explanation}");
        out.push_str("**Violations**:\n");
        if result.violations.is_empty() {
            out.push_str("- No violations detected\n");
        } else {
            for violation in &result.violations {
                let _ = writeln!(out, "- {violation}");
            }
        }
        if let Some(ref error) = result.error {
            let _ = writeln!(out, "**Error**: {error}");
        }
        out
    }
}

impl Reporter for MarkdownReporter {
    fn name(&self) -> &'static str {
        "markdown"
    }

    fn generate(&self, report: &RunReport) -> Result<String, String> {
        let blocks: Vec<String> = report.results.iter().map(Self::render_result).collect();
        Ok(blocks.join("\n"))
    }
}
