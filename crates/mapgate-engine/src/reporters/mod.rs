//! Reporters: output formats for a run report.

pub mod json;
pub mod markdown;

use crate::engine::RunReport;

/// Trait for report generation.
pub trait Reporter: Send + Sync {
    fn name(&self) -> &'static str;
    fn generate(&self, report: &RunReport) -> Result<String, String>;
}

/// Create a reporter by format name.
pub fn create_reporter(format: &str) -> Option<Box<dyn Reporter>> {
    match format {
        "markdown" => Some(Box::new(markdown::MarkdownReporter)),
        "json" => Some(Box::new(json::JsonReporter::default())),
        _ => None,
    }
}

pub fn available_formats() -> &'static [&'static str] {
    mapgate_core::constants::REPORT_FORMATS
}
