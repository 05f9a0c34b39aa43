//! Raw map file size limits.

use mapgate_core::errors::{EvaluationError, RuleConfigError};
use serde::Deserialize;
use serde_json::json;

use crate::rules::{params, Rule, RuleConfig, RuleContext, Violation};

const UNITS: [(&str, u64); 4] = [
    ("BYTE", 1),
    ("KB", 1024),
    ("MB", 1024 * 1024),
    ("GB", 1024 * 1024 * 1024),
];

#[derive(Debug, Deserialize)]
struct FileSizeParams {
    #[serde(default)]
    max_file_size: Option<String>,
    #[serde(default)]
    min_file_size: Option<String>,
}

#[derive(Debug, Clone)]
struct Limit {
    text: String,
    bytes: u64,
}

impl Limit {
    fn parse(config: &RuleConfig, text: Option<String>) -> Result<Option<Self>, RuleConfigError> {
        let Some(text) = text else {
            return Ok(None);
        };
        let bytes = parse_size(&text).map_err(|e| params::invalid(config, e))?;
        Ok(Some(Self { text, bytes }))
    }
}

/// Checks the on-disk size of the map against a maximum and/or minimum.
#[derive(Debug)]
pub struct FileSize {
    max: Option<Limit>,
    min: Option<Limit>,
}

impl FileSize {
    pub fn build(config: &RuleConfig) -> Result<Box<dyn Rule>, RuleConfigError> {
        let raw: FileSizeParams = params::decode(config)?;
        let max = Limit::parse(config, raw.max_file_size)?;
        let min = Limit::parse(config, raw.min_file_size)?;
        match (&max, &min) {
            (None, None) => {
                return Err(params::invalid(
                    config,
                    "one of `max_file_size` or `min_file_size` is required",
                ))
            }
            (Some(max), Some(min)) if min.bytes > max.bytes => {
                return Err(params::invalid(
                    config,
                    format!("min_file_size {} exceeds max_file_size {}", min.text, max.text),
                ))
            }
            _ => {}
        }
        Ok(Box::new(Self { max, min }))
    }
}

impl Rule for FileSize {
    fn explain(&self) -> String {
        let mut parts = Vec::new();
        if let Some(max) = &self.max {
            parts.push(format!("not more than {}", max.text));
        }
        if let Some(min) = &self.min {
            parts.push(format!("not less than {}", min.text));
        }
        format!("Map file is {}", parts.join(" and "))
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Result<Vec<Violation>, EvaluationError> {
        let path = ctx.raw_file()?;
        let size = std::fs::metadata(path)
            .map_err(|e| EvaluationError::io(path.display().to_string(), e))?
            .len();

        let mut violations = Vec::new();
        if let Some(max) = self.max.as_ref().filter(|max| size > max.bytes) {
            violations.push(Violation::new(
                format!("The filesize is above the allowed limit of {}.", max.text),
                vec![json!(size), json!(">"), json!(max.bytes)],
            ));
        }
        if let Some(min) = self.min.as_ref().filter(|min| size < min.bytes) {
            violations.push(Violation::new(
                format!("The filesize is below the allowed minimum of {}.", min.text),
                vec![json!(size), json!("<"), json!(min.bytes)],
            ));
        }
        Ok(violations)
    }
}

/// Parse sizes such as `2MB`, `512 KB` or `100Byte`. Units are 1024-based
/// and case-insensitive.
pub fn parse_size(text: &str) -> Result<u64, String> {
    let upper = text.trim().to_ascii_uppercase();
    for (suffix, factor) in UNITS {
        if let Some(number) = upper.strip_suffix(suffix) {
            let value: f64 = number
                .trim()
                .parse()
                .map_err(|_| format!("invalid size `{text}`"))?;
            if !value.is_finite() || value < 0.0 {
                return Err(format!("invalid size `{text}`"));
            }
            return Ok((value * factor as f64).round() as u64);
        }
    }
    Err(format!(
        "invalid size `{text}`: expected a number followed by Byte, KB, MB or GB"
    ))
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::checks::testing::config;
    use crate::map::MapData;

    fn rule(params: serde_json::Value) -> Result<Box<dyn Rule>, RuleConfigError> {
        FileSize::build(&config("rules.file", "FileSize", params))
    }

    fn evaluate(rule: &dyn Rule, path: &Path) -> Result<Vec<Violation>, EvaluationError> {
        let map = MapData::default();
        rule.evaluate(&RuleContext::new(path, &map))
    }

    #[test]
    fn parses_units() {
        assert_eq!(parse_size("100Byte").unwrap(), 100);
        assert_eq!(parse_size("2kb").unwrap(), 2048);
        assert_eq!(parse_size("1.5 MB").unwrap(), 1_572_864);
        assert_eq!(parse_size("1GB").unwrap(), 1 << 30);
        assert!(parse_size("12").is_err());
        assert!(parse_size("-1MB").is_err());
        assert!(parse_size("lotsKB").is_err());
    }

    #[test]
    fn needs_at_least_one_limit() {
        assert!(matches!(
            rule(json!({})).unwrap_err(),
            RuleConfigError::InvalidParams { .. }
        ));
        assert!(rule(json!({"max_file_size": "ten"})).is_err());
        assert!(rule(json!({"max_file_size": "1KB", "min_file_size": "2KB"})).is_err());
    }

    #[test]
    fn flags_oversized_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("big.map");
        std::fs::write(&path, vec![0u8; 2048]).unwrap();

        let rule = rule(json!({"max_file_size": "1KB"})).unwrap();
        assert_eq!(rule.explain(), "Map file is not more than 1KB");

        let violations = evaluate(rule.as_ref(), &path).unwrap();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].evidence, vec![json!(2048), json!(">"), json!(1024)]);
    }

    #[test]
    fn flags_undersized_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.map");
        std::fs::write(&path, b"abc").unwrap();

        let rule = rule(json!({"min_file_size": "10Byte", "max_file_size": "1MB"})).unwrap();
        let violations = evaluate(rule.as_ref(), &path).unwrap();
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("below the allowed minimum of 10Byte"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let rule = rule(json!({"max_file_size": "1KB"})).unwrap();
        let err = evaluate(rule.as_ref(), Path::new("/no/such/file.map")).unwrap_err();
        assert!(matches!(err, EvaluationError::Io { .. }));
    }
}
