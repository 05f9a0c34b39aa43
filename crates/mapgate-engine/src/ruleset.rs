//! Rule-file loading: every `*.yaml` in a directory, merged in filename order.
//!
//! Each file holds a top-level `rules:` list. Records are passed through
//! as raw values; the engine decodes and validates them during a run.

use std::path::{Path, PathBuf};

use mapgate_core::errors::RulesetError;
use serde_json::Value;

/// Load and concatenate the rule lists of all `*.yaml` files in `dir`,
/// sorted by filename. Files whose name starts with one of `exclude` are
/// skipped.
pub fn load_rule_dir(dir: &Path, exclude: &[String]) -> Result<Vec<Value>, RulesetError> {
    let mut records = Vec::new();
    for path in rule_files(dir, exclude)? {
        records.extend(load_rule_file(&path)?);
    }
    Ok(records)
}

/// Rule files that will be merged, in merge order.
pub fn rule_files(dir: &Path, exclude: &[String]) -> Result<Vec<PathBuf>, RulesetError> {
    if !dir.is_dir() {
        return Err(RulesetError::DirectoryNotFound {
            path: dir.display().to_string(),
        });
    }

    let pattern = dir.join("*.yaml").to_string_lossy().into_owned();
    let entries = glob::glob(&pattern).map_err(|e| RulesetError::Pattern {
        pattern: pattern.clone(),
        message: e.to_string(),
    })?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .filter(|path| path.is_file())
        .filter(|path| {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let excluded = exclude.iter().any(|prefix| name.starts_with(prefix.as_str()));
            if excluded {
                tracing::debug!(file = %name, "rule file excluded");
            }
            !excluded
        })
        .collect();
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

pub fn load_rule_file(path: &Path) -> Result<Vec<Value>, RulesetError> {
    let content = std::fs::read_to_string(path).map_err(|source| RulesetError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_rule_file(&path.display().to_string(), &content)
}

/// Parse one rule file's text. `path` is only used in errors.
pub fn parse_rule_file(path: &str, content: &str) -> Result<Vec<Value>, RulesetError> {
    let document: Value = serde_yaml::from_str(content).map_err(|e| RulesetError::Parse {
        path: path.to_string(),
        message: e.to_string(),
    })?;

    match document.get("rules") {
        Some(Value::Array(rules)) => {
            tracing::debug!(file = path, count = rules.len(), "loaded rule file");
            Ok(rules.clone())
        }
        _ => Err(RulesetError::MissingRules {
            path: path.to_string(),
        }),
    }
}
