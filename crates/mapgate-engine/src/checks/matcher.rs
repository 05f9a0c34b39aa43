//! Value matching shared by the info and setting checks.

use regex::Regex;
use serde::Deserialize;
use serde_json::json;

use crate::rules::Violation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    List,
    Regex,
}

/// Params fragment flattened into the info and setting params.
#[derive(Debug, Clone, Deserialize)]
pub struct MatcherParams {
    #[serde(rename = "type")]
    pub kind: MatchKind,
    #[serde(default)]
    pub regex: Option<String>,
    #[serde(default)]
    pub values: Vec<String>,
}

#[derive(Debug, Clone)]
pub enum ValueMatcher {
    /// Every comma-separated item must be one of the values.
    List(Vec<String>),
    /// The value must match at its start.
    Regex { pattern: String, regex: Regex },
}

impl ValueMatcher {
    pub fn from_params(params: &MatcherParams) -> Result<Self, String> {
        match params.kind {
            MatchKind::List => Ok(Self::List(params.values.clone())),
            MatchKind::Regex => {
                let pattern = params
                    .regex
                    .clone()
                    .ok_or_else(|| "`regex` is required when type is regex".to_string())?;
                let regex = Regex::new(&format!("^(?:{pattern})"))
                    .map_err(|e| format!("invalid regex `{pattern}`: {e}"))?;
                Ok(Self::Regex { pattern, regex })
            }
        }
    }

    pub fn check(&self, field: &str, value: &str) -> Vec<Violation> {
        match self {
            Self::List(allowed) => value
                .split(',')
                .map(str::trim)
                .filter(|item| !allowed.iter().any(|a| a == item))
                .map(|item| {
                    Violation::new(
                        format!(
                            "\"{item}\" in \"{field}\" is not explicitly set. Allowed values: \"{}\".",
                            allowed.join(", ")
                        ),
                        vec![json!(item), json!("in"), json!(allowed)],
                    )
                })
                .collect(),
            Self::Regex { pattern, regex } => {
                if regex.is_match(value) {
                    Vec::new()
                } else {
                    vec![Violation::new(
                        format!("\"{value}\" does not match \"{pattern}\"."),
                        vec![json!(value), json!("!="), json!(pattern)],
                    )]
                }
            }
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Self::List(allowed) => format!("only contain {}", allowed.join(", ")),
            Self::Regex { pattern, .. } => format!("match \"{pattern}\""),
        }
    }
}
