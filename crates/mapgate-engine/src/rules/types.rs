//! Declarative rule records and violations.

use std::fmt;
use std::str::FromStr;

use mapgate_core::errors::RuleConfigError;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Failure policy of a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleType {
    /// A failure halts the run.
    Require,
    /// A failure is a warning; the run continues.
    Fail,
    /// A failure is recorded as skipped; the run continues.
    Skip,
}

impl RuleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Require => "require",
            Self::Fail => "fail",
            Self::Skip => "skip",
        }
    }

    pub fn all() -> &'static [RuleType] {
        &[Self::Require, Self::Fail, Self::Skip]
    }
}

impl fmt::Display for RuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "require" => Ok(Self::Require),
            "fail" => Ok(Self::Fail),
            "skip" => Ok(Self::Skip),
            other => Err(other.to_string()),
        }
    }
}

/// One configured rule instance. Immutable once decoded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleConfig {
    pub name: String,
    pub module: String,
    pub class_name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub rule_type: RuleType,
    pub depends_on: Vec<String>,
    pub params: Option<Value>,
}

/// Wire shape of a rule record before validation.
#[derive(Deserialize)]
struct RawRuleConfig {
    name: String,
    module: String,
    class_name: String,
    description: String,
    #[serde(rename = "type")]
    rule_type: String,
    depends_on: Vec<String>,
    #[serde(default)]
    params: Option<Value>,
}

impl RuleConfig {
    /// Decode a single record. Unknown extra keys are ignored.
    pub fn from_value(value: &Value) -> Result<Self, RuleConfigError> {
        let raw: RawRuleConfig =
            serde_json::from_value(value.clone()).map_err(|e| RuleConfigError::Malformed {
                rule: value.get("name").and_then(Value::as_str).map(str::to_string),
                message: e.to_string(),
            })?;

        let rule_type = raw
            .rule_type
            .parse::<RuleType>()
            .map_err(|value| RuleConfigError::UnknownType {
                rule: raw.name.clone(),
                value,
            })?;

        let params = match raw.params {
            None | Some(Value::Null) => None,
            Some(obj @ Value::Object(_)) => Some(obj),
            Some(other) => {
                return Err(RuleConfigError::Malformed {
                    rule: Some(raw.name),
                    message: format!("params must be a mapping or null, got {other}"),
                })
            }
        };

        Ok(Self {
            name: raw.name,
            module: raw.module,
            class_name: raw.class_name,
            description: raw.description,
            rule_type,
            depends_on: raw.depends_on,
            params,
        })
    }

    pub fn is_required(&self) -> bool {
        self.rule_type == RuleType::Require
    }
}

/// Decodes a run's records in order, enforcing name uniqueness.
#[derive(Debug, Default)]
pub struct RuleConfigDecoder {
    seen: FxHashSet<String>,
}

impl RuleConfigDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn decode(&mut self, value: &Value) -> Result<RuleConfig, RuleConfigError> {
        let config = RuleConfig::from_value(value)?;
        if !self.seen.insert(config.name.clone()) {
            return Err(RuleConfigError::DuplicateName { rule: config.name });
        }
        Ok(config)
    }
}

/// One concrete finding of a rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    pub message: String,
    /// Supporting values, e.g. `[actual_size, ">", allowed_size]`.
    #[serde(default)]
    pub evidence: Vec<Value>,
}

impl Violation {
    pub fn new(message: impl Into<String>, evidence: Vec<Value>) -> Self {
        Self {
            message: message.into(),
            evidence,
        }
    }

    pub fn message(message: impl Into<String>) -> Self {
        Self::new(message, Vec::new())
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;
        if !self.evidence.is_empty() {
            let parts: Vec<String> = self
                .evidence
                .iter()
                .map(|v| match v {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect();
            write!(f, " ({})", parts.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record() -> Value {
        json!({
            "name": "size",
            "module": "rules.file",
            "class_name": "FileSize",
            "description": "Map file size",
            "type": "require",
            "depends_on": [],
            "params": {"max_file_size": "2MB"},
        })
    }

    #[test]
    fn decodes_full_record() {
        let config = RuleConfig::from_value(&record()).unwrap();
        assert_eq!(config.name, "size");
        assert_eq!(config.rule_type, RuleType::Require);
        assert!(config.is_required());
        assert_eq!(config.params, Some(json!({"max_file_size": "2MB"})));
    }

    #[test]
    fn null_and_absent_params_are_none() {
        let mut value = record();
        value["params"] = Value::Null;
        assert_eq!(RuleConfig::from_value(&value).unwrap().params, None);

        value.as_object_mut().unwrap().remove("params");
        assert_eq!(RuleConfig::from_value(&value).unwrap().params, None);
    }

    #[test]
    fn unknown_type_is_rejected() {
        let mut value = record();
        value["type"] = json!("maybe");
        let err = RuleConfig::from_value(&value).unwrap_err();
        assert_eq!(
            err,
            RuleConfigError::UnknownType {
                rule: "size".into(),
                value: "maybe".into()
            }
        );
    }

    #[test]
    fn missing_depends_on_is_malformed() {
        let mut value = record();
        value.as_object_mut().unwrap().remove("depends_on");
        let err = RuleConfig::from_value(&value).unwrap_err();
        assert!(matches!(err, RuleConfigError::Malformed { rule: Some(ref r), .. } if r == "size"));
    }

    #[test]
    fn list_params_are_malformed() {
        let mut value = record();
        value["params"] = json!([1, 2]);
        assert!(RuleConfig::from_value(&value).is_err());
    }

    #[test]
    fn decoder_rejects_duplicates() {
        let mut decoder = RuleConfigDecoder::new();
        decoder.decode(&record()).unwrap();
        let err = decoder.decode(&record()).unwrap_err();
        assert_eq!(err, RuleConfigError::DuplicateName { rule: "size".into() });
    }

    #[test]
    fn violation_display_joins_evidence() {
        let v = Violation::new("too big", vec![json!(3000), json!(">"), json!(2048)]);
        assert_eq!(v.to_string(), "too big (3000 > 2048)");
        assert_eq!(Violation::message("plain").to_string(), "plain");
    }
}
