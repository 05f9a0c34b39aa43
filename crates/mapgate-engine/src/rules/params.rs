//! Typed parameter decoding shared by all rule factories.

use mapgate_core::errors::RuleConfigError;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::types::RuleConfig;

/// Decode `config.params` into `P`. Absent params decode from an empty
/// mapping, so rules whose fields all have defaults accept them.
pub fn decode<P: DeserializeOwned>(config: &RuleConfig) -> Result<P, RuleConfigError> {
    let value = config
        .params
        .clone()
        .unwrap_or_else(|| Value::Object(Default::default()));
    serde_json::from_value(value).map_err(|e| invalid(config, e))
}

pub fn invalid(config: &RuleConfig, message: impl ToString) -> RuleConfigError {
    RuleConfigError::InvalidParams {
        rule: config.name.clone(),
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RuleType;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Limits {
        max: u32,
        #[serde(default)]
        label: Option<String>,
    }

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Optional {
        dir: Option<String>,
    }

    fn config(params: Option<Value>) -> RuleConfig {
        RuleConfig {
            name: "limits".into(),
            module: "m".into(),
            class_name: "C".into(),
            description: String::new(),
            rule_type: RuleType::Fail,
            depends_on: vec![],
            params,
        }
    }

    #[test]
    fn decodes_typed_params() {
        let limits: Limits = decode(&config(Some(json!({"max": 4})))).unwrap();
        assert_eq!(limits.max, 4);
        assert!(limits.label.is_none());
    }

    #[test]
    fn wrong_shape_is_invalid_params() {
        let err = decode::<Limits>(&config(Some(json!({"max": "four"})))).unwrap_err();
        assert!(matches!(err, RuleConfigError::InvalidParams { ref rule, .. } if rule == "limits"));
    }

    #[test]
    fn absent_params_need_defaults() {
        assert!(decode::<Limits>(&config(None)).is_err());
        let optional: Optional = decode(&config(None)).unwrap();
        assert!(optional.dir.is_none());
    }
}
