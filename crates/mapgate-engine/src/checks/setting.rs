//! Server setting commands stored in the map.

use mapgate_core::errors::{EvaluationError, RuleConfigError};
use serde::Deserialize;
use serde_json::json;

use super::matcher::{MatcherParams, ValueMatcher};
use crate::rules::{params, Rule, RuleConfig, RuleContext, Violation};

#[derive(Debug, Deserialize)]
struct SettingParams {
    field: String,
    #[serde(flatten)]
    matcher: MatcherParams,
    #[serde(default)]
    required: bool,
}

/// The setting named `field` must match. Its absence is only a violation
/// when `required` is set.
#[derive(Debug)]
pub struct SettingValid {
    field: String,
    matcher: ValueMatcher,
    required: bool,
}

impl SettingValid {
    pub fn build(config: &RuleConfig) -> Result<Box<dyn Rule>, RuleConfigError> {
        let p: SettingParams = params::decode(config)?;
        if p.field.trim().is_empty() {
            return Err(params::invalid(config, "`field` must not be empty"));
        }
        let matcher = ValueMatcher::from_params(&p.matcher).map_err(|e| params::invalid(config, e))?;
        Ok(Box::new(Self {
            field: p.field,
            matcher,
            required: p.required,
        }))
    }
}

impl Rule for SettingValid {
    fn explain(&self) -> String {
        let presence = if self.required { "is set and" } else { "if set," };
        format!("Setting \"{}\" {presence} must {}", self.field, self.matcher.describe())
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Result<Vec<Violation>, EvaluationError> {
        match ctx.map()?.info().setting(&self.field) {
            Some(value) => Ok(self.matcher.check(&self.field, value)),
            None if self.required => Ok(vec![Violation::new(
                format!("Setting \"{}\" does not exist, but is required", self.field),
                vec![json!(self.field), json!("in"), json!("settings")],
            )]),
            None => Ok(Vec::new()),
        }
    }
}
