//! Map info metadata checks.

use mapgate_core::errors::{EvaluationError, RuleConfigError};
use serde::Deserialize;

use super::matcher::{MatcherParams, ValueMatcher};
use crate::map::InfoField;
use crate::rules::{params, Rule, RuleConfig, RuleContext, Violation};

#[derive(Debug, Deserialize)]
struct MetaParams {
    field: InfoField,
    #[serde(flatten)]
    matcher: MatcherParams,
}

/// An info field (author, version, credits, license) must match a pattern
/// or only list allowed values. An unset field is checked as empty.
#[derive(Debug)]
pub struct MetaValid {
    field: InfoField,
    matcher: ValueMatcher,
}

impl MetaValid {
    pub fn build(config: &RuleConfig) -> Result<Box<dyn Rule>, RuleConfigError> {
        let p: MetaParams = params::decode(config)?;
        let matcher = ValueMatcher::from_params(&p.matcher).map_err(|e| params::invalid(config, e))?;
        Ok(Box::new(Self {
            field: p.field,
            matcher,
        }))
    }
}

impl Rule for MetaValid {
    fn explain(&self) -> String {
        format!(
            "Map info \"{}\" must {}",
            self.field.as_str(),
            self.matcher.describe()
        )
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Result<Vec<Violation>, EvaluationError> {
        let value = ctx.map()?.info().field(self.field).unwrap_or_default();
        Ok(self.matcher.check(self.field.as_str(), value))
    }
}
