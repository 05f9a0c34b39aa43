//! Embedded sound checks.

use std::path::PathBuf;

use mapgate_core::errors::{EvaluationError, RuleConfigError};
use serde::Deserialize;
use serde_json::json;

use super::mapres;
use crate::rules::{params, Rule, RuleConfig, RuleContext, Violation};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SoundParams {
    approved_dir: Option<PathBuf>,
}

/// Every sound carries data; with `approved_dir` set, its
/// `<name>-<sha512>` stem must also be listed there.
#[derive(Debug)]
pub struct SoundValid {
    approved_dir: Option<PathBuf>,
}

impl SoundValid {
    pub fn build(config: &RuleConfig) -> Result<Box<dyn Rule>, RuleConfigError> {
        let p: SoundParams = params::decode(config)?;
        Ok(Box::new(Self {
            approved_dir: p.approved_dir,
        }))
    }
}

impl Rule for SoundValid {
    fn explain(&self) -> String {
        match self.approved_dir {
            Some(_) => "Sounds carry data and are approved custom sounds".to_string(),
            None => "Sounds carry data".to_string(),
        }
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Result<Vec<Violation>, EvaluationError> {
        let sounds = ctx.map()?.sounds();
        let approved = match &self.approved_dir {
            Some(dir) if !sounds.is_empty() => Some(mapres::resource_stems(dir)?),
            _ => None,
        };

        let mut violations = Vec::new();
        for sound in sounds {
            if sound.data.is_empty() {
                violations.push(Violation::new(
                    format!("{} is embedded but has no data.", sound.name),
                    vec![json!(sound.name), json!("has"), json!("no data")],
                ));
                continue;
            }
            if let Some(approved) = &approved {
                let stem = mapres::approved_stem(&sound.name, &sound.data);
                if !approved.contains(&stem) {
                    violations.push(Violation::new(
                        format!("{stem}.opus is not an approved custom sound. Ask mappers to approve it first"),
                        vec![json!(sound.name), json!("not in"), json!("approved sounds")],
                    ));
                }
            }
        }
        Ok(violations)
    }
}
