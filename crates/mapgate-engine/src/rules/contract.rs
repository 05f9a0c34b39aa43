//! The surface every rule implementation provides.

use std::fmt;
use std::path::Path;

use mapgate_core::errors::EvaluationError;

use super::types::Violation;
use crate::map::MapSource;

/// Read-only inputs a rule is bound to for one run. Both are absent when
/// rules are instantiated for catalog introspection.
#[derive(Clone, Copy, Default)]
pub struct RuleContext<'a> {
    pub raw_file: Option<&'a Path>,
    pub map: Option<&'a dyn MapSource>,
}

impl<'a> RuleContext<'a> {
    pub fn new(raw_file: &'a Path, map: &'a dyn MapSource) -> Self {
        Self {
            raw_file: Some(raw_file),
            map: Some(map),
        }
    }

    /// Context without map or raw file.
    pub fn detached() -> Self {
        Self::default()
    }

    pub fn map(&self) -> Result<&'a dyn MapSource, EvaluationError> {
        self.map.ok_or(EvaluationError::MissingMap)
    }

    pub fn raw_file(&self) -> Result<&'a Path, EvaluationError> {
        self.raw_file.ok_or(EvaluationError::MissingRawFile)
    }
}

/// A configured rule. Parameters are decoded when the rule is built by its
/// registry factory; a built rule only explains and evaluates.
pub trait Rule: Send + Sync {
    /// Static, outcome-independent description of the check. Must not need
    /// the map.
    fn explain(&self) -> String;

    /// Runs the check. An empty vector means the map passed. `Err` is for
    /// failures of the check itself, not for findings.
    fn evaluate(&self, ctx: &RuleContext<'_>) -> Result<Vec<Violation>, EvaluationError>;
}

impl fmt::Debug for dyn Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("explain", &self.explain())
            .finish()
    }
}

/// A rule bound to the raw file and map of one run.
pub struct RuleInstance<'a> {
    rule: Box<dyn Rule>,
    ctx: RuleContext<'a>,
}

impl<'a> RuleInstance<'a> {
    pub fn new(rule: Box<dyn Rule>, ctx: RuleContext<'a>) -> Self {
        Self { rule, ctx }
    }

    pub fn explain(&self) -> String {
        self.rule.explain()
    }

    pub fn evaluate(&self) -> Result<Vec<Violation>, EvaluationError> {
        self.rule.evaluate(&self.ctx)
    }
}
