//! Run-scoped, insertion-ordered map of rule name to result.

use rustc_hash::FxHashMap;

use super::status::{RuleResult, RuleStatus};

/// Owned and written only by the coordinator; everything else reads.
#[derive(Debug, Default)]
pub struct RunResults {
    results: Vec<RuleResult>,
    index: FxHashMap<String, usize>,
}

impl RunResults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Names are unique per run; the decoder drops duplicates before this.
    pub(crate) fn record(&mut self, result: RuleResult) {
        self.index.insert(result.rule.name.clone(), self.results.len());
        self.results.push(result);
    }

    pub fn get(&self, name: &str) -> Option<&RuleResult> {
        self.index.get(name).map(|&i| &self.results[i])
    }

    pub fn status_of(&self, name: &str) -> Option<RuleStatus> {
        self.get(name).map(|r| r.status)
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RuleResult> {
        self.results.iter()
    }

    pub fn into_vec(self) -> Vec<RuleResult> {
        self.results
    }
}
