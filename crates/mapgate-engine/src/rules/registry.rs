//! Static registry resolving a rule's `module` + `class_name` to a factory.

use std::sync::Arc;

use mapgate_core::errors::{LoadError, RuleConfigError};
use rustc_hash::FxHashMap;

use super::contract::{Rule, RuleContext, RuleInstance};
use super::types::RuleConfig;

/// Builds a rule from its configuration, decoding and validating params.
pub type RuleFactory =
    Arc<dyn Fn(&RuleConfig) -> Result<Box<dyn Rule>, RuleConfigError> + Send + Sync>;

/// Why a rule could not be configured. The two cases get different
/// treatment from the coordinator.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigureError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Config(#[from] RuleConfigError),
}

#[derive(Default, Clone)]
pub struct RuleRegistry {
    modules: FxHashMap<String, FxHashMap<String, RuleFactory>>,
}

impl RuleRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every built-in check.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        crate::checks::register_builtin(&mut registry);
        registry
    }

    /// Registers `factory` under `module` / `class_name`, replacing any
    /// previous entry.
    pub fn register<F>(&mut self, module: &str, class_name: &str, factory: F)
    where
        F: Fn(&RuleConfig) -> Result<Box<dyn Rule>, RuleConfigError> + Send + Sync + 'static,
    {
        self.modules
            .entry(module.to_string())
            .or_default()
            .insert(class_name.to_string(), Arc::new(factory));
    }

    pub fn resolve(&self, module: &str, class_name: &str) -> Result<&RuleFactory, LoadError> {
        let classes = self.modules.get(module).ok_or_else(|| LoadError::UnknownModule {
            module: module.to_string(),
        })?;
        classes.get(class_name).ok_or_else(|| LoadError::UnknownClass {
            module: module.to_string(),
            class_name: class_name.to_string(),
        })
    }

    pub fn contains(&self, module: &str, class_name: &str) -> bool {
        self.resolve(module, class_name).is_ok()
    }

    /// `(module, class_name)` pairs, sorted.
    pub fn entries(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self
            .modules
            .iter()
            .flat_map(|(module, classes)| {
                classes.keys().map(move |class| (module.as_str(), class.as_str()))
            })
            .collect();
        entries.sort_unstable();
        entries
    }

    /// Build `config`'s rule and bind it to `ctx`.
    pub fn configure<'a>(
        &self,
        config: &RuleConfig,
        ctx: RuleContext<'a>,
    ) -> Result<RuleInstance<'a>, ConfigureError> {
        let factory = self.resolve(&config.module, &config.class_name)?;
        let rule = factory(config)?;
        Ok(RuleInstance::new(rule, ctx))
    }
}

impl std::fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("entries", &self.entries())
            .finish()
    }
}
