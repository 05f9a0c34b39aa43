//! Rule catalog introspection for documentation and UI generation.
//!
//! Rules are built from their params alone; no map or raw file is bound, so
//! only `explain` is called.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::rules::{RuleConfigDecoder, RuleContext, RuleRegistry};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub description: String,
    pub explanation: String,
    pub required: bool,
}

/// One entry per record that decodes, resolves and configures, in
/// declared order. Everything else is logged and left out.
pub fn collect_catalog(records: &[Value], registry: &RuleRegistry) -> Vec<CatalogEntry> {
    let mut decoder = RuleConfigDecoder::new();
    let mut entries = Vec::new();

    for record in records {
        let config = match decoder.decode(record) {
            Ok(config) => config,
            Err(err) => {
                tracing::error!(error = %err, "skipping malformed rule entry");
                continue;
            }
        };

        let instance = match registry.configure(&config, RuleContext::detached()) {
            Ok(instance) => instance,
            Err(err) => {
                tracing::warn!(rule = %config.name, error = %err, "skipping rule without a usable implementation");
                continue;
            }
        };

        entries.push(CatalogEntry {
            explanation: instance.explain(),
            required: config.is_required(),
            name: config.name,
            description: config.description,
        });
    }

    entries
}
