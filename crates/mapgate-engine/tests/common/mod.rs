//! Shared test doubles: rules with scripted outcomes and a registry that
//! counts instantiations.

#![allow(dead_code)]

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use mapgate_core::errors::EvaluationError;
use mapgate_engine::map::MapData;
use mapgate_engine::rules::{Rule, RuleContext, RuleRegistry, Violation};
use serde_json::{json, Value};

pub const MODULE: &str = "tests.rules";

pub struct Pass;

impl Rule for Pass {
    fn explain(&self) -> String {
        "Always passes".into()
    }

    fn evaluate(&self, _ctx: &RuleContext<'_>) -> Result<Vec<Violation>, EvaluationError> {
        Ok(vec![])
    }
}

pub struct Violate;

impl Rule for Violate {
    fn explain(&self) -> String {
        "Always violates".into()
    }

    fn evaluate(&self, _ctx: &RuleContext<'_>) -> Result<Vec<Violation>, EvaluationError> {
        Ok(vec![Violation::new(
            "map is wrong",
            vec![json!(1), json!(">"), json!(0)],
        )])
    }
}

pub struct Broken;

impl Rule for Broken {
    fn explain(&self) -> String {
        "Always errors".into()
    }

    fn evaluate(&self, _ctx: &RuleContext<'_>) -> Result<Vec<Violation>, EvaluationError> {
        Err(EvaluationError::CheckFailed("resource missing".into()))
    }
}

pub struct Panics;

impl Rule for Panics {
    fn explain(&self) -> String {
        "Always panics".into()
    }

    fn evaluate(&self, _ctx: &RuleContext<'_>) -> Result<Vec<Violation>, EvaluationError> {
        panic!("boom")
    }
}

/// Reads the map's author, proving evaluation sees the bound map.
pub struct NeedsAuthor;

impl Rule for NeedsAuthor {
    fn explain(&self) -> String {
        "Author is set".into()
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Result<Vec<Violation>, EvaluationError> {
        match ctx.map()?.info().author {
            Some(_) => Ok(vec![]),
            None => Ok(vec![Violation::message("no author")]),
        }
    }
}

/// Registry over the doubles plus a per-class instantiation counter.
pub struct TestRegistry {
    pub registry: RuleRegistry,
    pub built: Arc<AtomicUsize>,
}

impl TestRegistry {
    pub fn built(&self) -> usize {
        self.built.load(Ordering::SeqCst)
    }
}

pub fn registry() -> TestRegistry {
    let built = Arc::new(AtomicUsize::new(0));
    let mut registry = RuleRegistry::new();

    macro_rules! counted {
        ($class:literal, $rule:expr) => {{
            let built = Arc::clone(&built);
            registry.register(MODULE, $class, move |_| {
                built.fetch_add(1, Ordering::SeqCst);
                Ok(Box::new($rule))
            });
        }};
    }

    counted!("Pass", Pass);
    counted!("Violate", Violate);
    counted!("Broken", Broken);
    counted!("Panics", Panics);
    counted!("NeedsAuthor", NeedsAuthor);

    TestRegistry { registry, built }
}

pub fn record(name: &str, class_name: &str, rule_type: &str, depends_on: &[&str]) -> Value {
    json!({
        "name": name,
        "module": MODULE,
        "class_name": class_name,
        "description": format!("{name} description"),
        "type": rule_type,
        "depends_on": depends_on,
    })
}

pub fn empty_map() -> MapData {
    MapData::default()
}

pub fn raw_file() -> &'static Path {
    Path::new("fixture.map")
}
