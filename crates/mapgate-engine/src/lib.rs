//! Rule execution engine for map validation.
//!
//! A run walks an ordered list of rule records once: each record is decoded,
//! checked for dependency eligibility, resolved in the [`rules::RuleRegistry`],
//! evaluated against a read-only [`map::MapSource`], and classified by its
//! failure policy. The resulting [`engine::RunReport`] carries the verdict and
//! renders through [`reporters`].

pub mod checks;
pub mod engine;
pub mod map;
pub mod reporters;
pub mod rules;
pub mod ruleset;

pub use engine::{RuleEngine, RuleResult, RuleStatus, RunReport};
pub use map::{MapData, MapSource};
pub use rules::{Rule, RuleConfig, RuleContext, RuleRegistry, RuleType, Violation};
