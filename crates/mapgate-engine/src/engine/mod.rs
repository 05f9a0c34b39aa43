//! Rule execution: dependency resolution, failure policy, and the per-run
//! status model.

pub mod catalog;
pub mod coordinator;
pub mod policy;
pub mod resolver;
pub mod results;
pub mod status;

pub use catalog::{collect_catalog, CatalogEntry};
pub use coordinator::RuleEngine;
pub use policy::PolicyDecision;
pub use resolver::{DependencyResolver, Eligibility};
pub use results::RunResults;
pub use status::{RuleOutcome, RuleResult, RuleStatus, RunReport};
