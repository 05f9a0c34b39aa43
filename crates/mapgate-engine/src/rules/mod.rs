//! Rule contract, declarative rule records and the by-name registry.

pub mod contract;
pub mod params;
pub mod registry;
pub mod types;

pub use contract::{Rule, RuleContext, RuleInstance};
pub use registry::{ConfigureError, RuleFactory, RuleRegistry};
pub use types::*;
