//! Configuration system for mapgate.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod mapgate_config;
pub mod report_config;
pub mod rules_config;

pub use mapgate_config::{CliOverrides, MapgateConfig};
pub use report_config::ReportConfig;
pub use rules_config::RulesConfig;
