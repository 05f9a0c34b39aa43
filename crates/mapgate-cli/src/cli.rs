use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use mapgate_core::config::CliOverrides;

#[derive(Parser, Debug)]
#[command(name = "mapgate", version, about = "Validate map files against a rule set")]
pub struct Cli {
    #[arg(
        long,
        global = true,
        default_value = ".",
        help = "Project root holding mapgate.toml; a relative rules dir resolves against it"
    )]
    pub root: PathBuf,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run every rule against a map and print the report
    Check(CheckArgs),
    /// Print the configured rules and their explanations as JSON
    Catalog(CatalogArgs),
}

#[derive(Args, Debug)]
pub struct RuleSelection {
    #[arg(long, help = "Directory of *.yaml rule files")]
    pub rules_dir: Option<String>,
    #[arg(
        long,
        value_delimiter = ',',
        help = "Skip rule files whose name starts with one of these prefixes"
    )]
    pub skip: Vec<String>,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    #[arg(long, env = "INPUT_MAP", help = "Raw map file")]
    pub map: PathBuf,
    #[arg(long, help = "Decoded map dump [default: <map>.json]")]
    pub decoded: Option<PathBuf>,
    #[command(flatten)]
    pub selection: RuleSelection,
    #[arg(long, help = "Wrap the report for CI step summaries")]
    pub ci: bool,
    #[arg(long, help = "Report format: markdown or json")]
    pub format: Option<String>,
}

#[derive(Args, Debug)]
pub struct CatalogArgs {
    #[command(flatten)]
    pub selection: RuleSelection,
}

impl RuleSelection {
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            rules_dir: self.rules_dir.clone(),
            rules_exclude: (!self.skip.is_empty()).then(|| self.skip.clone()),
            ..Default::default()
        }
    }
}

impl CheckArgs {
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            report_format: self.format.clone(),
            report_ci: self.ci.then_some(true),
            ..self.selection.overrides()
        }
    }

    pub fn decoded_path(&self) -> PathBuf {
        self.decoded
            .clone()
            .unwrap_or_else(|| self.map.with_extension("json"))
    }
}
