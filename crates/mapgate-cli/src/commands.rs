use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use mapgate_core::config::MapgateConfig;
use mapgate_core::errors::{MapError, RunError};
use mapgate_engine::engine::collect_catalog;
use mapgate_engine::reporters::create_reporter;
use mapgate_engine::ruleset::load_rule_dir;
use mapgate_engine::{MapData, RuleEngine, RuleRegistry};
use serde_json::Value;

use crate::cli::{CatalogArgs, CheckArgs};

/// Run all rules against the map. Returns the verdict.
pub fn check(root: &Path, args: &CheckArgs) -> Result<bool> {
    let config = MapgateConfig::load(root, Some(&args.overrides())).map_err(RunError::from)?;
    let records = load_records(root, &config)?;

    if !args.map.is_file() {
        return Err(RunError::from(MapError::NotFound {
            path: args.map.display().to_string(),
        })
        .into());
    }
    let map = MapData::from_json_file(&args.decoded_path()).map_err(RunError::from)?;

    let format = config.report.effective_format();
    let reporter =
        create_reporter(format).ok_or_else(|| anyhow!("unknown report format: {format}"))?;

    tracing::info!(map = %args.map.display(), rules = records.len(), "checking map");
    let report = RuleEngine::with_builtin().run(&records, &args.map, &map);
    let rendered = reporter.generate(&report).map_err(|e| anyhow!(e))?;
    let verdict = report.verdict();

    if format != "markdown" {
        println!("{rendered}");
        return Ok(verdict);
    }

    if config.report.effective_ci() {
        println!("## Output for map `{}`", file_name(&args.map));
        println!("### Rules");
    }
    println!("{rendered}");
    if verdict {
        println!("✅ Workflow completed successfully.");
    } else {
        println!("❌ Workflow failed due to required rule failure.");
    }
    Ok(verdict)
}

/// Print the catalog of configured rules as JSON.
pub fn catalog(root: &Path, args: &CatalogArgs) -> Result<()> {
    let overrides = args.selection.overrides();
    let config = MapgateConfig::load(root, Some(&overrides)).map_err(RunError::from)?;
    let records = load_records(root, &config)?;

    let entries = collect_catalog(&records, &RuleRegistry::with_builtin());
    println!("{}", serde_json::to_string_pretty(&entries)?);
    Ok(())
}

fn load_records(root: &Path, config: &MapgateConfig) -> Result<Vec<Value>> {
    let dir = rules_dir(root, config.rules.effective_dir());
    tracing::debug!(dir = %dir.display(), exclude = ?config.rules.exclude, "loading rule files");
    let records = load_rule_dir(&dir, &config.rules.exclude).map_err(RunError::from)?;
    Ok(records)
}

fn rules_dir(root: &Path, dir: &str) -> PathBuf {
    let dir = Path::new(dir);
    if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        root.join(dir)
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
