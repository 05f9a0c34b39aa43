//! Built-in checks end to end over the sample ruleset in `test-fixtures/`.

use std::path::{Path, PathBuf};

use mapgate_engine::reporters::create_reporter;
use mapgate_engine::ruleset::load_rule_dir;
use mapgate_engine::{MapData, RuleEngine, RuleStatus, RunReport};
use serde_json::{json, Value};

fn fixtures() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../test-fixtures")
}

/// Sample rules with resource directories made absolute, so the test does
/// not depend on the working directory.
fn sample_rules() -> Vec<Value> {
    let root = fixtures();
    let mut records = load_rule_dir(&root.join("map_rules"), &[]).unwrap();
    for record in &mut records {
        if record["module"] == "rules.image" {
            record["params"] = json!({
                "mapres_dir": root.join("mapres"),
                "custom_mapres_dir": root.join("custom_mapres"),
            });
        }
    }
    records
}

fn check(map: &str) -> RunReport {
    let root = fixtures();
    let data = MapData::from_json_file(&root.join("maps").join(map)).unwrap();
    RuleEngine::with_builtin().run(&sample_rules(), &root.join("maps/race.map"), &data)
}

#[test]
fn sample_ruleset_loads_every_file() {
    let names: Vec<String> = sample_rules()
        .iter()
        .map(|r| r["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(
        names,
        vec![
            "file_size", "author", "license", "deepfly", "spawn", "start", "finish", "images",
            "sounds"
        ]
    );
}

#[test]
fn clean_map_passes_every_rule() {
    let report = check("race.json");
    for result in &report.results {
        assert_eq!(
            result.status,
            RuleStatus::Completed,
            "{} should pass: {:?} {:?}",
            result.name(),
            result.violations,
            result.error
        );
    }
    assert_eq!(report.results.len(), 9);
    assert!(report.verdict());
}

#[test]
fn broken_map_halts_on_misplaced_spawn() {
    let report = check("broken.json");

    assert_eq!(
        report.names(),
        vec!["file_size", "author", "license", "deepfly", "spawn"]
    );
    assert_eq!(report.get("author").unwrap().status, RuleStatus::Warn);
    assert_eq!(report.get("license").unwrap().status, RuleStatus::Warn);
    assert_eq!(report.get("deepfly").unwrap().status, RuleStatus::Warn);

    let spawn = report.get("spawn").unwrap();
    assert_eq!(spawn.status, RuleStatus::Failed);
    assert_eq!(
        spawn.violations[0].message,
        "Found tile \"Spawn\" at position (1, 2) in layer \"Front\" instead of \"Game\" layer."
    );
    assert_eq!(report.halted_by.as_deref(), Some("spawn"));
    assert!(!report.verdict());
}

#[test]
fn markdown_report_of_broken_map() {
    let report = check("broken.json");
    let markdown = create_reporter("markdown").unwrap().generate(&report).unwrap();

    assert!(markdown.starts_with("#### ✅ file_size\n**Explanation**: -\n"));
    assert!(markdown.contains("#### ⚠️ license\n**Explanation**: Map info \"license\" must only contain CC0, CC-BY, CC-BY-SA\n"));
    assert!(markdown.contains("- \"GPL\" in \"license\" is not explicitly set."));
    assert!(markdown.contains("#### ❌ spawn\n"));
    assert!(!markdown.contains("start"));
}

#[test]
fn json_report_carries_verdict_and_halt() {
    let report = check("broken.json");
    let rendered = create_reporter("json").unwrap().generate(&report).unwrap();
    let value: Value = serde_json::from_str(&rendered).unwrap();

    assert_eq!(value["verdict"], false);
    assert_eq!(value["halted_by"], "spawn");
    assert_eq!(value["results"].as_array().unwrap().len(), 5);
    assert_eq!(value["results"][4]["status"], "failed");
    assert_eq!(value["results"][4]["rule"]["type"], "require");
    assert!(value["results"][0].get("elapsed").is_none());
}
