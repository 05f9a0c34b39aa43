//! Engine benchmarks: long dependency chains and tile scans on large maps.
//!
//! Run with: cargo bench -p mapgate-engine --bench engine_bench

use std::path::Path;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use mapgate_engine::map::{Group, Layer, LayerKind, MapData, MapInfo};
use mapgate_engine::RuleEngine;
use serde_json::{json, Value};

fn setting_chain(len: usize) -> Vec<Value> {
    (0..len)
        .map(|i| {
            let depends_on: Vec<String> = if i == 0 { vec![] } else { vec![format!("s{}", i - 1)] };
            json!({
                "name": format!("s{i}"),
                "module": "rules.setting",
                "class_name": "Valid",
                "description": "chain link",
                "type": "fail",
                "depends_on": depends_on,
                "params": {"field": "sv_deepfly", "type": "list", "values": ["0"]},
            })
        })
        .collect()
}

fn square_map(side: usize) -> MapData {
    let mut tiles = vec![vec![1u8; side]; side];
    tiles[side / 2][side / 2] = 192;
    MapData {
        info: MapInfo {
            settings: vec!["sv_deepfly 0".into()],
            ..Default::default()
        },
        groups: vec![Group {
            name: "Game".into(),
            layers: vec![Layer {
                name: "Game".into(),
                kind: LayerKind::Game,
                tiles,
            }],
        }],
        ..Default::default()
    }
}

fn engine_dependency_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("dependency_chain");
    let engine = RuleEngine::with_builtin();
    let map = square_map(16);

    for len in [10, 100, 1000] {
        let records = setting_chain(len);
        group.bench_with_input(BenchmarkId::new("run", len), &records, |b, records| {
            b.iter(|| engine.run(records, Path::new("bench.map"), &map));
        });
    }
    group.finish();
}

fn engine_tile_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("tile_scan");
    group.sample_size(20);
    let engine = RuleEngine::with_builtin();
    let records = vec![json!({
        "name": "spawn",
        "module": "rules.tile",
        "class_name": "Exist",
        "description": "spawn",
        "type": "require",
        "depends_on": [],
        "params": {"expected_tile": 192, "humanized": "Spawn", "expected_layer": "Game"},
    })];

    for side in [100, 500, 1000] {
        let map = square_map(side);
        group.bench_with_input(BenchmarkId::new("exist", side), &map, |b, map| {
            b.iter(|| engine.run(&records, Path::new("bench.map"), map));
        });
    }
    group.finish();
}

criterion_group!(benches, engine_dependency_chain, engine_tile_scan);
criterion_main!(benches);
