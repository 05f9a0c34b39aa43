//! Presence, placement and count of a specific tile.

use mapgate_core::errors::{EvaluationError, RuleConfigError};
use serde::Deserialize;
use serde_json::json;

use crate::rules::{params, Rule, RuleConfig, RuleContext, Violation};

#[derive(Debug, Deserialize)]
struct TileParams {
    expected_tile: u8,
    humanized: String,
    #[serde(default)]
    expected_layer: Option<String>,
    #[serde(default, alias = "min_occurances")]
    min_occurrences: Option<usize>,
    #[serde(default, alias = "max_occurances")]
    max_occurrences: Option<usize>,
}

/// A tile id must appear on the game or front layer (or the named
/// `expected_layer`), optionally only in that layer and within count bounds. A map without the tile at all cannot be
/// checked further and is reported as an evaluation error.
#[derive(Debug)]
pub struct TileExist {
    tile: u8,
    humanized: String,
    layer: Option<String>,
    min: Option<usize>,
    max: Option<usize>,
}

impl TileExist {
    pub fn build(config: &RuleConfig) -> Result<Box<dyn Rule>, RuleConfigError> {
        let p: TileParams = params::decode(config)?;
        if let (Some(min), Some(max)) = (p.min_occurrences, p.max_occurrences) {
            if min > max {
                return Err(params::invalid(
                    config,
                    format!("min_occurrences {min} exceeds max_occurrences {max}"),
                ));
            }
        }
        Ok(Box::new(Self {
            tile: p.expected_tile,
            humanized: p.humanized,
            layer: p.expected_layer,
            min: p.min_occurrences,
            max: p.max_occurrences,
        }))
    }
}

impl Rule for TileExist {
    fn explain(&self) -> String {
        let mut text = format!(
            "Map contains tile \"{}\" (TileID: {})",
            self.humanized, self.tile
        );
        if let Some(layer) = &self.layer {
            text.push_str(&format!(" only in layer \"{layer}\""));
        }
        match (self.min, self.max) {
            (Some(min), Some(max)) => text.push_str(&format!(", between {min} and {max} times")),
            (Some(min), None) => text.push_str(&format!(", at least {min} times")),
            (None, Some(max)) => text.push_str(&format!(", at most {max} times")),
            (None, None) => {}
        }
        text
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Result<Vec<Violation>, EvaluationError> {
        let map = ctx.map()?;
        let mut violations = Vec::new();
        let mut count = 0usize;

        let scanned = map.layers().filter(|layer| {
            layer.kind.carries_game_tiles() || self.layer.as_deref() == Some(layer.name.as_str())
        });
        for layer in scanned {
            for (y, x) in layer.positions_of(self.tile) {
                count += 1;
                match &self.layer {
                    Some(expected) if *expected != layer.name => violations.push(Violation::new(
                        format!(
                            "Found tile \"{}\" at position ({y}, {x}) in layer \"{}\" instead of \"{expected}\" layer.",
                            self.humanized, layer.name
                        ),
                        vec![json!(layer.name), json!("!="), json!(expected)],
                    )),
                    _ => {}
                }
            }
        }

        if count == 0 {
            return Err(EvaluationError::CheckFailed(format!(
                "Expected \"{}\" is not on the map at all",
                self.humanized
            )));
        }
        if let Some(min) = self.min.filter(|&min| count < min) {
            violations.push(Violation::new(
                format!("Expected \"{}\" to be at least {min} on the map.", self.humanized),
                vec![json!(count), json!("<"), json!(min)],
            ));
        }
        if let Some(max) = self.max.filter(|&max| count > max) {
            violations.push(Violation::new(
                format!("Expected \"{}\" to be max {max} on the map.", self.humanized),
                vec![json!(count), json!(">"), json!(max)],
            ));
        }
        Ok(violations)
    }
}
