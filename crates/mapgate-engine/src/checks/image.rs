//! Image dimensions and mapres provenance.

use std::path::{Path, PathBuf};

use mapgate_core::errors::{EvaluationError, RuleConfigError};
use rustc_hash::FxHashSet;
use serde::Deserialize;
use serde_json::json;

use super::mapres;
use crate::map::MapImage;
use crate::rules::{params, Rule, RuleConfig, RuleContext, Violation};

const TILE_SIZE: u32 = 16;

#[derive(Debug, Deserialize)]
#[serde(default)]
struct ImageParams {
    mapres_dir: PathBuf,
    custom_mapres_dir: PathBuf,
}

impl Default for ImageParams {
    fn default() -> Self {
        Self {
            mapres_dir: PathBuf::from("data/mapres"),
            custom_mapres_dir: PathBuf::from("data/custom_mapres"),
        }
    }
}

/// Image sizes must be multiples of 16. External images must be stock
/// mapres; embedded ones must be approved custom mapres, identified by
/// `<name>-<sha512>`.
#[derive(Debug)]
pub struct ImageValid {
    mapres_dir: PathBuf,
    custom_mapres_dir: PathBuf,
}

impl ImageValid {
    pub fn build(config: &RuleConfig) -> Result<Box<dyn Rule>, RuleConfigError> {
        let p: ImageParams = params::decode(config)?;
        Ok(Box::new(Self {
            mapres_dir: p.mapres_dir,
            custom_mapres_dir: p.custom_mapres_dir,
        }))
    }
}

impl Rule for ImageValid {
    fn explain(&self) -> String {
        format!(
            "Images have a width and height divisible by {TILE_SIZE} and are either stock or approved custom mapres"
        )
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Result<Vec<Violation>, EvaluationError> {
        let images = ctx.map()?.images();
        let mut violations = Vec::new();

        for image in images {
            violations.extend(dimension_violations(image));
        }

        // Listings are read only when some image needs them.
        let mut stock: Option<FxHashSet<String>> = None;
        let mut custom: Option<FxHashSet<String>> = None;

        for image in images {
            if image.is_external() {
                if !listing(&mut stock, &self.mapres_dir)?.contains(&image.name) {
                    violations.push(Violation::new(
                        format!(
                            "{} is not a valid mapres, either the mapres is missing or you have used a wrong one",
                            image.name
                        ),
                        vec![json!(image.name), json!("in"), json!("mapres")],
                    ));
                }
                continue;
            }

            match image.data.as_deref() {
                Some(data) if !data.is_empty() => {
                    let stem = mapres::approved_stem(&image.name, data);
                    if !listing(&mut custom, &self.custom_mapres_dir)?.contains(&stem) {
                        violations.push(Violation::new(
                            format!(
                                "{stem}.png is not an allowed custom mapres. Ask mappers to approve it first"
                            ),
                            vec![json!(image.name), json!("not in"), json!("custom_mapres")],
                        ));
                    }
                }
                _ => violations.push(Violation::new(
                    format!("{} is embedded but has no data.", image.name),
                    vec![json!(image.name), json!("has"), json!("no data")],
                )),
            }
        }

        Ok(violations)
    }
}

fn listing<'c>(
    cache: &'c mut Option<FxHashSet<String>>,
    dir: &Path,
) -> Result<&'c FxHashSet<String>, EvaluationError> {
    if cache.is_none() {
        *cache = Some(mapres::resource_stems(dir)?);
    }
    Ok(cache.get_or_insert_with(FxHashSet::default))
}

fn dimension_violations(image: &MapImage) -> Vec<Violation> {
    [("height", image.height), ("width", image.width)]
        .into_iter()
        .filter(|(_, value)| value % TILE_SIZE != 0)
        .map(|(what, value)| {
            Violation::new(
                format!(
                    "{} {what} is not divisible by {TILE_SIZE}, may encounter visual bugs",
                    image.name
                ),
                vec![json!(value), json!("%"), json!(TILE_SIZE)],
            )
        })
        .collect()
}
