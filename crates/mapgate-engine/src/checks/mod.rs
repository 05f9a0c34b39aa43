//! Built-in map checks, registered under the `module` / `class_name` pairs
//! rule files refer to.

pub mod file;
pub mod image;
pub mod mapres;
pub mod matcher;
pub mod meta;
pub mod setting;
pub mod sound;
pub mod tile;

use crate::rules::RuleRegistry;

pub fn register_builtin(registry: &mut RuleRegistry) {
    registry.register("rules.file", "FileSize", file::FileSize::build);
    registry.register("rules.image", "Valid", image::ImageValid::build);
    registry.register("rules.meta", "Valid", meta::MetaValid::build);
    registry.register("rules.setting", "Valid", setting::SettingValid::build);
    registry.register("rules.sound", "Valid", sound::SoundValid::build);
    registry.register("rules.tile", "Exist", tile::TileExist::build);
}
