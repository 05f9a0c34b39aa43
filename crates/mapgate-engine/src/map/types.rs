//! Map model types.

use std::path::Path;

use mapgate_core::errors::MapError;
use serde::{Deserialize, Serialize};

/// A decoded map as dumped by the external decoder.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MapData {
    pub info: MapInfo,
    pub images: Vec<MapImage>,
    pub sounds: Vec<MapSound>,
    pub groups: Vec<Group>,
}

impl MapData {
    pub fn from_json_str(path: &str, json: &str) -> Result<Self, MapError> {
        serde_json::from_str(json).map_err(|e| MapError::Decode {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    pub fn from_json_file(path: &Path) -> Result<Self, MapError> {
        let display = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|source| MapError::Io {
            path: display.clone(),
            source,
        })?;
        Self::from_json_str(&display, &content)
    }
}

/// Map info block: metadata strings and server setting commands.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MapInfo {
    pub author: Option<String>,
    pub version: Option<String>,
    pub credits: Option<String>,
    pub license: Option<String>,
    /// Setting commands such as `sv_deepfly 0`.
    pub settings: Vec<String>,
}

/// Info fields that hold a single string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InfoField {
    Author,
    Version,
    Credits,
    License,
}

impl InfoField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Author => "author",
            Self::Version => "version",
            Self::Credits => "credits",
            Self::License => "license",
        }
    }
}

impl MapInfo {
    pub fn field(&self, field: InfoField) -> Option<&str> {
        match field {
            InfoField::Author => self.author.as_deref(),
            InfoField::Version => self.version.as_deref(),
            InfoField::Credits => self.credits.as_deref(),
            InfoField::License => self.license.as_deref(),
        }
    }

    /// Value of the first setting command named `key`. A command without
    /// arguments yields an empty string.
    pub fn setting(&self, key: &str) -> Option<&str> {
        self.settings.iter().find_map(|line| {
            let line = line.trim();
            let (name, value) = match line.split_once(char::is_whitespace) {
                Some((name, value)) => (name, value.trim()),
                None => (line, ""),
            };
            (name == key).then_some(value)
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MapImage {
    pub name: String,
    pub width: u32,
    pub height: u32,
    /// External images reference a mapres shipped with the game.
    pub external: bool,
    /// Pixel data of an embedded image.
    pub data: Option<Vec<u8>>,
}

impl MapImage {
    pub fn is_external(&self) -> bool {
        self.external
    }

    pub fn is_embedded(&self) -> bool {
        !self.external
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MapSound {
    pub name: String,
    pub data: Vec<u8>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Group {
    pub name: String,
    pub layers: Vec<Layer>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LayerKind {
    Game,
    #[default]
    Tiles,
    Front,
    Tele,
    Speedup,
    Switch,
    Tune,
    Quads,
    Sounds,
}

impl LayerKind {
    /// Layers whose tile ids are game tiles (spawns, start, finish, ...).
    /// Design, tele, speedup, switch and tune layers use their own id spaces.
    pub fn carries_game_tiles(&self) -> bool {
        matches!(self, Self::Game | Self::Front)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Layer {
    pub name: String,
    pub kind: LayerKind,
    /// Tile ids, row-major (`tiles[y][x]`).
    pub tiles: Vec<Vec<u8>>,
}

impl Layer {
    /// `(row, column)` of every tile equal to `id`.
    pub fn positions_of(&self, id: u8) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.tiles.iter().enumerate().flat_map(move |(y, row)| {
            row.iter()
                .enumerate()
                .filter(move |(_, &tile)| tile == id)
                .map(move |(x, _)| (y, x))
        })
    }
}
