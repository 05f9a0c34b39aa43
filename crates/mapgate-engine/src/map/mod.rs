//! Read-only view of a decoded map.
//!
//! Decoding the binary map format is the job of an external decoder; the
//! engine only sees the [`MapSource`] trait. [`MapData`] is the in-memory
//! implementation, loaded from the decoder's JSON dump.

pub mod types;

pub use types::*;

/// Read-only access to a decoded map. Rules must not mutate what they read.
pub trait MapSource: Send + Sync {
    fn info(&self) -> &MapInfo;
    fn images(&self) -> &[MapImage];
    fn sounds(&self) -> &[MapSound];
    fn groups(&self) -> &[Group];

    /// All layers across all groups, in declaration order.
    fn layers(&self) -> Box<dyn Iterator<Item = &Layer> + '_> {
        Box::new(self.groups().iter().flat_map(|g| g.layers.iter()))
    }
}

impl MapSource for MapData {
    fn info(&self) -> &MapInfo {
        &self.info
    }

    fn images(&self) -> &[MapImage] {
        &self.images
    }

    fn sounds(&self) -> &[MapSound] {
        &self.sounds
    }

    fn groups(&self) -> &[Group] {
        &self.groups
    }
}
