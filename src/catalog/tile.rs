use crate::constants::{AIR_ID, COOLER_TYPES, MODERATOR_ID};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer code for a grid cell's component, as produced by the optimizer.
///
/// The raw value encodes three ranges: `[0, N)` are normal cooler tiles,
/// `[N, 2N)` their active-cooling variants, and the two ids past that are the
/// moderator and air sentinels. [`TileId::classify`] decodes the convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct TileId(pub u16);

impl TileId {
    pub const MODERATOR: TileId = TileId(MODERATOR_ID);
    pub const AIR: TileId = TileId(AIR_ID);

    /// Create a new TileId from a raw u16 value
    pub const fn new(id: u16) -> Self {
        TileId(id)
    }

    /// Decode the id-range convention once; downstream code consumes the
    /// tagged form instead of repeating range checks.
    pub fn classify(self) -> Tile {
        Tile::from_id(self)
    }
}

impl Default for TileId {
    fn default() -> Self {
        TileId::AIR
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

/// A tile id decoded out of the raw integer ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    /// Normal-cooling-mode cooler, index into the base catalog.
    Base(usize),
    /// Active-cooling variant of the base cooler at the same index.
    Active(usize),
    /// One of the two fixed tiles past the active range.
    Sentinel(SentinelKind),
}

/// The fixed tiles that are not derived from the cooler catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SentinelKind {
    Moderator,
    Air,
}

impl Tile {
    /// Decode a raw id. Every id in `[0, 2N + 2)` maps to a variant; anything
    /// larger is a contract violation by the grid source and is not defended
    /// against beyond a debug assertion.
    pub fn from_id(id: TileId) -> Tile {
        let raw = id.0 as usize;
        if raw < COOLER_TYPES {
            Tile::Base(raw)
        } else if raw < COOLER_TYPES * 2 {
            Tile::Active(raw - COOLER_TYPES)
        } else if id == TileId::MODERATOR {
            Tile::Sentinel(SentinelKind::Moderator)
        } else {
            debug_assert_eq!(id, TileId::AIR, "tile id {} outside the catalog range", raw);
            Tile::Sentinel(SentinelKind::Air)
        }
    }

    /// Whether this is the active-cooling variant of a base cooler.
    pub fn is_active_variant(self) -> bool {
        matches!(self, Tile::Active(_))
    }
}
