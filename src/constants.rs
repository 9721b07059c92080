//! Fixed sizes and format constants shared across the crate.

/// Number of distinct cooler component types in the shipped catalog.
pub const COOLER_TYPES: usize = 31;

/// Tile id of the moderator sentinel, the first id past the active range.
pub const MODERATOR_ID: u16 = (COOLER_TYPES * 2) as u16;

/// Tile id of the air sentinel.
pub const AIR_ID: u16 = MODERATOR_ID + 1;

/// One past the largest valid tile id.
pub const TILE_ID_RANGE: u16 = AIR_ID + 1;

/// Tally key of the synthetic casing entry. Never appears in grid data.
pub const CASING_KEY: i32 = -1;

/// Constants of the schematic container format.
pub mod schematic {
    /// Container format version written into every schematic.
    pub const FORMAT_VERSION: i32 = 2;

    /// Game data version the palette identifiers target.
    pub const DATA_VERSION: i32 = 3465;

    /// Conventional file name of the schematic artifact.
    pub const DEFAULT_FILE_NAME: &str = "reactor.schem";

    /// Distinct palette entries representable by byte-wide block data.
    pub const MAX_PALETTE: usize = 256;
}

/// Constants of the persisted block identifiers.
pub mod identifiers {
    /// Namespace prefix for mod-provided blocks.
    pub const NAMESPACE: &str = "nuclearcraft";

    /// Suffix appended to cooler block identifiers.
    pub const HEAT_SINK_SUFFIX: &str = "_heat_sink";

    /// Infix marking the active-cooling variant of a cooler block.
    pub const ACTIVE_PREFIX: &str = "active_";

    /// Fixed identifier of the air sentinel. Never namespaced or suffixed.
    pub const AIR: &str = "minecraft:air";

    /// Fixed identifier of the moderator sentinel.
    pub const MODERATOR: &str = "nuclearcraft:graphite_block";
}
