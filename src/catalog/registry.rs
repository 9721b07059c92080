use super::tile::{SentinelKind, Tile, TileId};
use crate::constants::{identifiers, COOLER_TYPES};
use lazy_static::lazy_static;
use serde::Deserialize;

/// One catalog row as stored in `data/components.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogEntry {
    /// Tooltip title, e.g. "Liquid Helium". Also the source of the persisted
    /// identifier for cooler entries.
    pub title: String,
    /// Short display code, e.g. "He".
    pub name: String,
    #[serde(rename = "className")]
    pub class_name: String,
    /// Default passive cooling rate (H/t); absent on the sentinels.
    pub cooling_rate: Option<f64>,
    /// Default active cooling rate (H/t); absent on the sentinels.
    pub active_cooling_rate: Option<f64>,
}

/// Display metadata resolved for one tile id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileDisplay<'a> {
    pub display_name: &'a str,
    pub css_class: &'a str,
    pub tooltip: &'a str,
    pub is_active_variant: bool,
}

/// Registry resolving tile ids to display metadata and persisted identifiers.
///
/// Built once per process from the embedded data file; identifiers are
/// normalized up front so every lookup borrows.
pub struct TileCatalog {
    /// Cooler entries `0..N`, then the moderator and air sentinel entries.
    entries: Vec<CatalogEntry>,
    /// Persisted identifier per raw tile id in `[0, 2N + 2)`.
    identifiers: Vec<String>,
}

static CATALOG_JSON: &str = include_str!("../../data/components.json");

lazy_static! {
    static ref CATALOG: TileCatalog = TileCatalog::load();
}

/// The process-wide catalog, built on first use.
pub fn catalog() -> &'static TileCatalog {
    &CATALOG
}

impl TileCatalog {
    fn load() -> TileCatalog {
        let entries: Vec<CatalogEntry> =
            serde_json::from_str(CATALOG_JSON).expect("embedded catalog data is well-formed");
        assert_eq!(
            entries.len(),
            COOLER_TYPES + 2,
            "catalog data must list every cooler plus the two sentinels"
        );
        let identifiers = build_identifiers(&entries);
        TileCatalog {
            entries,
            identifiers,
        }
    }

    /// Number of base cooler types.
    pub fn base_len(&self) -> usize {
        COOLER_TYPES
    }

    /// Catalog rows: coolers first, then the moderator and air entries.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Display metadata for any id in `[0, 2N + 2)`.
    pub fn resolve_display(&self, id: TileId) -> TileDisplay<'_> {
        let (entry, active) = match id.classify() {
            Tile::Base(index) => (&self.entries[index], false),
            Tile::Active(index) => (&self.entries[index], true),
            Tile::Sentinel(SentinelKind::Moderator) => (&self.entries[COOLER_TYPES], false),
            Tile::Sentinel(SentinelKind::Air) => (&self.entries[COOLER_TYPES + 1], false),
        };
        TileDisplay {
            display_name: &entry.name,
            css_class: &entry.class_name,
            tooltip: &entry.title,
            is_active_variant: active,
        }
    }

    /// Persisted block identifier written into both export formats.
    pub fn persisted_identifier(&self, id: TileId) -> &str {
        &self.identifiers[id.0 as usize]
    }

    /// Default cooling rate columns for the settings boundary: passive rates
    /// for `[0, N)` followed by active rates for `[N, 2N)`.
    pub fn default_cooling_rates(&self) -> Vec<f64> {
        let coolers = &self.entries[..COOLER_TYPES];
        coolers
            .iter()
            .map(|entry| entry.cooling_rate.unwrap_or(0.0))
            .chain(
                coolers
                    .iter()
                    .map(|entry| entry.active_cooling_rate.unwrap_or(0.0)),
            )
            .collect()
    }
}

/// Identifier of a cooler block: lowercase title, spaces collapsed to
/// underscores, `active_` infix for the active-cooling variant.
fn cooler_identifier(title: &str, active: bool) -> String {
    let name = title.to_lowercase().replace(' ', "_");
    if active {
        format!(
            "{}:{}{}{}",
            identifiers::NAMESPACE,
            identifiers::ACTIVE_PREFIX,
            name,
            identifiers::HEAT_SINK_SUFFIX
        )
    } else {
        format!(
            "{}:{}{}",
            identifiers::NAMESPACE,
            name,
            identifiers::HEAT_SINK_SUFFIX
        )
    }
}

fn build_identifiers(entries: &[CatalogEntry]) -> Vec<String> {
    let mut out = Vec::with_capacity(COOLER_TYPES * 2 + 2);
    for entry in &entries[..COOLER_TYPES] {
        out.push(cooler_identifier(&entry.title, false));
    }
    for entry in &entries[..COOLER_TYPES] {
        out.push(cooler_identifier(&entry.title, true));
    }
    out.push(identifiers::MODERATOR.to_string());
    out.push(identifiers::AIR.to_string());
    out
}
