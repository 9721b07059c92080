//! Export/encoding layer for a fission reactor layout optimizer.
//!
//! The optimization engine is an external collaborator reached through the
//! narrow interfaces in [`optimizer`]; this crate turns its best-found tile
//! grids into the two interchange artifacts downstream tools consume:
//!
//! - a voxel-structure schematic container ([`export::schematic`]), and
//! - a textual block-state placement list ([`export::state_list`]).
//!
//! Around that pipeline sit the pieces a real tool needs: the tile catalog,
//! fixed-order grid traversal, the block-usage tally, the settings boundary,
//! and the run/pause/stop session machine that owns the engine handle.

// Constants module
pub mod constants;

// Core encode pipeline
pub mod catalog;
pub mod error;
pub mod export;
pub mod grid;
pub mod tally;

// Engine boundary
pub mod config;
pub mod optimizer;

pub use catalog::{catalog, CatalogEntry, SentinelKind, Tile, TileCatalog, TileDisplay, TileId};
pub use config::{ConfigError, ConfigResult, Goal, OptimizerSettings, FUEL_PRESETS};
pub use error::{ExportError, ExportResult};
pub use grid::{AxisOrder, GridLayout, GridSnapshot, GridSource};
pub use optimizer::{
    BestResult, Optimizer, Phase, Progress, ReactorSample, SampleSummary, Session, SessionState,
};
