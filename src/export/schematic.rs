//! Schematic container assembly.
//!
//! The downstream schematic tooling expects a fixed field set in a fixed
//! order, with its own axis naming: `Width` is the grid's axis 2, `Height`
//! axis 0, `Length` axis 1. Block data is one byte per cell in depth-major
//! traversal order.

use crate::catalog::catalog;
use crate::constants::schematic::{DATA_VERSION, FORMAT_VERSION, MAX_PALETTE};
use crate::error::{ExportError, ExportResult};
use crate::export::nbt::{self, Tag};
use crate::export::palette;
use crate::grid::{AxisOrder, GridSnapshot};
use std::path::Path;

pub use crate::constants::schematic::DEFAULT_FILE_NAME;

/// Encode one snapshot into the versioned binary container.
///
/// Deterministic: the same snapshot always yields the same bytes.
pub fn encode(snapshot: &GridSnapshot) -> ExportResult<Vec<u8>> {
    let catalog = catalog();
    let (palette, dense) = palette::build(
        snapshot
            .walk(AxisOrder::DepthMajor)
            .map(|id| catalog.persisted_identifier(id)),
    );
    if palette.len() > MAX_PALETTE {
        return Err(ExportError::PaletteOverflow {
            count: palette.len(),
            max: MAX_PALETTE,
        });
    }

    let shape = snapshot.shape();
    let palette_tag = Tag::Compound(
        palette
            .iter()
            .map(|(identifier, id)| (identifier.to_string(), Tag::Int(id as i32)))
            .collect(),
    );
    let block_data: Vec<i8> = dense.into_iter().map(|id| id as i8).collect();

    let fields = vec![
        ("Width".to_string(), Tag::Short(shape[2] as i16)),
        ("Height".to_string(), Tag::Short(shape[0] as i16)),
        ("Length".to_string(), Tag::Short(shape[1] as i16)),
        ("Version".to_string(), Tag::Int(FORMAT_VERSION)),
        ("DataVersion".to_string(), Tag::Int(DATA_VERSION)),
        ("PaletteMax".to_string(), Tag::Int(palette.len() as i32)),
        ("Palette".to_string(), palette_tag),
        ("BlockData".to_string(), Tag::ByteArray(block_data)),
    ];
    Ok(nbt::write_root(fields))
}

/// Encode and write the container to `path`, conventionally ending in
/// [`DEFAULT_FILE_NAME`]. Fire-and-forget: a failure surfaces to this one
/// caller and nothing is retried.
pub fn save(snapshot: &GridSnapshot, path: &Path) -> ExportResult<()> {
    let bytes = encode(snapshot)?;
    std::fs::write(path, &bytes).map_err(|error| ExportError::Io {
        path: path.display().to_string(),
        error: error.to_string(),
    })?;
    log::info!("[schematic] wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}
