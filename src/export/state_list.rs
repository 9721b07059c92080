//! Block-state placement list assembly.
//!
//! The placement tool pastes a single JSON-like string: an ordered list of
//! block-state descriptors, a start/end position pair, and the per-cell
//! dense-id sequence in height-major order. The format is whitespace-free
//! and comma-joined; the descriptor quotes are escaped because the whole
//! structure is embedded in an outer JSON string.

use crate::catalog::catalog;
use crate::export::{clipboard, palette};
use crate::grid::{AxisOrder, GridSnapshot};
use std::fmt::Write;

/// Encode one snapshot into the placement string.
///
/// The palette here is keyed by the full descriptor text and built over the
/// height-major traversal; it never shares state with the schematic palette.
pub fn encode(snapshot: &GridSnapshot) -> String {
    let catalog = catalog();
    let descriptors: Vec<String> = snapshot
        .walk(AxisOrder::HeightMajor)
        .map(|id| format!("{{Name:\\\"{}\\\"}}", catalog.persisted_identifier(id)))
        .collect();
    let (palette, dense) = palette::build(descriptors.iter().map(String::as_str));

    let mut state_map = String::new();
    for (descriptor, id) in palette.iter() {
        if id > 0 {
            state_map.push(',');
        }
        state_map.push_str(descriptor);
    }

    let mut state_list = String::new();
    for (position, id) in dense.iter().enumerate() {
        if position > 0 {
            state_list.push(',');
        }
        let _ = write!(state_list, "{}", id);
    }

    let shape = snapshot.shape();
    format!(
        "{{\"statePosArrayList\": \"{{blockstatemap:[{}],startpos:{{X:0,Y:0,Z:0}},endpos:{{X:{},Y:{},Z:{}}},statelist:[I;{}]}}\"}}",
        state_map,
        shape[2] as i64 - 1,
        shape[0] as i64 - 1,
        shape[1] as i64 - 1,
        state_list
    )
}

/// Encode and place the result on the clipboard sink. The string is also
/// returned so callers can surface it directly.
pub fn copy(snapshot: &GridSnapshot) -> String {
    let text = encode(snapshot);
    clipboard::copy(&text);
    log::info!("[state_list] copied {} characters to the clipboard", text.len());
    text
}
