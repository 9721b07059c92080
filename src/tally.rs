//! Block-usage tally for the current best design.
//!
//! Counts are derived data, rebuilt from scratch on every best-result event
//! and discarded after one display cycle. The casing entry is computed from
//! the shape alone: it stands for the structural shell around the grid and
//! never appears in the grid data itself.

use crate::constants::{AIR_ID, CASING_KEY};
use crate::grid::{AxisOrder, GridSnapshot};
use std::collections::HashMap;

/// Count every tile id in the snapshot and inject the derived casing entry
/// under [`CASING_KEY`].
pub fn tally(snapshot: &GridSnapshot) -> HashMap<i32, u64> {
    let mut counts: HashMap<i32, u64> = HashMap::new();

    let [d0, d1, d2] = snapshot.shape();
    // Structural shell: faces, edges, corners.
    let casing = 2 * (d0 * d1 + d1 * d2 + d2 * d0) + 4 * (d0 + d1 + d2) + 8;
    counts.insert(CASING_KEY, casing as u64);

    for id in snapshot.walk(AxisOrder::DepthMajor) {
        *counts.entry(id.0 as i32).or_insert(0) += 1;
    }
    counts
}

/// Rows for display: count-descending (ties broken by id so output is
/// stable), with the all-air entry suppressed. The underlying map keeps it.
pub fn display_rows(counts: &HashMap<i32, u64>) -> Vec<(i32, u64)> {
    let mut rows: Vec<(i32, u64)> = counts
        .iter()
        .filter(|(&id, _)| id != AIR_ID as i32)
        .map(|(&id, &count)| (id, count))
        .collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    rows
}
