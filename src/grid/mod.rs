//! Grid data model and fixed-order traversal.
//!
//! The optimizer hands over a flat array described by per-axis shape and
//! stride. Everything here goes through that description; the two exporters
//! read the same snapshot in different axis orders, so no code may bake in a
//! memory layout.

mod layout;
mod snapshot;
mod walker;

pub use layout::GridLayout;
pub use snapshot::{GridSnapshot, GridSource};
pub use walker::{AxisOrder, GridWalk};
