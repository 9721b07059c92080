//! Error types for the export pipeline.
//!
//! The encoders validate nothing beyond what is listed here: snapshots are
//! checked once at capture time, and the schematic encoder rejects palettes
//! that byte-wide block data cannot represent. Effect failures (file write)
//! carry the path they were aimed at.

/// Type alias for Results in the export pipeline.
pub type ExportResult<T> = Result<T, ExportError>;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("palette overflow: {count} distinct block states, byte-wide block data holds at most {max}")]
    PaletteOverflow { count: usize, max: usize },
    #[error("grid data too short: {len} elements cannot cover the {required} addressed by shape and stride")]
    ShapeMismatch { len: usize, required: usize },
    #[error("IO error for {path}: {error}")]
    Io { path: String, error: String },
}
