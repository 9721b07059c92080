use super::layout::GridLayout;
use super::walker::{AxisOrder, GridWalk};
use crate::catalog::TileId;
use crate::error::{ExportError, ExportResult};

/// Read-only view the optimization engine exposes over its current best grid.
///
/// The view is valid until the engine reports the next best result; callers
/// that need the data past that point capture a [`GridSnapshot`].
pub trait GridSource {
    /// Flat tile data, addressed through `shape`/`stride`.
    fn data(&self) -> &[TileId];
    /// Extent along a logical axis (`0..3`).
    fn shape(&self, axis: usize) -> usize;
    /// Element step along a logical axis (`0..3`).
    fn stride(&self, axis: usize) -> usize;
}

/// Owned copy of one best-found grid, immutable for the duration of every
/// encode or tally call made against it.
#[derive(Debug, Clone)]
pub struct GridSnapshot {
    data: Vec<TileId>,
    layout: GridLayout,
}

impl GridSnapshot {
    /// Copy the source's current grid. The copy pins this snapshot's contents
    /// even if the engine moves on to a newer best result mid-encode.
    pub fn capture<S: GridSource + ?Sized>(source: &S) -> ExportResult<GridSnapshot> {
        let layout = GridLayout {
            shape: [source.shape(0), source.shape(1), source.shape(2)],
            stride: [source.stride(0), source.stride(1), source.stride(2)],
        };
        GridSnapshot::from_parts(source.data().to_vec(), layout)
    }

    /// Build a snapshot from already-owned parts. Fails if the data cannot
    /// cover the extent the layout addresses.
    pub fn from_parts(data: Vec<TileId>, layout: GridLayout) -> ExportResult<GridSnapshot> {
        let required = layout.required_len();
        if data.len() < required {
            return Err(ExportError::ShapeMismatch {
                len: data.len(),
                required,
            });
        }
        Ok(GridSnapshot { data, layout })
    }

    pub fn layout(&self) -> GridLayout {
        self.layout
    }

    pub fn shape(&self) -> [usize; 3] {
        self.layout.shape
    }

    pub fn data(&self) -> &[TileId] {
        &self.data
    }

    /// One full pass in the given axis order. Each call starts a fresh walk.
    pub fn walk(&self, order: AxisOrder) -> GridWalk<'_> {
        GridWalk::new(&self.data, self.layout, order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedSource {
        data: Vec<TileId>,
        layout: GridLayout,
    }

    impl GridSource for FixedSource {
        fn data(&self) -> &[TileId] {
            &self.data
        }
        fn shape(&self, axis: usize) -> usize {
            self.layout.shape[axis]
        }
        fn stride(&self, axis: usize) -> usize {
            self.layout.stride[axis]
        }
    }

    #[test]
    fn test_capture_copies_data() {
        let layout = GridLayout::contiguous([1, 1, 3]);
        let source = FixedSource {
            data: vec![TileId(1), TileId(2), TileId(3)],
            layout,
        };
        let snapshot = GridSnapshot::capture(&source).expect("valid source");
        assert_eq!(snapshot.shape(), [1, 1, 3]);
        assert_eq!(snapshot.data(), source.data.as_slice());
    }

    #[test]
    fn test_short_data_is_rejected() {
        let layout = GridLayout::contiguous([2, 2, 2]);
        let err = GridSnapshot::from_parts(vec![TileId::AIR; 7], layout).unwrap_err();
        match err {
            ExportError::ShapeMismatch { len, required } => {
                assert_eq!(len, 7);
                assert_eq!(required, 8);
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_walks_both_orders() {
        let layout = GridLayout::contiguous([2, 1, 2]);
        let snapshot =
            GridSnapshot::from_parts(vec![TileId(0), TileId(1), TileId(2), TileId(3)], layout)
                .expect("valid parts");
        let depth: Vec<u16> = snapshot.walk(AxisOrder::DepthMajor).map(|id| id.0).collect();
        let height: Vec<u16> = snapshot.walk(AxisOrder::HeightMajor).map(|id| id.0).collect();
        assert_eq!(depth, vec![0, 1, 2, 3]);
        assert_eq!(height, vec![0, 1, 2, 3]);
    }
}
