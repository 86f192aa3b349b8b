//! Connected-region discovery for flood fill

use bitvec::prelude::{BitVec, bitvec};

use crate::io::error::Result;
use crate::raster::{Color, Grid};

/// Cells 4-connected to a start cell through cells of the start cell's color
///
/// Stored as a bit mask over flat indices of the grid it was computed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillRegion {
    mask: BitVec,
    target: Color,
}

impl FillRegion {
    /// Color shared by every cell of the region
    pub const fn target(&self) -> Color {
        self.target
    }

    /// Check if a flat index belongs to the region
    pub fn contains(&self, index: usize) -> bool {
        self.mask.get(index).is_some_and(|bit| *bit)
    }

    /// Number of cells in the region
    pub fn len(&self) -> usize {
        self.mask.count_ones()
    }

    /// True only for regions built over no cells
    pub fn is_empty(&self) -> bool {
        self.mask.not_any()
    }

    /// Flat indices of the region in ascending order
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.mask.iter_ones()
    }
}

/// Find the 4-connected region of `start`'s color containing `start`
///
/// Iterative work-list traversal; a cell is marked when queued so it is
/// never pushed twice.
///
/// # Errors
///
/// Returns `OutOfBounds` if `start` is not a cell of `grid`
pub fn fill_region(grid: &Grid, start: usize) -> Result<FillRegion> {
    let target = grid.get_index(start)?;

    let mut mask = bitvec![0; grid.cell_count()];
    mask.set(start, true);
    let mut pending = vec![start];

    while let Some(index) = pending.pop() {
        for neighbor in grid.neighbors(index) {
            let queued = mask.get(neighbor).is_some_and(|bit| *bit);
            if !queued && grid.get_index(neighbor)? == target {
                mask.set(neighbor, true);
                pending.push(neighbor);
            }
        }
    }

    Ok(FillRegion { mask, target })
}
