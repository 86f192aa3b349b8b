//! Immutable grid snapshots stored in the history stacks

use crate::raster::Grid;

/// Independent copy of a grid's dimensions and cells
///
/// A snapshot owns its cells; nothing else can observe or mutate them
/// while it sits in a history stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    grid: Grid,
}

impl Snapshot {
    /// Copy the given grid
    pub fn capture(grid: &Grid) -> Self {
        Self { grid: grid.clone() }
    }

    /// Take ownership of a grid that is no longer live
    pub const fn from_grid(grid: Grid) -> Self {
        Self { grid }
    }

    /// Read-only view of the captured grid
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Release the captured grid for use as the live grid
    pub fn into_grid(self) -> Grid {
        self.grid
    }
}
