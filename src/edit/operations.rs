//! Single logical edits over a grid
//!
//! Each operation returns the resulting grid and leaves its input untouched.
//! History bookkeeping is the caller's job.

use log::trace;

use crate::edit::region::fill_region;
use crate::io::error::Result;
use crate::raster::{Color, Grid};

/// Recolor one cell
///
/// # Errors
///
/// Returns `OutOfBounds` if `index` is not a cell of `grid`
pub fn paint_cell(grid: &Grid, index: usize, color: Color) -> Result<Grid> {
    grid.set_index(index, color)
}

/// Reset one cell to the transparent sentinel
///
/// # Errors
///
/// Returns `OutOfBounds` if `index` is not a cell of `grid`
pub fn erase_cell(grid: &Grid, index: usize) -> Result<Grid> {
    paint_cell(grid, index, Color::TRANSPARENT)
}

/// Recolor the 4-connected region of `start`'s color reachable from `start`
///
/// Filling with the color already at `start` returns an identical grid.
/// Same-colored cells outside the connected region keep their color.
///
/// # Errors
///
/// Returns `OutOfBounds` if `start` is not a cell of `grid`
pub fn flood_fill(grid: &Grid, start: usize, new_color: Color) -> Result<Grid> {
    let target = grid.get_index(start)?;
    if target == new_color {
        return Ok(grid.clone());
    }

    let region = fill_region(grid, start)?;
    let mut filled = grid.clone();

    for index in region.indices() {
        let (row, col) = filled.position_of(index)?;
        let cell = filled.cell_mut(row, col)?;
        if *cell == target {
            *cell = new_color;
        }
    }

    trace!(
        "flood fill from {start}: {} cells {target} -> {new_color}",
        region.len()
    );
    Ok(filled)
}

/// Sample the color of one cell (eyedropper)
///
/// # Errors
///
/// Returns `OutOfBounds` if `index` is not a cell of `grid`
pub fn pick_color(grid: &Grid, index: usize) -> Result<Color> {
    grid.get_index(index)
}
