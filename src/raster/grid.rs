//! Fixed-size color grid with row-major addressing
//!
//! Cells live in an `Array2` of shape `(height, width)`, so the cell count
//! always equals `width * height` and flat indices follow
//! `index = row * width + col`. All editing methods return a new grid and
//! leave the receiver untouched.

use ndarray::{Array2, Axis as ArrayAxis, Slice};

use crate::io::configuration::{MAX_DIMENSION, MIN_DIMENSION};
use crate::io::error::{Axis, EditorError, Result, invalid_document};
use crate::raster::Color;

/// Check a requested width or height against the supported range
///
/// # Errors
///
/// Returns `InvalidDimension` if `value` is outside `MIN_DIMENSION..=MAX_DIMENSION`
pub const fn validate_dimension(axis: Axis, value: usize) -> Result<usize> {
    if value < MIN_DIMENSION || value > MAX_DIMENSION {
        return Err(EditorError::InvalidDimension { axis, value });
    }
    Ok(value)
}

/// The artwork: a `width x height` grid of cell colors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2<Color>,
}

impl Grid {
    /// Create a grid with every cell set to `fill`
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimension` if either dimension is outside the supported range
    pub fn new(width: usize, height: usize, fill: Color) -> Result<Self> {
        validate_dimension(Axis::Width, width)?;
        validate_dimension(Axis::Height, height)?;

        Ok(Self {
            cells: Array2::from_elem((height, width), fill),
        })
    }

    /// Build a grid from row-major cell colors
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Either dimension is outside the supported range
    /// - `cells` does not hold exactly `width * height` colors
    pub fn from_cells(width: usize, height: usize, cells: Vec<Color>) -> Result<Self> {
        validate_dimension(Axis::Width, width)?;
        validate_dimension(Axis::Height, height)?;

        if cells.len() != width * height {
            return Err(invalid_document(&format!(
                "expected {} pixels for a {width}x{height} grid, found {}",
                width * height,
                cells.len()
            )));
        }

        let cells = Array2::from_shape_vec((height, width), cells)
            .map_err(|e| invalid_document(&e))?;
        Ok(Self { cells })
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Total number of cells (`width * height`)
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    fn out_of_bounds(&self, row: usize, col: usize) -> EditorError {
        EditorError::OutOfBounds {
            row,
            col,
            width: self.width(),
            height: self.height(),
        }
    }

    /// Flat index of a coordinate
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the coordinate lies outside the grid
    pub fn index_of(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.height() || col >= self.width() {
            return Err(self.out_of_bounds(row, col));
        }
        Ok(row * self.width() + col)
    }

    /// Coordinate `(row, col)` of a flat index
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the index is past the last cell
    pub fn position_of(&self, index: usize) -> Result<(usize, usize)> {
        let width = self.width();
        let (row, col) = (index / width, index % width);
        if row >= self.height() {
            return Err(self.out_of_bounds(row, col));
        }
        Ok((row, col))
    }

    /// Color at a coordinate
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the coordinate lies outside the grid
    pub fn get(&self, row: usize, col: usize) -> Result<Color> {
        self.cells
            .get((row, col))
            .copied()
            .ok_or_else(|| self.out_of_bounds(row, col))
    }

    /// Color at a flat index
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the index is past the last cell
    pub fn get_index(&self, index: usize) -> Result<Color> {
        let (row, col) = self.position_of(index)?;
        self.get(row, col)
    }

    /// Copy of this grid with one cell recolored
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the coordinate lies outside the grid
    pub fn set(&self, row: usize, col: usize, color: Color) -> Result<Self> {
        let mut next = self.clone();
        *next.cell_mut(row, col)? = color;
        Ok(next)
    }

    /// Copy of this grid with the cell at a flat index recolored
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the index is past the last cell
    pub fn set_index(&self, index: usize, color: Color) -> Result<Self> {
        let (row, col) = self.position_of(index)?;
        self.set(row, col, color)
    }

    pub(crate) fn cell_mut(&mut self, row: usize, col: usize) -> Result<&mut Color> {
        let error = self.out_of_bounds(row, col);
        self.cells.get_mut((row, col)).ok_or(error)
    }

    /// Copy of this grid with new dimensions
    ///
    /// The top-left `min(height, new_height) x min(width, new_width)` rectangle
    /// is kept; every other cell of the new grid is `fill`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimension` if either new dimension is outside the supported range
    pub fn resize(&self, new_width: usize, new_height: usize, fill: Color) -> Result<Self> {
        let mut resized = Self::new(new_width, new_height, fill)?;

        let rows = Slice::from(..self.height().min(new_height));
        let cols = Slice::from(..self.width().min(new_width));

        let mut kept = self.cells.view();
        kept.slice_axis_inplace(ArrayAxis(0), rows);
        kept.slice_axis_inplace(ArrayAxis(1), cols);

        let mut target = resized.cells.view_mut();
        target.slice_axis_inplace(ArrayAxis(0), rows);
        target.slice_axis_inplace(ArrayAxis(1), cols);
        target.assign(&kept);

        Ok(resized)
    }

    /// Flat indices of the in-bounds edge neighbors (up, down, left, right)
    ///
    /// `index` is assumed to be a valid cell of this grid.
    pub fn neighbors(&self, index: usize) -> impl Iterator<Item = usize> + use<> {
        let width = self.width();
        let height = self.height();
        let (row, col) = (index / width, index % width);

        [
            (row > 0).then(|| index - width),
            (row + 1 < height).then(|| index + width),
            (col > 0).then(|| index - 1),
            (col + 1 < width).then(|| index + 1),
        ]
        .into_iter()
        .flatten()
    }

    /// Cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = &Color> {
        self.cells.iter()
    }

    /// Row-major copy of all cells
    pub fn to_cells(&self) -> Vec<Color> {
        self.cells.iter().copied().collect()
    }

    /// Number of cells holding `color`
    pub fn count(&self, color: Color) -> usize {
        self.cells.iter().filter(|&&c| c == color).count()
    }
}
