//! Color palette supplying colors to the grid
//!
//! Displayed as rows of `PALETTE_WIDTH` squares; not part of the raster and
//! not tracked by history.

use serde::{Deserialize, Serialize};

use crate::io::configuration::{
    DEFAULT_FILL, DEFAULT_PALETTE_LEN, MAX_PALETTE_LEN, MIN_PALETTE_LEN, PALETTE_WIDTH,
};
use crate::io::error::{EditorError, Result};
use crate::raster::Color;

const fn validate_len(len: usize) -> Result<usize> {
    if len < MIN_PALETTE_LEN || len > MAX_PALETTE_LEN {
        return Err(EditorError::PaletteSize { requested: len });
    }
    Ok(len)
}

/// Ordered palette of 1 to 30 colors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Color>", into = "Vec<Color>")]
pub struct Palette {
    colors: Vec<Color>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: vec![DEFAULT_FILL; DEFAULT_PALETTE_LEN],
        }
    }
}

impl Palette {
    /// Palette of `len` squares all set to `fill`
    ///
    /// # Errors
    ///
    /// Returns `PaletteSize` if `len` is outside the allowed range
    pub fn new(len: usize, fill: Color) -> Result<Self> {
        validate_len(len)?;
        Ok(Self {
            colors: vec![fill; len],
        })
    }

    /// Palette holding exactly `colors`
    ///
    /// # Errors
    ///
    /// Returns `PaletteSize` if the color count is outside the allowed range
    pub fn from_colors(colors: Vec<Color>) -> Result<Self> {
        validate_len(colors.len())?;
        Ok(Self { colors })
    }

    /// Number of squares
    pub const fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; a palette keeps at least one square
    pub const fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Number of display rows
    pub const fn rows(&self) -> usize {
        self.colors.len().div_ceil(PALETTE_WIDTH)
    }

    /// Squares of one display row
    pub fn row(&self, row: usize) -> Option<&[Color]> {
        self.colors.chunks(PALETTE_WIDTH).nth(row)
    }

    /// All squares in order
    pub fn as_slice(&self) -> &[Color] {
        &self.colors
    }

    /// Color of one square
    ///
    /// # Errors
    ///
    /// Returns `PaletteIndex` if the square does not exist
    pub fn get(&self, index: usize) -> Result<Color> {
        self.colors
            .get(index)
            .copied()
            .ok_or(EditorError::PaletteIndex {
                index,
                len: self.colors.len(),
            })
    }

    /// Recolor one square
    ///
    /// # Errors
    ///
    /// Returns `PaletteIndex` if the square does not exist
    pub fn set(&mut self, index: usize, color: Color) -> Result<()> {
        let len = self.colors.len();
        let square = self
            .colors
            .get_mut(index)
            .ok_or(EditorError::PaletteIndex { index, len })?;
        *square = color;
        Ok(())
    }

    /// Append a square
    ///
    /// # Errors
    ///
    /// Returns `PaletteSize` if the palette is already full
    pub fn push(&mut self, color: Color) -> Result<()> {
        validate_len(self.colors.len() + 1)?;
        self.colors.push(color);
        Ok(())
    }

    /// Remove the last square
    ///
    /// # Errors
    ///
    /// Returns `PaletteSize` if only one square is left
    pub fn pop(&mut self) -> Result<Color> {
        validate_len(self.colors.len().saturating_sub(1))?;
        self.colors.pop().ok_or(EditorError::PaletteSize { requested: 0 })
    }

    /// Swap in a whole new set of colors
    ///
    /// # Errors
    ///
    /// Returns `PaletteSize` if the color count is outside the allowed range;
    /// the current colors are kept in that case
    pub fn replace(&mut self, colors: Vec<Color>) -> Result<()> {
        validate_len(colors.len())?;
        self.colors = colors;
        Ok(())
    }
}

impl TryFrom<Vec<Color>> for Palette {
    type Error = EditorError;

    fn try_from(colors: Vec<Color>) -> Result<Self> {
        Self::from_colors(colors)
    }
}

impl From<Palette> for Vec<Color> {
    fn from(palette: Palette) -> Self {
        palette.colors
    }
}
