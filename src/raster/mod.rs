//! Raster model: cell colors and the bounded pixel grid

/// Opaque colors and the transparent sentinel
pub mod color;
/// Validated fixed-size grid of cell colors
pub mod grid;

pub use color::Color;
pub use grid::Grid;
