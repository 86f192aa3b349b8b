//! Editor constants and runtime configuration defaults

use crate::raster::Color;

// Grid bounds
/// Smallest allowed grid width or height
pub const MIN_DIMENSION: usize = 2;
/// Largest allowed grid width or height
pub const MAX_DIMENSION: usize = 32;

/// Grid width of a fresh session
pub const DEFAULT_WIDTH: usize = 10;
/// Grid height of a fresh session
pub const DEFAULT_HEIGHT: usize = 10;

/// Color of new cells (session start, resize padding)
pub const DEFAULT_FILL: Color = Color::WHITE;
/// Active drawing color of a fresh session
pub const DEFAULT_DRAW_COLOR: Color = Color::BLACK;

// Palette layout
/// Number of palette squares per display row
pub const PALETTE_WIDTH: usize = 3;
/// Smallest allowed palette length
pub const MIN_PALETTE_LEN: usize = 1;
/// Largest allowed palette length
pub const MAX_PALETTE_LEN: usize = 30;
/// Palette length of a fresh session
pub const DEFAULT_PALETTE_LEN: usize = 9;

// Display scale handed to the renderer
/// Smallest on-screen size of one cell in pixels
pub const MIN_PIXEL_SIZE: u32 = 4;
/// Largest on-screen size of one cell in pixels
pub const MAX_PIXEL_SIZE: u32 = 64;
/// On-screen cell size of a fresh session
pub const DEFAULT_PIXEL_SIZE: u32 = 45;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_result";
/// Extension of edit scripts and art documents
pub const SCRIPT_EXTENSION: &str = "json";

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
