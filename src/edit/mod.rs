//! Edit operations applied to the raster model

/// Paint, erase, flood fill and color sampling
pub mod operations;
/// Connected-region discovery for flood fill
pub mod region;
/// Active tool selection
pub mod tools;

pub use operations::{erase_cell, flood_fill, paint_cell, pick_color};
pub use region::{FillRegion, fill_region};
pub use tools::{Tool, ToolState};
