//! Pixel-art grid editing engine
//!
//! A bounded grid of cell colors (2x2 up to 32x32) with paint, erase,
//! 4-connected flood fill and resize edits, and snapshot-based undo/redo.
//! Everything is synchronous and owned by a single editing session.

#![forbid(unsafe_code)]

/// Edit operations: paint, erase, flood fill, color picking and tools
pub mod edit;
/// Undo/redo history over grid snapshots
pub mod history;
/// Input/output: documents, scripts, CLI, configuration and errors
pub mod io;
/// Raster model: colors and the pixel grid
pub mod raster;
/// Editing session combining grid, history, palette and tools
pub mod session;

pub use io::error::{EditorError, Result};
pub use raster::{Color, Grid};
pub use session::{EditIntent, EditorSession, SessionConfig};
