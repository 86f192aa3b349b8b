//! Serializable art document exchanged with storage clients
//!
//! The JSON shape is `{"width": w, "height": h, "pixels": [...]}` with pixels
//! in row-major order, top-to-bottom and left-to-right.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::io::error::{EditorError, Result};
use crate::raster::{Color, Grid};

/// Flattened grid as persisted by storage clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtDocument {
    /// Grid width
    pub width: usize,
    /// Grid height
    pub height: usize,
    /// Row-major cell colors, `width * height` entries
    pub pixels: Vec<Color>,
}

impl ArtDocument {
    /// Flatten a grid
    pub fn from_grid(grid: &Grid) -> Self {
        Self {
            width: grid.width(),
            height: grid.height(),
            pixels: grid.to_cells(),
        }
    }

    /// Rebuild the grid this document describes
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions are out of range or the pixel count
    /// does not match them
    pub fn to_grid(&self) -> Result<Grid> {
        Grid::from_cells(self.width, self.height, self.pixels.clone())
    }

    /// Load a document from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid document
    pub fn read_from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| EditorError::FileSystem {
            path: path.to_path_buf(),
            operation: "read document",
            source: e,
        })?;

        let document: Self = serde_json::from_str(&text).map_err(|e| EditorError::Script {
            path: path.to_path_buf(),
            source: e,
        })?;

        // Catch size mismatches at load time rather than on first edit
        document.to_grid()?;
        Ok(document)
    }

    /// Write the document as JSON, creating parent directories as needed
    ///
    /// # Errors
    ///
    /// Returns an error if encoding fails, the parent directory cannot be
    /// created or the file cannot be written
    pub fn write_to_path(&self, path: &Path, pretty: bool) -> Result<()> {
        let encoded = if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
        .map_err(|e| EditorError::Script {
            path: path.to_path_buf(),
            source: e,
        })?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| EditorError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        fs::write(path, encoded).map_err(|e| EditorError::FileSystem {
            path: path.to_path_buf(),
            operation: "write document",
            source: e,
        })
    }
}

impl From<&Grid> for ArtDocument {
    fn from(grid: &Grid) -> Self {
        Self::from_grid(grid)
    }
}
