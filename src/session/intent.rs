//! Discrete user edit intents fed to an editing session

use serde::{Deserialize, Serialize};

use crate::edit::Tool;
use crate::raster::Color;

/// One discrete input event for an editing session
///
/// Serialized with an `op` tag, e.g. `{"op": "fill", "index": 4, "color": "#ff0000"}`.
/// Intents carrying an optional color fall back to the session's active color
/// (or its fill color for `resize`). Unknown keys are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case", deny_unknown_fields)]
pub enum EditIntent {
    /// Paint one cell
    Paint {
        /// Flat cell index
        index: usize,
        /// Color to use instead of the active color
        #[serde(default)]
        color: Option<Color>,
    },
    /// Erase one cell to transparent
    Erase {
        /// Flat cell index
        index: usize,
    },
    /// Flood fill starting at a cell
    Fill {
        /// Flat index of the start cell
        index: usize,
        /// Color to use instead of the active color
        #[serde(default)]
        color: Option<Color>,
    },
    /// Change the grid dimensions
    Resize {
        /// New width
        width: usize,
        /// New height
        height: usize,
        /// Padding color to use instead of the session fill color
        #[serde(default)]
        fill: Option<Color>,
    },
    /// Step back one edit
    Undo,
    /// Step forward one undone edit
    Redo,
    /// Sample a cell into the active color
    Pick {
        /// Flat cell index
        index: usize,
    },
    /// Set the active color
    SelectColor {
        /// New active color
        color: Color,
    },
    /// Toggle a tool
    SelectTool {
        /// Tool to toggle
        tool: Tool,
    },
    /// Switch every tool off
    DeselectTool,
    /// Click a cell with whatever tool is active
    Click {
        /// Flat cell index
        index: usize,
    },
    /// Press on a cell, starting a drag stroke
    StrokeBegin {
        /// Flat cell index
        index: usize,
    },
    /// Drag over a cell during a stroke
    StrokeMove {
        /// Flat cell index
        index: usize,
    },
    /// Release, ending the stroke
    StrokeEnd,
}

impl EditIntent {
    /// Check if this intent can change the grid
    pub const fn is_grid_edit(&self) -> bool {
        matches!(
            self,
            Self::Paint { .. }
                | Self::Erase { .. }
                | Self::Fill { .. }
                | Self::Resize { .. }
                | Self::Undo
                | Self::Redo
                | Self::Click { .. }
                | Self::StrokeBegin { .. }
                | Self::StrokeMove { .. }
        )
    }
}
