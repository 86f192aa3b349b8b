//! Active tool selection

use serde::{Deserialize, Serialize};

/// Editing tool that decides what a click on the grid does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tool {
    /// Paint with the active color
    Draw,
    /// Reset cells to transparent
    Erase,
    /// Flood fill with the active color
    Fill,
    /// Sample a cell color into the active color
    Pick,
}

impl Tool {
    /// Tools that switch themselves off after one use
    pub const fn is_one_shot(self) -> bool {
        matches!(self, Self::Fill | Self::Pick)
    }
}

/// At most one active tool
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToolState {
    active: Option<Tool>,
}

impl ToolState {
    /// No tool active
    pub const fn new() -> Self {
        Self { active: None }
    }

    /// Currently active tool
    pub const fn active(&self) -> Option<Tool> {
        self.active
    }

    /// Check whether `tool` is the active tool
    pub fn is_active(&self, tool: Tool) -> bool {
        self.active == Some(tool)
    }

    /// Toggle `tool`: activates it (deactivating any other) or, if it is
    /// already active, switches it off. Returns the resulting active tool.
    pub fn select(&mut self, tool: Tool) -> Option<Tool> {
        self.active = if self.is_active(tool) {
            None
        } else {
            Some(tool)
        };
        self.active
    }

    /// Switch every tool off
    pub const fn deactivate(&mut self) {
        self.active = None;
    }

    /// Report the tool handling a click, switching one-shot tools off
    pub const fn consume(&mut self) -> Option<Tool> {
        let tool = self.active;
        if let Some(active) = tool {
            if active.is_one_shot() {
                self.active = None;
            }
        }
        tool
    }
}
