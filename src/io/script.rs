//! Edit scripts: an initial grid plus a recorded stream of edit intents

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::io::configuration::{DEFAULT_FILL, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::io::error::{EditorError, Result};
use crate::raster::Color;
use crate::session::{EditIntent, EditorSession, SessionConfig};

const fn default_width() -> usize {
    DEFAULT_WIDTH
}

const fn default_height() -> usize {
    DEFAULT_HEIGHT
}

const fn default_fill() -> Color {
    DEFAULT_FILL
}

/// Recorded editing session
///
/// JSON form: `{"width": 4, "height": 4, "fill": "#ffffff", "intents": [...]}`;
/// every field is optional, unknown fields are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EditScript {
    /// Initial grid width
    #[serde(default = "default_width")]
    pub width: usize,
    /// Initial grid height
    #[serde(default = "default_height")]
    pub height: usize,
    /// Initial cell color and resize padding
    #[serde(default = "default_fill")]
    pub fill: Color,
    /// Intents in the order they were issued
    #[serde(default)]
    pub intents: Vec<EditIntent>,
}

impl Default for EditScript {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            fill: DEFAULT_FILL,
            intents: Vec::new(),
        }
    }
}

impl EditScript {
    /// Load a script from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or decoded
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| EditorError::FileSystem {
            path: path.to_path_buf(),
            operation: "read script",
            source: e,
        })?;

        serde_json::from_str(&text).map_err(|e| EditorError::Script {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Session settings for replaying this script
    pub fn session_config(&self, history_limit: Option<usize>) -> SessionConfig {
        SessionConfig {
            width: self.width,
            height: self.height,
            fill: self.fill,
            history_limit,
            ..SessionConfig::default()
        }
    }

    /// Replay every intent in a fresh session
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be created or an intent fails;
    /// the failing intent's position is reported as `Replay { step }`
    pub fn replay(&self, config: &SessionConfig) -> Result<EditorSession> {
        self.replay_with(config, |_| {})
    }

    /// Replay every intent, calling `on_step` with the count of applied intents
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be created or an intent fails
    pub fn replay_with<F>(&self, config: &SessionConfig, mut on_step: F) -> Result<EditorSession>
    where
        F: FnMut(usize),
    {
        let mut session = EditorSession::new(config)?;

        for (step, intent) in self.intents.iter().enumerate() {
            session
                .apply(intent)
                .map_err(|e| EditorError::Replay {
                    step,
                    source: Box::new(e),
                })?;
            on_step(step + 1);
        }
        session.end_stroke();

        debug!(
            "replayed {} intents ({} grid edits), {} undo entries",
            self.intents.len(),
            self.intents.iter().filter(|i| i.is_grid_edit()).count(),
            session.history().undo_len()
        );
        Ok(session)
    }
}
