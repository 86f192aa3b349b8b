//! Editing session tying the grid, history, palette and tools together

/// Session state and edit dispatch
pub mod editor;
/// Discrete input events
pub mod intent;
/// Color palette
pub mod palette;

pub use editor::{EditorSession, SessionConfig};
pub use intent::EditIntent;
pub use palette::Palette;
