//! Undo/redo history of raster edits

/// Immutable grid snapshots
pub mod snapshot;
/// Undo and redo stacks
pub mod stack;

pub use snapshot::Snapshot;
pub use stack::History;
