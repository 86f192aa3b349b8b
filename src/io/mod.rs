/// Command-line interface and batch replay
pub mod cli;
/// Editor constants and defaults
pub mod configuration;
/// Serializable art document
pub mod document;
/// Error types
pub mod error;
/// Progress display for batch replay
pub mod progress;
/// Recorded edit scripts
pub mod script;
