/// Command-line parsing and batch file processing
pub mod cli;
/// Walk constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// Reference image loading and preview rendering
pub mod image;
/// Batch progress display
pub mod progress;
/// Debounced regeneration triggers for hosts
pub mod trigger;
/// Debug path and placement-order animation
pub mod visualization;
