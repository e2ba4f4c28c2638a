//! Input/output operations and error handling

/// Command-line parsing and batch file processing
pub mod cli;
/// Constants and defaults
pub mod configuration;
/// Error type and helpers
pub mod error;
/// PNG import and preview export
pub mod image;
/// GeoJSON document writing
pub mod output;
/// Terminal progress display
pub mod progress;
