/// Command-line parsing and batch file processing
pub mod cli;
/// Naming constants and runtime defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// PNG rendering of covers
pub mod image;
/// Progress display for batch runs
pub mod progress;
/// Plain-text collider listings
pub mod report;
/// Tilemap loading from PNG and text files
pub mod tilemap;
