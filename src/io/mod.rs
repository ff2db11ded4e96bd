//! Input/output operations, CLI, and error handling

/// Command-line interface for batch pattern generation
pub mod cli;
/// Generation constants and runtime configuration defaults
pub mod configuration;
/// Error types for generation and export operations
pub mod error;
/// Progress display for batch generation
pub mod progress;
/// PNG rasterization of triangle meshes
pub mod raster;
/// SVG serialization and data URI encoding
pub mod svg;
