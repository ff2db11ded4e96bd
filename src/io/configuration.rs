//! Generation constants and runtime configuration defaults

// Geometry constants; changing any of these changes every generated pattern
/// Size of one virtual grid cell in canvas units
pub const CELL_SIZE: f64 = 60.0;

/// Fraction of the cell size spanned by point jitter
pub const JITTER_VARIANCE: f64 = 0.75;

/// Outline width applied to triangle polygons
pub const STROKE_WIDTH: f64 = 0.5;

// Default values for configurable parameters
/// Default canvas width in pixels
pub const DEFAULT_WIDTH: f64 = 800.0;

/// Default canvas height in pixels
pub const DEFAULT_HEIGHT: f64 = 600.0;

/// Default emotion key for palette selection
pub const DEFAULT_EMOTION_KEY: &str = "calm";

// Output settings
/// Extension for vector output files
pub const SVG_EXTENSION: &str = "svg";

/// Extension for raster output files
pub const PNG_EXTENSION: &str = "png";

/// Extension for data URI output files
pub const URI_EXTENSION: &str = "uri";
