//! Deterministic low-poly pattern generation driven by seeded emotion palettes
//!
//! The engine maps a seed and an emotion key to a reproducible triangulated
//! mesh: a jittered point lattice is split into twin triangles per cell, each
//! colored from a five-entry palette derived from the emotion's profile. The
//! same inputs always serialize to byte-identical SVG output.

#![forbid(unsafe_code)]

/// Color types, HSL conversion, and emotion palette profiles
pub mod color;
/// Input/output operations, CLI, and error handling
pub mod io;
/// Mathematical utilities for seeded randomness and triangle geometry
pub mod math;
/// Core generation pipeline from seed to triangle mesh
pub mod pattern;

pub use io::error::{PatternError, Result};
pub use pattern::engine::generate_pattern;
