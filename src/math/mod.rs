//! Mathematical utilities for the generation pipeline

/// Point-in-triangle containment tests
pub mod geometry;
/// Seeded sine-based pseudo-random draw sequence
pub mod rng;
