//! Core generation pipeline from seed to colored triangle mesh
//!
//! Stages run in a fixed order against one shared draw cursor: seed
//! normalization, lattice generation, palette derivation, then cell
//! triangulation. Reordering any stage changes every later draw and with it
//! the output, so the sequence here is part of the determinism contract.

/// Pattern engine orchestrating the full pipeline
pub mod engine;
/// Jittered point lattice generation
pub mod grid;
/// Cell triangulation and color assignment
pub mod mesh;
/// Palette derivation from emotion profiles
pub mod palette;
/// Seed normalization for numeric and text seeds
pub mod seed;

pub use engine::{Pattern, PatternConfig, PatternEngine};
pub use seed::Seed;
