//! Color representation and emotion palette profiles
//!
//! This module contains color-related functionality including:
//! - HSL color values and their CSS/RGBA renderings
//! - The fixed emotion table mapping keys to palette profiles

/// Emotion keys, palette profiles, and display metadata
pub mod emotion;
/// HSL color type with CSS formatting and RGBA conversion
pub mod hsl;

pub use emotion::Emotion;
pub use hsl::Hsl;
