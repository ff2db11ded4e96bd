//! Palette derivation from emotion profiles
//!
//! One palette of exactly five colors is derived per generation call. Each
//! color consumes three draws in hue, saturation, lightness order; the draw
//! count is fixed regardless of emotion so that downstream stages always see
//! the same cursor position.

use crate::color::emotion::Emotion;
use crate::color::hsl::Hsl;
use crate::math::rng::SineRng;

/// Number of colors derived per palette
pub const PALETTE_SIZE: usize = 5;

/// Ordered set of derived colors for one generation call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    colors: [Hsl; PALETTE_SIZE],
}

impl Palette {
    /// Derive the palette for an emotion from the shared draw cursor
    ///
    /// Hue draws spread around the profile's base hue; saturation and
    /// lightness draws extend upward from their base by the profile range.
    pub fn derive(emotion: Emotion, rng: &mut SineRng) -> Self {
        let profile = emotion.profile();
        let mut colors = [Hsl::default(); PALETTE_SIZE];

        for color in &mut colors {
            let hue = (rng.draw() - 0.5).mul_add(profile.hue_range, profile.base_hue);
            let saturation = rng
                .draw()
                .mul_add(profile.saturation_range, profile.saturation_base);
            let lightness = rng
                .draw()
                .mul_add(profile.lightness_range, profile.lightness_base);
            *color = Hsl::new(hue, saturation, lightness);
        }

        Self { colors }
    }

    /// Derived colors in derivation order
    pub const fn colors(&self) -> &[Hsl; PALETTE_SIZE] {
        &self.colors
    }

    /// Select a color from a draw in `[0, 1)`
    ///
    /// The draw maps to an index via `floor(draw * 5)`; a hypothetical draw
    /// of exactly 1 clamps to the last entry.
    pub fn pick(&self, draw: f64) -> Hsl {
        let index = ((draw * PALETTE_SIZE as f64).floor() as usize).min(PALETTE_SIZE - 1);
        self.colors.get(index).copied().unwrap_or_default()
    }
}
