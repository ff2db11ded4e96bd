//! Emotion keys and their palette profiles
//!
//! Each emotion maps to a fixed profile describing where derived palette
//! colors may land: a base hue with a spread, and base/range pairs for
//! saturation and lightness. The table is immutable; unknown keys fall back
//! to the calm profile rather than erroring so that callers holding stale
//! or user-typed keys still get a rendition.

/// Palette profile bounds for one emotion
///
/// Hue draws center on `base_hue` and spread `hue_range` degrees across it;
/// saturation and lightness draws start at their base and extend upward by
/// their range, all in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmotionProfile {
    /// Center hue in degrees
    pub base_hue: f64,
    /// Total hue spread around the center
    pub hue_range: f64,
    /// Minimum saturation percentage
    pub saturation_base: f64,
    /// Saturation spread above the base
    pub saturation_range: f64,
    /// Minimum lightness percentage
    pub lightness_base: f64,
    /// Lightness spread above the base
    pub lightness_range: f64,
}

/// Emotion selecting a color palette profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Emotion {
    /// Reds around hue 0
    Passion,
    /// Blues around hue 200, the designated default
    Calm,
    /// Yellows and oranges around hue 45
    Joy,
    /// Purples around hue 270
    Mystery,
    /// Greens around hue 120
    Nature,
    /// Teals and cyans around hue 180
    Serenity,
}

/// Profile substituted for unrecognized emotion keys
pub const DEFAULT_EMOTION: Emotion = Emotion::Calm;

impl Emotion {
    /// All emotions in declaration order
    pub const ALL: [Self; 6] = [
        Self::Passion,
        Self::Calm,
        Self::Joy,
        Self::Mystery,
        Self::Nature,
        Self::Serenity,
    ];

    /// Lookup key used in stored records and CLI arguments
    pub const fn key(self) -> &'static str {
        match self {
            Self::Passion => "passion",
            Self::Calm => "calm",
            Self::Joy => "joy",
            Self::Mystery => "mystery",
            Self::Nature => "nature",
            Self::Serenity => "serenity",
        }
    }

    /// Human-readable label for selection UIs
    pub const fn label(self) -> &'static str {
        match self {
            Self::Passion => "Passion",
            Self::Calm => "Calm",
            Self::Joy => "Joy",
            Self::Mystery => "Mystery",
            Self::Nature => "Nature",
            Self::Serenity => "Serenity",
        }
    }

    /// Decorative glyph shown next to the label
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Passion => "❤️",
            Self::Calm => "🌊",
            Self::Joy => "🌟",
            Self::Mystery => "🔮",
            Self::Nature => "🌿",
            Self::Serenity => "☮️",
        }
    }

    /// Representative accent color, the first swatch entry
    pub const fn accent(self) -> &'static str {
        match self {
            Self::Passion => "#FF1744",
            Self::Calm => "#0084D1",
            Self::Joy => "#FFD600",
            Self::Mystery => "#7C4DFF",
            Self::Nature => "#00C853",
            Self::Serenity => "#00BCD4",
        }
    }

    /// Fixed hex swatch used by UI chips, independent of derived palettes
    pub const fn swatch(self) -> [&'static str; 5] {
        match self {
            Self::Passion => ["#FF1744", "#D50000", "#FF5252", "#FF8A80", "#C62828"],
            Self::Calm => ["#0084D1", "#2196F3", "#64B5F6", "#1565C0", "#42A5F5"],
            Self::Joy => ["#FFD600", "#FF9800", "#FFC107", "#FFAB00", "#FF6F00"],
            Self::Mystery => ["#7C4DFF", "#651FFF", "#AA00FF", "#9C27B0", "#6200EA"],
            Self::Nature => ["#00C853", "#4CAF50", "#8BC34A", "#2E7D32", "#66BB6A"],
            Self::Serenity => ["#00BCD4", "#26C6DA", "#00ACC1", "#4DD0E1", "#0097A7"],
        }
    }

    /// Palette profile bounds for this emotion
    pub const fn profile(self) -> EmotionProfile {
        match self {
            Self::Passion => EmotionProfile {
                base_hue: 0.0,
                hue_range: 30.0,
                saturation_base: 60.0,
                saturation_range: 30.0,
                lightness_base: 40.0,
                lightness_range: 25.0,
            },
            Self::Calm => EmotionProfile {
                base_hue: 200.0,
                hue_range: 40.0,
                saturation_base: 50.0,
                saturation_range: 40.0,
                lightness_base: 45.0,
                lightness_range: 30.0,
            },
            Self::Joy => EmotionProfile {
                base_hue: 45.0,
                hue_range: 35.0,
                saturation_base: 70.0,
                saturation_range: 25.0,
                lightness_base: 50.0,
                lightness_range: 20.0,
            },
            Self::Mystery => EmotionProfile {
                base_hue: 270.0,
                hue_range: 40.0,
                saturation_base: 55.0,
                saturation_range: 35.0,
                lightness_base: 35.0,
                lightness_range: 25.0,
            },
            Self::Nature => EmotionProfile {
                base_hue: 120.0,
                hue_range: 45.0,
                saturation_base: 50.0,
                saturation_range: 35.0,
                lightness_base: 40.0,
                lightness_range: 25.0,
            },
            Self::Serenity => EmotionProfile {
                base_hue: 180.0,
                hue_range: 35.0,
                saturation_base: 45.0,
                saturation_range: 30.0,
                lightness_base: 45.0,
                lightness_range: 25.0,
            },
        }
    }

    /// Resolve a key case-insensitively
    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_ascii_lowercase().as_str() {
            "passion" => Some(Self::Passion),
            "calm" => Some(Self::Calm),
            "joy" => Some(Self::Joy),
            "mystery" => Some(Self::Mystery),
            "nature" => Some(Self::Nature),
            "serenity" => Some(Self::Serenity),
            _ => None,
        }
    }

    /// Resolve a key, substituting the default profile for unknown keys
    pub fn from_key_or_default(key: &str) -> Self {
        Self::from_key(key).unwrap_or(DEFAULT_EMOTION)
    }
}

impl std::fmt::Display for Emotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
