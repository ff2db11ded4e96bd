//! Pattern engine orchestrating the full generation pipeline
//!
//! A generation call owns a private draw cursor seeded from the normalized
//! seed, so concurrent calls never share state. The stages consume draws in
//! a fixed order: lattice points, then palette colors, then triangle colors.

use crate::color::emotion::Emotion;
use crate::io::configuration::{CELL_SIZE, JITTER_VARIANCE, STROKE_WIDTH};
use crate::io::error::{Result, invalid_parameter};
use crate::io::svg;
use crate::math::rng::SineRng;
use crate::pattern::grid::PointGrid;
use crate::pattern::mesh::{ColoredTriangle, triangulate};
use crate::pattern::palette::Palette;
use crate::pattern::seed::Seed;

/// Geometry parameters controlling lattice density and rendering
#[derive(Clone, Copy, Debug)]
pub struct PatternConfig {
    /// Size of one virtual grid cell in canvas units
    pub cell_size: f64,
    /// Fraction of the cell size spanned by point jitter
    pub jitter_variance: f64,
    /// Outline width applied to every triangle
    pub stroke_width: f64,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            cell_size: CELL_SIZE,
            jitter_variance: JITTER_VARIANCE,
            stroke_width: STROKE_WIDTH,
        }
    }
}

/// Deterministic generator mapping `(width, height, seed, emotion)` to a
/// triangulated pattern
#[derive(Clone, Copy, Debug, Default)]
pub struct PatternEngine {
    config: PatternConfig,
}

impl PatternEngine {
    /// Create an engine with explicit geometry parameters
    pub const fn new(config: PatternConfig) -> Self {
        Self { config }
    }

    /// Geometry parameters in effect
    pub const fn config(&self) -> &PatternConfig {
        &self.config
    }

    /// Generate the pattern for one seed and emotion
    ///
    /// # Errors
    ///
    /// Returns an error if `width` or `height` is not a finite positive
    /// number, or if triangulation references a lattice point outside the
    /// generated grid.
    pub fn generate(
        &self,
        width: f64,
        height: f64,
        seed: &Seed,
        emotion: Emotion,
    ) -> Result<Pattern> {
        validate_dimension("width", width)?;
        validate_dimension("height", height)?;

        let mut rng = SineRng::new(seed.normalize());
        let grid = PointGrid::generate(
            width,
            height,
            self.config.cell_size,
            self.config.jitter_variance,
            &mut rng,
        );
        let palette = Palette::derive(emotion, &mut rng);
        let triangles = triangulate(&grid, &palette, &mut rng)?;

        Ok(Pattern {
            width,
            height,
            stroke_width: self.config.stroke_width,
            palette,
            triangles,
        })
    }
}

/// A generated mesh ready for serialization
///
/// Holds the derived palette and the triangles in emission order; both are
/// transient per-call results with no state shared across generations.
#[derive(Debug, Clone)]
pub struct Pattern {
    width: f64,
    height: f64,
    stroke_width: f64,
    palette: Palette,
    triangles: Vec<ColoredTriangle>,
}

impl Pattern {
    /// Canvas width in canvas units
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// Canvas height in canvas units
    pub const fn height(&self) -> f64 {
        self.height
    }

    /// Outline width applied to every triangle
    pub const fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    /// Palette derived for this generation
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Triangles in emission (and paint) order
    pub fn triangles(&self) -> &[ColoredTriangle] {
        &self.triangles
    }

    /// Number of triangles in the mesh
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Serialize to a standalone SVG document
    pub fn to_svg(&self) -> String {
        svg::render_document(self)
    }

    /// Serialize to a base64 `data:image/svg+xml` URI
    pub fn to_data_uri(&self) -> String {
        svg::encode_data_uri(&self.to_svg())
    }
}

/// Generate a pattern and return it as a base64 data URI
///
/// Convenience entry point over [`PatternEngine`] with default geometry.
/// Unrecognized emotion keys silently fall back to the default profile.
///
/// # Errors
///
/// Returns an error if `width` or `height` is not a finite positive number.
pub fn generate_pattern(
    width: f64,
    height: f64,
    seed: impl Into<Seed>,
    emotion: &str,
) -> Result<String> {
    let engine = PatternEngine::default();
    let pattern = engine.generate(
        width,
        height,
        &seed.into(),
        Emotion::from_key_or_default(emotion),
    )?;
    Ok(pattern.to_data_uri())
}

fn validate_dimension(parameter: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid_parameter(
            parameter,
            &value,
            &"must be a finite positive number",
        ))
    }
}
