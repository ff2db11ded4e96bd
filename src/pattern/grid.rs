//! Jittered point lattice generation
//!
//! The canvas is covered by a virtual grid of fixed-size cells. Every lattice
//! point is displaced from its cell corner by a bounded pseudo-random jitter,
//! and the lattice carries one extra ring of points so triangles spill past
//! every canvas edge. Lattice index `(0, 0)` is the padding point one cell
//! above and left of the canvas origin; the point at lattice index
//! `(row, col)` therefore serves as the top-left corner of cell `(row, col)`.

use ndarray::Array2;

use crate::math::rng::SineRng;

/// A jittered 2D lattice coordinate
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GridPoint {
    /// Horizontal position in canvas units
    pub x: f64,
    /// Vertical position in canvas units
    pub y: f64,
}

/// Point lattice covering the canvas plus one cell of padding on every side
///
/// For a `rows × cols` cell grid the lattice holds `(rows + 2) × (cols + 2)`
/// points, generated row-major with two draws per point (x jitter before
/// y jitter). The trailing lattice ring is generated, and consumes draws,
/// even though no triangle references it.
#[derive(Debug, Clone)]
pub struct PointGrid {
    points: Array2<GridPoint>,
    rows: usize,
    cols: usize,
}

impl PointGrid {
    /// Generate the lattice for a canvas of `width × height`
    ///
    /// Cell counts derive from the canvas size as `ceil(extent / cell) + 1`.
    /// Each point lands at its cell corner plus a jitter of at most half of
    /// `cell_size * variance` on each axis.
    pub fn generate(
        width: f64,
        height: f64,
        cell_size: f64,
        variance: f64,
        rng: &mut SineRng,
    ) -> Self {
        let cols = (width / cell_size).ceil() as usize + 1;
        let rows = (height / cell_size).ceil() as usize + 1;
        let jitter_span = cell_size * variance;

        let mut points = Array2::from_elem((rows + 2, cols + 2), GridPoint::default());
        for ((row, col), point) in points.indexed_iter_mut() {
            let base_x = (col as f64 - 1.0) * cell_size;
            let base_y = (row as f64 - 1.0) * cell_size;
            let x = (rng.draw() - 0.5).mul_add(jitter_span, base_x);
            let y = (rng.draw() - 0.5).mul_add(jitter_span, base_y);
            *point = GridPoint { x, y };
        }

        Self { points, rows, cols }
    }

    /// Number of cell rows covering the canvas
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of cell columns covering the canvas
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Lattice dimensions including the padding ring
    pub fn lattice_dimensions(&self) -> (usize, usize) {
        self.points.dim()
    }

    /// Lattice point at `(row, col)`, the top-left corner of that cell
    ///
    /// Valid cell corners span lattice rows `0..=rows` and columns
    /// `0..=cols`; indices beyond the lattice return `None`.
    pub fn corner(&self, row: usize, col: usize) -> Option<GridPoint> {
        self.points.get([row, col]).copied()
    }
}
