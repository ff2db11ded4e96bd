//! Cell triangulation and color assignment
//!
//! Every grid cell splits along its top-right to bottom-left diagonal into
//! two triangles. Cells are visited row-major and within each cell the
//! upper-left triangle is emitted, and consumes its color draw, before the
//! lower-right one. Emission order doubles as paint order in the output.

use crate::color::hsl::Hsl;
use crate::io::error::{Result, computation_error};
use crate::math::rng::SineRng;
use crate::pattern::grid::{GridPoint, PointGrid};
use crate::pattern::palette::Palette;

/// Three lattice corners plus an assigned palette color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColoredTriangle {
    /// Corner coordinates in emission order
    pub vertices: [GridPoint; 3],
    /// Fill and stroke color
    pub color: Hsl,
}

/// Split every cell into two colored triangles
///
/// Produces exactly `2 * rows * cols` triangles. Triangle A spans top-left,
/// top-right, bottom-left; triangle B spans top-right, bottom-right,
/// bottom-left.
///
/// # Errors
///
/// Returns a computation error if a cell references a lattice point outside
/// the generated grid, which would indicate a lattice sizing bug.
pub fn triangulate(
    grid: &PointGrid,
    palette: &Palette,
    rng: &mut SineRng,
) -> Result<Vec<ColoredTriangle>> {
    let mut triangles = Vec::with_capacity(2 * grid.rows() * grid.cols());

    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let top_left = corner(grid, row, col)?;
            let top_right = corner(grid, row, col + 1)?;
            let bottom_left = corner(grid, row + 1, col)?;
            let bottom_right = corner(grid, row + 1, col + 1)?;

            triangles.push(ColoredTriangle {
                vertices: [top_left, top_right, bottom_left],
                color: palette.pick(rng.draw()),
            });
            triangles.push(ColoredTriangle {
                vertices: [top_right, bottom_right, bottom_left],
                color: palette.pick(rng.draw()),
            });
        }
    }

    Ok(triangles)
}

fn corner(grid: &PointGrid, row: usize, col: usize) -> Result<GridPoint> {
    grid.corner(row, col).ok_or_else(|| {
        computation_error(
            "triangulation",
            &format!("lattice point ({row}, {col}) out of bounds"),
        )
    })
}
