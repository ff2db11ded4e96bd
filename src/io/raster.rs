//! PNG rasterization of triangle meshes
//!
//! Scan-fills triangles over a transparent background in emission order, the
//! same paint order the SVG form uses, so raster and vector output agree on
//! seam colors. Pixel centers on a triangle edge belong to every triangle
//! touching that edge; the last one painted wins.

use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::io::error::{PatternError, Result};
use crate::math::geometry::point_in_triangle;
use crate::pattern::engine::Pattern;

/// Rasterize a pattern into an RGBA buffer of the canvas size
///
/// The buffer spans `ceil(width) × ceil(height)` pixels; dimensions are
/// already validated positive at generation time.
pub fn rasterize(pattern: &Pattern) -> RgbaImage {
    let width = pattern.width().ceil() as u32;
    let height = pattern.height().ceil() as u32;
    let mut img = ImageBuffer::from_pixel(width, height, Rgba([0, 0, 0, 0]));

    for triangle in pattern.triangles() {
        let [a, b, c] = triangle.vertices;
        let pixel = Rgba(triangle.color.to_rgba());

        let min_x = a.x.min(b.x).min(c.x).floor().max(0.0) as u32;
        let min_y = a.y.min(b.y).min(c.y).floor().max(0.0) as u32;
        let max_x = a.x.max(b.x).max(c.x).ceil().min(f64::from(width)) as u32;
        let max_y = a.y.max(b.y).max(c.y).ceil().min(f64::from(height)) as u32;

        for y in min_y..max_y {
            for x in min_x..max_x {
                let center = [f64::from(x) + 0.5, f64::from(y) + 0.5];
                if point_in_triangle(center, [a.x, a.y], [b.x, b.y], [c.x, c.y]) {
                    img.put_pixel(x, y, pixel);
                }
            }
        }
    }

    img
}

/// Export a pattern as a PNG image
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the image
/// cannot be saved to the specified path.
pub fn export_pattern_as_png(pattern: &Pattern, output_path: &Path) -> Result<()> {
    let img = rasterize(pattern);

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| PatternError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    img.save(output_path).map_err(|e| PatternError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    })
}
