//! SVG serialization and data URI encoding
//!
//! Triangles serialize as filled and stroked polygons in emission order, so
//! later triangles paint over earlier ones along shared edges. The markup is
//! plain string templating; the data URI form base64-encodes the complete
//! document.

use std::fmt::Write as _;
use std::path::Path;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::io::error::{PatternError, Result};
use crate::pattern::engine::Pattern;

/// Prefix of every data URI produced by [`encode_data_uri`]
pub const DATA_URI_PREFIX: &str = "data:image/svg+xml;base64,";

/// Render a pattern as a standalone SVG document
pub fn render_document(pattern: &Pattern) -> String {
    let mut body = String::new();
    for triangle in pattern.triangles() {
        let [a, b, c] = triangle.vertices;
        let _ = write!(
            body,
            r#"<polygon points="{},{} {},{} {},{}" fill="{}" stroke="{}" stroke-width="{}"/>"#,
            a.x,
            a.y,
            b.x,
            b.y,
            c.x,
            c.y,
            triangle.color,
            triangle.color,
            pattern.stroke_width(),
        );
    }

    format!(
        r#"<svg width="{}" height="{}" xmlns="http://www.w3.org/2000/svg">{body}</svg>"#,
        pattern.width(),
        pattern.height(),
    )
}

/// Wrap SVG markup in a base64 `data:image/svg+xml` URI
pub fn encode_data_uri(markup: &str) -> String {
    format!("{DATA_URI_PREFIX}{}", STANDARD.encode(markup))
}

/// Write a pattern's SVG document to disk
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the file
/// cannot be written.
pub fn export_pattern_as_svg(pattern: &Pattern, output_path: &Path) -> Result<()> {
    write_output(output_path, pattern.to_svg().as_bytes(), "write svg")
}

/// Write a pattern's data URI form to disk
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the file
/// cannot be written.
pub fn export_pattern_as_data_uri(pattern: &Pattern, output_path: &Path) -> Result<()> {
    write_output(output_path, pattern.to_data_uri().as_bytes(), "write data uri")
}

fn write_output(output_path: &Path, bytes: &[u8], operation: &'static str) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| PatternError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    std::fs::write(output_path, bytes).map_err(|e| PatternError::FileSystem {
        path: output_path.to_path_buf(),
        operation,
        source: e,
    })
}
