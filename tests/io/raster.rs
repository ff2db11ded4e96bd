//! Tests for PNG rasterization of triangle meshes

#[cfg(test)]
mod tests {
    use polymood::color::emotion::Emotion;
    use polymood::io::raster::{export_pattern_as_png, rasterize};
    use polymood::pattern::engine::{Pattern, PatternEngine};
    use polymood::pattern::seed::Seed;

    fn sample_pattern() -> Pattern {
        PatternEngine::default()
            .generate(100.0, 100.0, &Seed::Value(0.5), Emotion::Nature)
            .unwrap()
    }

    // Tests that the buffer spans the canvas size
    // ceil of each requested extent
    #[test]
    fn test_buffer_dimensions() {
        let img = rasterize(&sample_pattern());
        assert_eq!(img.dimensions(), (100, 100));

        let wide = PatternEngine::default()
            .generate(120.5, 80.0, &Seed::Value(0.5), Emotion::Nature)
            .unwrap();
        assert_eq!(rasterize(&wide).dimensions(), (121, 80));
    }

    // Tests that painted pixels take their color from the derived palette
    // Unpainted pixels stay fully transparent
    #[test]
    fn test_pixels_use_palette_colors() {
        let pattern = sample_pattern();
        let palette_rgba: Vec<[u8; 4]> = pattern
            .palette()
            .colors()
            .iter()
            .map(|color| color.to_rgba())
            .collect();

        let img = rasterize(&pattern);
        let mut painted = 0_usize;

        for pixel in img.pixels() {
            if pixel.0[3] == 255 {
                painted += 1;
                assert!(palette_rgba.contains(&pixel.0));
            } else {
                assert_eq!(pixel.0, [0, 0, 0, 0]);
            }
        }

        // The mesh overshoots every canvas edge, so most pixels are painted
        assert!(painted > 100 * 100 / 2);
    }

    // Tests raster determinism
    // Identical patterns rasterize to identical buffers
    #[test]
    fn test_deterministic_raster() {
        let first = rasterize(&sample_pattern());
        let second = rasterize(&sample_pattern());
        assert_eq!(first.as_raw(), second.as_raw());
    }

    // Tests PNG export including parent directory creation
    // The written file must reopen with the buffer dimensions
    #[test]
    fn test_png_export() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("pattern.png");

        export_pattern_as_png(&sample_pattern(), &path).unwrap();

        let reopened = image::open(&path).unwrap();
        assert_eq!(reopened.width(), 100);
        assert_eq!(reopened.height(), 100);
    }
}
