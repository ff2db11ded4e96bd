//! Tests for cell triangulation and color assignment

#[cfg(test)]
mod tests {
    use polymood::color::emotion::Emotion;
    use polymood::math::rng::SineRng;
    use polymood::pattern::grid::PointGrid;
    use polymood::pattern::mesh::triangulate;
    use polymood::pattern::palette::Palette;

    fn build_mesh_inputs(seed: f64) -> (PointGrid, Palette, SineRng) {
        let mut rng = SineRng::new(seed);
        let grid = PointGrid::generate(100.0, 100.0, 60.0, 0.75, &mut rng);
        let palette = Palette::derive(Emotion::Calm, &mut rng);
        (grid, palette, rng)
    }

    // Tests the triangle count invariant
    // Two triangles per cell over a 3x3 cell grid
    #[test]
    fn test_triangle_count() {
        let (grid, palette, mut rng) = build_mesh_inputs(0.5);
        let triangles = triangulate(&grid, &palette, &mut rng).unwrap();

        assert_eq!(triangles.len(), 2 * grid.rows() * grid.cols());
        assert_eq!(triangles.len(), 18);
    }

    // Tests that the first cell's triangles reference its four corners
    // Triangle A spans TL/TR/BL, triangle B spans TR/BR/BL
    #[test]
    fn test_first_cell_corners() {
        let (grid, palette, mut rng) = build_mesh_inputs(0.5);
        let triangles = triangulate(&grid, &palette, &mut rng).unwrap();

        let top_left = grid.corner(0, 0).unwrap();
        let top_right = grid.corner(0, 1).unwrap();
        let bottom_left = grid.corner(1, 0).unwrap();
        let bottom_right = grid.corner(1, 1).unwrap();

        assert_eq!(triangles[0].vertices, [top_left, top_right, bottom_left]);
        assert_eq!(
            triangles[1].vertices,
            [top_right, bottom_right, bottom_left]
        );
    }

    // Tests that every assigned color comes from the derived palette
    // Verified against all five entries
    #[test]
    fn test_colors_come_from_palette() {
        let (grid, palette, mut rng) = build_mesh_inputs(0.123);
        let triangles = triangulate(&grid, &palette, &mut rng).unwrap();

        for triangle in &triangles {
            assert!(palette.colors().contains(&triangle.color));
        }
    }

    // Tests that triangulation consumes one draw per triangle
    // 18 triangles after 50 lattice and 15 palette draws
    #[test]
    fn test_draw_consumption() {
        let (grid, palette, mut rng) = build_mesh_inputs(0.5);
        let before = rng.cursor();
        let triangles = triangulate(&grid, &palette, &mut rng).unwrap();

        let consumed = rng.cursor() - before;
        assert!((consumed - triangles.len() as f64).abs() < f64::EPSILON);
    }

    // Tests that identical inputs emit identical meshes
    // Verified triangle by triangle
    #[test]
    fn test_deterministic_mesh() {
        let (first_grid, first_palette, mut first_rng) = build_mesh_inputs(0.42);
        let first = triangulate(&first_grid, &first_palette, &mut first_rng).unwrap();

        let (second_grid, second_palette, mut second_rng) = build_mesh_inputs(0.42);
        let second = triangulate(&second_grid, &second_palette, &mut second_rng).unwrap();

        assert_eq!(first, second);
    }
}
