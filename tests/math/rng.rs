//! Tests for the seeded sine-based draw sequence

#[cfg(test)]
mod tests {
    use polymood::math::rng::SineRng;

    // Tests that identical seeds replay the identical draw sequence
    // Verified by perturbing one seed by f64::EPSILON
    #[test]
    fn test_same_seed_same_sequence() {
        let mut first = SineRng::new(0.5);
        let mut second = SineRng::new(0.5);

        for _ in 0..100 {
            assert!((first.draw() - second.draw()).abs() < f64::EPSILON);
        }
    }

    // Tests that every draw lands in the half-open unit interval
    // Verified with seeds whose sine values go negative
    #[test]
    fn test_draws_stay_in_unit_interval() {
        for seed in &[0.0, 0.123, 0.5, 0.999, 42.0, -3.0] {
            let mut rng = SineRng::new(*seed);
            for _ in 0..1_000 {
                let value = rng.draw();
                assert!((0.0..1.0).contains(&value), "draw {value} out of range");
            }
        }
    }

    // Tests the documented first draws for seed 0.5 (cursor 500)
    // Reference values computed from frac(sin(500 + n) * 10000)
    #[test]
    fn test_reference_sequence_for_seed_half() {
        let mut rng = SineRng::new(0.5);
        let expected = [
            0.281_946_775_238_793_63,
            0.282_964_280_340_820_55,
            0.798_869_779_028_791_5,
        ];

        for value in &expected {
            assert!((rng.draw() - value).abs() < 1e-9);
        }
    }

    // Tests that the cursor starts at seed * 1000 and advances by one per draw
    // Verified by drawing twice and re-checking
    #[test]
    fn test_cursor_advances_per_draw() {
        let mut rng = SineRng::new(0.5);
        assert!((rng.cursor() - 500.0).abs() < f64::EPSILON);

        let _ = rng.draw();
        assert!((rng.cursor() - 501.0).abs() < f64::EPSILON);

        let _ = rng.draw();
        assert!((rng.cursor() - 502.0).abs() < f64::EPSILON);
    }

    // Tests that nearby seeds diverge immediately
    // Verified against the first draw only
    #[test]
    fn test_different_seeds_diverge() {
        let mut first = SineRng::new(0.5);
        let mut second = SineRng::new(0.6);

        assert!((first.draw() - second.draw()).abs() > f64::EPSILON);
    }
}
