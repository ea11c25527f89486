//! Tests for bounded pattern generation and mutually distant option sets

#[cfg(test)]
mod tests {
    use patternspot::GenerationError;
    use patternspot::algorithm::generator::{PatternGenerator, pattern_distance};
    use patternspot::io::configuration::GenerationConfig;
    use rand::{SeedableRng, rngs::StdRng};

    // Tests generated patterns respect the default live-cell bounds
    // Verified by widening the accepted range to 1..=8
    #[test]
    fn test_generate_pattern_within_default_bounds() {
        let generator = PatternGenerator::default();
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..500 {
            let pattern = generator.generate_pattern(&mut rng).unwrap();
            let live = pattern.live_count();
            assert!((2..=7).contains(&live), "live count {live} out of bounds");
        }
    }

    // Tests narrow bounds are honored exactly
    // Verified by checking only the lower bound in accepts
    #[test]
    fn test_generate_pattern_narrow_bounds() {
        let generator = PatternGenerator::with_live_bounds(4, 4).unwrap();
        let mut rng = StdRng::seed_from_u64(5);

        for _ in 0..100 {
            assert_eq!(generator.generate_pattern(&mut rng).unwrap().live_count(), 4);
        }
        assert_eq!(generator.live_bounds(), (4, 4));
    }

    // Tests bounds admitting uniform patterns are rejected
    // Verified by allowing max_live of nine
    #[test]
    fn test_invalid_live_bounds() {
        for (min_live, max_live) in [(0, 5), (2, 9), (6, 3)] {
            let result = PatternGenerator::with_live_bounds(min_live, max_live);
            assert!(
                matches!(result, Err(GenerationError::InvalidParameter { .. })),
                "bounds ({min_live}, {max_live}) should be rejected"
            );
        }
    }

    // Tests option sets keep the requested pairwise distance
    // Verified by comparing candidates only to the last accepted pattern
    #[test]
    fn test_distinct_set_pairwise_distance() {
        let generator = PatternGenerator::default();

        for seed in 0..25 {
            let mut rng = StdRng::seed_from_u64(seed);
            let set = generator.generate_distinct_set(4, 4, &mut rng).unwrap();

            assert_eq!(set.len(), 4);
            for (i, a) in set.iter().enumerate() {
                for b in set.iter().skip(i + 1) {
                    assert!(pattern_distance(a, b) >= 4, "seed {seed}: {a:?} too close to {b:?}");
                }
            }
        }
    }

    // Tests an impossible set fails instead of looping forever
    // Verified by removing the restart limit
    #[test]
    fn test_impossible_set_exhausts() {
        let generator = PatternGenerator::default();
        let mut rng = StdRng::seed_from_u64(1);

        let result = generator.generate_distinct_set(4, 9, &mut rng);

        assert!(matches!(
            result,
            Err(GenerationError::GenerationExhausted {
                stage: "distinct pattern set",
                ..
            })
        ));
    }

    // Tests distances beyond the pattern size are parameter errors
    // Verified by letting the retry loop handle them
    #[test]
    fn test_distance_above_cell_count() {
        let generator = PatternGenerator::default();
        let mut rng = StdRng::seed_from_u64(1);

        let result = generator.generate_distinct_set(2, 10, &mut rng);
        assert!(matches!(
            result,
            Err(GenerationError::InvalidParameter {
                parameter: "min_distance",
                ..
            })
        ));
    }

    // Tests an empty request returns an empty set
    // Verified by always drawing at least one candidate
    #[test]
    fn test_empty_set() {
        let generator = PatternGenerator::default();
        let mut rng = StdRng::seed_from_u64(1);

        assert!(generator.generate_distinct_set(0, 4, &mut rng).unwrap().is_empty());
    }

    // Tests generators built from configuration share its validation
    // Verified by skipping validation in from_config
    #[test]
    fn test_from_config() {
        let config = GenerationConfig {
            min_live: 3,
            max_live: 6,
            ..GenerationConfig::default()
        };
        let generator = PatternGenerator::from_config(&config).unwrap();
        assert_eq!(generator.live_bounds(), (3, 6));

        let invalid = GenerationConfig {
            candidate_budget: 0,
            ..GenerationConfig::default()
        };
        assert!(PatternGenerator::from_config(&invalid).is_err());
    }

    // Tests the same seed reproduces the same set
    // Verified by seeding from entropy
    #[test]
    fn test_reproducible_sets() {
        let generator = PatternGenerator::default();
        let mut rng_a = StdRng::seed_from_u64(99);
        let mut rng_b = StdRng::seed_from_u64(99);

        assert_eq!(
            generator.generate_distinct_set(4, 4, &mut rng_a).unwrap(),
            generator.generate_distinct_set(4, 4, &mut rng_b).unwrap()
        );
    }
}
