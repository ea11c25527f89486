//! Tests for configuration defaults, clamping and parameter validation

#[cfg(test)]
mod tests {
    use patternspot::GenerationError;
    use patternspot::io::configuration::{
        ConflictPolicy, DEFAULT_COLS, DEFAULT_ROWS, GenerationConfig, MAX_BOARD_DIMENSION,
        MIN_BOARD_DIMENSION, PATTERN_CELLS, PATTERN_SIZE, clamp_dimension, validate_live_bounds,
    };

    // Tests pattern constants stay consistent with each other
    // Verified by changing PATTERN_CELLS to a literal
    #[test]
    fn test_pattern_constants() {
        assert_eq!(PATTERN_SIZE, 3);
        assert_eq!(PATTERN_CELLS, PATTERN_SIZE * PATTERN_SIZE);
        assert!(MIN_BOARD_DIMENSION >= PATTERN_SIZE);
        assert!(MIN_BOARD_DIMENSION <= MAX_BOARD_DIMENSION);
    }

    // Tests the default configuration is valid and uses the documented values
    // Verified by defaulting min_live to zero
    #[test]
    fn test_default_config() {
        let config = GenerationConfig::default();

        assert_eq!((config.rows, config.cols), (DEFAULT_ROWS, DEFAULT_COLS));
        assert_eq!(config.option_count, 4);
        assert_eq!(config.min_distance, 4);
        assert_eq!((config.min_live, config.max_live), (2, 7));
        assert_eq!(config.sweep_passes, 5);
        assert_eq!(config.conflict_policy, ConflictPolicy::Regenerate);
        assert!(config.validate().is_ok());
    }

    // Tests dimension clamping at and beyond both limits
    // Verified by swapping the limits in clamp_dimension
    #[test]
    fn test_clamp_dimension() {
        assert_eq!(clamp_dimension(0), MIN_BOARD_DIMENSION);
        assert_eq!(clamp_dimension(7), 8);
        assert_eq!(clamp_dimension(8), 8);
        assert_eq!(clamp_dimension(33), 33);
        assert_eq!(clamp_dimension(60), 60);
        assert_eq!(clamp_dimension(61), MAX_BOARD_DIMENSION);
    }

    // Tests with_dimensions clamps but keeps other defaults
    // Verified by skipping the clamp in with_dimensions
    #[test]
    fn test_with_dimensions() {
        let config = GenerationConfig::with_dimensions(3, 200);

        assert_eq!((config.rows, config.cols), (8, 60));
        assert_eq!(config.option_count, GenerationConfig::default().option_count);
    }

    // Tests validation names the offending parameter
    // Verified by returning the first parameter name for every failure
    #[test]
    fn test_validate_names_parameter() {
        let cases = [
            (
                GenerationConfig {
                    option_count: 1,
                    ..GenerationConfig::default()
                },
                "option_count",
            ),
            (
                GenerationConfig {
                    min_distance: 10,
                    ..GenerationConfig::default()
                },
                "min_distance",
            ),
            (
                GenerationConfig {
                    sweep_passes: 0,
                    ..GenerationConfig::default()
                },
                "sweep_passes",
            ),
            (
                GenerationConfig {
                    max_round_attempts: 0,
                    ..GenerationConfig::default()
                },
                "max_round_attempts",
            ),
        ];

        for (config, expected) in cases {
            let result = config.validate();
            assert!(
                matches!(
                    result,
                    Err(GenerationError::InvalidParameter { parameter, .. }) if parameter == expected
                ),
                "expected invalid {expected}, got {result:?}"
            );
        }
    }

    // Tests live-cell bounds exclude uniform patterns
    // Verified by allowing max_live equal to the cell count
    #[test]
    fn test_validate_live_bounds() {
        assert!(validate_live_bounds(1, 8).is_ok());
        assert!(validate_live_bounds(4, 4).is_ok());
        assert!(validate_live_bounds(0, 4).is_err());
        assert!(validate_live_bounds(2, 9).is_err());
        assert!(validate_live_bounds(5, 4).is_err());
    }

    // Tests policy names parse from the command line spelling
    // Verified by renaming the regenerate variant
    #[test]
    fn test_policy_value_names() {
        use clap::ValueEnum;

        assert_eq!(
            ConflictPolicy::from_str("accept", false),
            Ok(ConflictPolicy::Accept)
        );
        assert_eq!(
            ConflictPolicy::from_str("regenerate", false),
            Ok(ConflictPolicy::Regenerate)
        );
        assert_eq!(ConflictPolicy::value_variants().len(), 3);
    }
}
