//! Tests for 3x3 patterns, bit packing and Hamming distance

#[cfg(test)]
mod tests {
    use patternspot::spatial::pattern::{Pattern, pattern_distance};

    const T: bool = true;
    const F: bool = false;

    // Tests bit layout maps row-major cells
    // Verified by swapping row and column in from_bits
    #[test]
    fn test_from_bits_layout() {
        let pattern = Pattern::from_bits(0b0_0000_0110);

        assert_eq!(pattern.cells(), &[[F, T, T], [F, F, F], [F, F, F]]);
        assert_eq!(pattern.get(0, 2), Some(true));
        assert_eq!(pattern.get(1, 0), Some(false));
    }

    // Tests packing and unpacking agree for every pattern
    // Verified by dropping the highest bit in to_bits
    #[test]
    fn test_bits_agree_for_all_patterns() {
        for bits in 0..512_u16 {
            assert_eq!(Pattern::from_bits(bits).to_bits(), bits);
        }
    }

    // Tests out of range cells are reported as missing
    // Verified by clamping indices in get
    #[test]
    fn test_get_outside_pattern() {
        let pattern = Pattern::from_bits(0x1FF);
        assert_eq!(pattern.get(3, 0), None);
        assert_eq!(pattern.get(0, 3), None);
    }

    // Tests live cell counting
    // Verified by counting dead cells instead
    #[test]
    fn test_live_count() {
        assert_eq!(Pattern::from_bits(0).live_count(), 0);
        assert_eq!(Pattern::from_bits(0x1FF).live_count(), 9);
        assert_eq!(Pattern::new([[T, F, T], [F, T, F], [T, F, T]]).live_count(), 5);
    }

    // Tests uniform patterns are recognized
    // Verified by only checking the all-dead case
    #[test]
    fn test_is_uniform() {
        assert!(Pattern::from_bits(0).is_uniform());
        assert!(Pattern::from_bits(0x1FF).is_uniform());
        assert!(!Pattern::from_bits(0b1).is_uniform());
    }

    // Tests Hamming distance counts differing cells
    // Verified by counting equal cells instead
    #[test]
    fn test_distance() {
        let cross = Pattern::new([[F, T, F], [T, T, T], [F, T, F]]);
        let saltire = Pattern::new([[T, F, T], [F, T, F], [T, F, T]]);

        assert_eq!(cross.distance(&cross), 0);
        assert_eq!(cross.distance(&saltire), 8);
        assert_eq!(pattern_distance(&cross, &saltire), 8);
        assert_eq!(saltire.distance(&cross), cross.distance(&saltire));
    }

    // Tests complementary patterns are at maximum distance
    // Verified by limiting distance to eight
    #[test]
    fn test_complement_distance_is_nine() {
        let pattern = Pattern::from_bits(0b1_0110_1001);
        let complement = Pattern::from_bits(!0b1_0110_1001 & 0x1FF);
        assert_eq!(pattern.distance(&complement), 9);
    }

    // Tests iteration visits cells row-major
    // Verified by iterating columns in the outer loop
    #[test]
    fn test_iter_order() {
        let pattern = Pattern::from_bits(0b0_0000_0010);
        let cells: Vec<_> = pattern.iter().collect();

        assert_eq!(cells.len(), 9);
        assert_eq!(cells.first(), Some(&(0, 0, false)));
        assert_eq!(cells.get(1), Some(&(0, 1, true)));
        assert_eq!(cells.get(3), Some(&(1, 0, false)));
    }

    // Tests text rendering of a pattern
    // Verified by swapping live and dead characters
    #[test]
    fn test_display() {
        let pattern = Pattern::new([[T, F, F], [F, T, F], [F, F, T]]);
        assert_eq!(pattern.to_string(), "#..\n.#.\n..#");
    }

    // Tests equality is by content
    // Verified by deriving equality on a unique id
    #[test]
    fn test_value_equality() {
        let a = Pattern::from([[T, T, F], [F, F, F], [F, F, F]]);
        let b = Pattern::from_bits(0b11);
        assert_eq!(a, b);
    }
}
