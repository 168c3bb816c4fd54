//! Domain-specific generators
//!
//! This module provides generators for common domain-specific data types:
//! - UUIDs (v4)
//!
//! All generators are composed from the text generators in this crate.

use quickgen::{Generator, n_tuple, one_of_values};

use super::text::hex_string;

/// RFC 4122 variant nibbles
const VARIANTS: [char; 4] = ['8', '9', 'A', 'B'];

// ============================================================================
// UUID Generator
// ============================================================================

/// Create a generator for version 4 UUID strings
///
/// Values look like `XXXXXXXX-XXXX-4XXX-VXXX-XXXXXXXXXXXX` in uppercase hex,
/// where the version digit is always `4` and `V` is one of `8`, `9`, `A`, `B`.
///
/// ```rust
/// use quickgen::Generator;
/// use quickgen_extras::generators::domain::uuid;
///
/// let id = uuid().generate().get();
/// assert_eq!(id.len(), 36);
/// assert_eq!(id.as_bytes()[14], b'4');
/// ```
pub fn uuid() -> impl Generator<Value = String> {
    let version = hex_string(3).map(|rest| format!("4{rest}"));
    let variant = hex_string(3).flat_map(|rest| {
        one_of_values(VARIANTS).map(move |nibble| format!("{nibble}{rest}"))
    });

    n_tuple((hex_string(8), hex_string(4), version, variant, hex_string(12)))
        .map(|(time_low, time_mid, version, variant, node)| {
            [time_low, time_mid, version, variant, node].join("-")
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickgen::Present;
    use quickgen::rng::{FixedSource, with_random_source};
    use std::collections::HashSet;

    fn is_upper_hex(c: char) -> bool {
        c.is_ascii_digit() || ('A'..='F').contains(&c)
    }

    #[test]
    fn test_uuid_format() {
        let generator = uuid();
        for _ in 0..200 {
            let id = generator.generate().get();
            let groups: Vec<&str> = id.split('-').collect();

            let widths: Vec<usize> = groups.iter().map(|group| group.len()).collect();
            assert_eq!(widths, vec![8, 4, 4, 4, 12], "bad layout: {id}");
            assert!(groups.iter().all(|group| group.chars().all(is_upper_hex)));

            assert!(groups[2].starts_with('4'));
            assert!(groups[3].starts_with(VARIANTS));
        }
    }

    #[test]
    fn test_uuid_lowest_draws() {
        let id = with_random_source(FixedSource(0.0), || uuid().generate());
        assert_eq!(
            id,
            Present("00000000-0000-4000-8000-000000000000".to_string())
        );
    }

    #[test]
    fn test_uuid_values_differ() {
        let generator = uuid();
        let ids: HashSet<String> = (0..50).map(|_| generator.generate().get()).collect();
        assert!(ids.len() > 1);
    }
}
