//! Edit distance is a metric: identity, symmetry, triangle inequality.

use levdist::distance;
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Short strings over a tiny alphabet, so random pairs actually share units.
fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abc]{0,10}").unwrap()
}

/// Unicode words with diacritics and multi-byte characters.
fn unicode_word_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "café".to_string(),
        "cafe".to_string(),
        "naïve".to_string(),
        "naive".to_string(),
        "über".to_string(),
        "tōkyō".to_string(),
        "tokyo".to_string(),
        "తెలుగు".to_string(),
        "".to_string(),
    ])
}

proptest! {
    /// Property: Identical strings have distance 0.
    #[test]
    fn prop_identity(s in word_strategy()) {
        prop_assert_eq!(distance(&s, &s), 0);
        // Distinct allocation, same content
        let copy = s.clone();
        prop_assert_eq!(distance(&s, &copy), 0);
    }

    /// Property: distance(a, b) == distance(b, a).
    #[test]
    fn prop_symmetry(a in word_strategy(), b in word_strategy()) {
        prop_assert_eq!(distance(&a, &b), distance(&b, &a));
    }

    /// Property: distance(a, c) <= distance(a, b) + distance(b, c).
    #[test]
    fn prop_triangle_inequality(
        a in word_strategy(),
        b in word_strategy(),
        c in word_strategy()
    ) {
        let ac = distance(&a, &c);
        let ab = distance(&a, &b);
        let bc = distance(&b, &c);
        prop_assert!(ac <= ab + bc, "d({},{})={} > {} + {}", a, c, ac, ab, bc);
    }

    /// Property: distance is between the length difference and the longer length.
    #[test]
    fn prop_length_bounds(a in word_strategy(), b in word_strategy()) {
        let (la, lb) = (a.chars().count(), b.chars().count());
        let d = distance(&a, &b);
        prop_assert!(d >= la.abs_diff(lb));
        prop_assert!(d <= la.max(lb));
    }

    /// Property: against the empty string, the distance is the length.
    #[test]
    fn prop_empty_is_length(s in word_strategy()) {
        prop_assert_eq!(distance("", &s), s.chars().count());
        prop_assert_eq!(distance(&s, ""), s.chars().count());
    }

    /// Property: one appended unit costs exactly one edit.
    #[test]
    fn prop_single_append(s in word_strategy(), c in prop::char::range('a', 'z')) {
        let mut longer = s.clone();
        longer.push(c);
        prop_assert_eq!(distance(&s, &longer), 1);
    }

    /// Property: Unicode strings are measured in chars, not bytes.
    #[test]
    fn prop_unicode_symmetry(a in unicode_word_strategy(), b in unicode_word_strategy()) {
        let d = distance(&a, &b);
        prop_assert_eq!(d, distance(&b, &a));
        prop_assert!(d <= a.chars().count().max(b.chars().count()));
    }
}
