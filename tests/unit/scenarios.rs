//! The fixed pairs, through every public entry point.

use super::common::{KNOWN_MAX, KNOWN_PAIRS};
use levdist::{bounded_distance, distance, levenshtein, levenshtein_bounded, levenshtein_within};

#[test]
fn test_known_exact_distances() {
    for &(a, b, expected, _) in KNOWN_PAIRS {
        assert_eq!(distance(a, b), expected, "distance({}, {})", a, b);
    }
}

#[test]
fn test_known_bounded_distances() {
    for &(a, b, _, expected) in KNOWN_PAIRS {
        assert_eq!(
            bounded_distance(a, b, Some(KNOWN_MAX)),
            expected,
            "bounded_distance({}, {}, {})",
            a,
            b,
            KNOWN_MAX
        );
    }
}

#[test]
fn test_known_pairs_are_symmetric() {
    for &(a, b, expected, bounded) in KNOWN_PAIRS {
        assert_eq!(distance(b, a), expected);
        assert_eq!(bounded_distance(b, a, Some(KNOWN_MAX)), bounded);
    }
}

#[test]
fn test_byte_and_char_agree_on_ascii() {
    for &(a, b, expected, bounded) in KNOWN_PAIRS {
        assert_eq!(levenshtein(a.as_bytes(), b.as_bytes()), expected);
        assert_eq!(
            levenshtein_bounded(a.as_bytes(), b.as_bytes(), Some(KNOWN_MAX)),
            bounded
        );
    }
}

#[test]
fn test_within_matches_bound() {
    assert!(levenshtein_within("Cats", "Hats", KNOWN_MAX));
    assert!(levenshtein_within("Band", "Hands", KNOWN_MAX));
    assert!(!levenshtein_within("Cats", "Kansas", KNOWN_MAX));
    assert!(!levenshtein_within("International", "Internship", KNOWN_MAX));
}

#[test]
fn test_classic_pairs() {
    assert_eq!(distance("kitten", "sitting"), 3);
    assert_eq!(distance("flaw", "lawn"), 2);
    assert_eq!(distance("saturday", "sunday"), 3);
    assert_eq!(bounded_distance("saturday", "sunday", Some(3)), 3);
    assert_eq!(bounded_distance("saturday", "sunday", Some(1)), 2);
}
