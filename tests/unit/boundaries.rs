//! Row and column zero, empty inputs, and the bound at its edges.

use levdist::{
    bounded_distance, distance, exceeded_marker, levenshtein, levenshtein_bounded,
    max_distance_from_signed,
};

#[test]
fn test_both_empty() {
    assert_eq!(distance("", ""), 0);
    assert_eq!(bounded_distance("", "", Some(0)), 0);
    assert_eq!(bounded_distance("", "", None), 0);
}

#[test]
fn test_one_empty_is_length() {
    assert_eq!(distance("", "abc"), 3);
    assert_eq!(distance("abc", ""), 3);
    assert_eq!(distance("", "héllo"), 5);
}

#[test]
fn test_bounded_empty_ignores_bound() {
    // Empty input returns the true length even past the bound
    assert_eq!(bounded_distance("", "abcdef", Some(2)), 6);
    assert_eq!(bounded_distance("abcdef", "", Some(2)), 6);
    assert_eq!(bounded_distance("", "abcdef", Some(0)), 6);
}

#[test]
fn test_single_unit_against_longer() {
    // Match at the first column, the last column, and nowhere
    assert_eq!(distance("a", "abc"), 2);
    assert_eq!(distance("c", "abc"), 2);
    assert_eq!(distance("z", "abc"), 3);
    assert_eq!(bounded_distance("z", "abc", Some(3)), 3);
    assert_eq!(bounded_distance("z", "abc", Some(2)), 3);
}

#[test]
fn test_prefix_and_suffix() {
    assert_eq!(distance("abc", "abcdef"), 3);
    assert_eq!(distance("def", "abcdef"), 3);
    assert_eq!(bounded_distance("abc", "abcdef", Some(3)), 3);
    assert_eq!(bounded_distance("def", "abcdef", Some(2)), 3);
}

#[test]
fn test_zero_bound() {
    assert_eq!(bounded_distance("same", "same", Some(0)), 0);
    assert_eq!(bounded_distance("same", "sane", Some(0)), 1);
}

#[test]
fn test_bound_larger_than_inputs() {
    assert_eq!(bounded_distance("abc", "xyz", Some(100)), 3);
    assert_eq!(bounded_distance("abc", "xyz", Some(usize::MAX)), 3);
}

#[test]
fn test_negative_bound_is_unbounded() {
    let max = max_distance_from_signed(-1);
    assert_eq!(max, None);
    assert_eq!(bounded_distance("International", "Internship", max), 6);
}

#[test]
fn test_marker_is_max_plus_one() {
    for max in 0..5 {
        let d = levenshtein_bounded(b"aaaaaaaaaa", b"bbbbbbbbbb", Some(max));
        assert_eq!(d, exceeded_marker(max));
        assert_eq!(d, max + 1);
    }
}

#[test]
fn test_same_slice_short_circuits() {
    let s = vec!['x'; 64];
    assert_eq!(levenshtein(&s, &s), 0);
    assert_eq!(levenshtein_bounded(&s, &s, Some(0)), 0);
}

#[test]
fn test_rows_sized_by_shorter_input() {
    // Either argument order exercises the swap
    let long = "abcdefghijklmnopqrstuvwxyz";
    let short = "bdf";
    assert_eq!(distance(long, short), distance(short, long));
    assert_eq!(
        bounded_distance(long, short, Some(30)),
        bounded_distance(short, long, Some(30))
    );
    assert_eq!(distance(long, short), 23);
}
