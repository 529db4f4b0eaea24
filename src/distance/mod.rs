// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Levenshtein edit distance.
//!
//! Two implementations of the same recurrence: an exact one with two rolling
//! rows, and a bounded one that abandons the table once the answer is known to
//! be too large. Both work on any `&[T]` with `T: PartialEq`; the `&str`
//! helpers below compare Unicode scalar values, not bytes.

mod bounded;
mod exact;

pub use bounded::{exceeded_marker, levenshtein_bounded, max_distance_from_signed};
pub use exact::levenshtein;

/// Exact edit distance between two strings, counted in `char`s.
///
/// Use `levenshtein(a.as_bytes(), b.as_bytes())` for byte-level distance.
pub fn distance(a: &str, b: &str) -> usize {
    if std::ptr::eq(a, b) {
        return 0;
    }
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    levenshtein(&a, &b)
}

/// Bounded edit distance between two strings, counted in `char`s.
///
/// See [`levenshtein_bounded`] for the meaning of the result.
pub fn bounded_distance(a: &str, b: &str, max: Option<usize>) -> usize {
    if std::ptr::eq(a, b) {
        return 0;
    }
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    levenshtein_bounded(&a, &b, max)
}

/// Are these strings within `max` edits of each other?
pub fn levenshtein_within(a: &str, b: &str, max: usize) -> bool {
    bounded_distance(a, b, Some(max)) <= max
}
