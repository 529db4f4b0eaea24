//! Shared test fixtures and reference implementations.

#![allow(dead_code)]

/// The stock pairs with their exact distance and their distance bounded by 2.
pub const KNOWN_PAIRS: &[(&str, &str, usize, usize)] = &[
    ("Cats", "Hats", 1, 1),
    ("Band", "Hands", 2, 2),
    ("Cats", "Kansas", 4, 3),
    ("International", "Internship", 6, 3),
];

/// Bound the second expectation of `KNOWN_PAIRS` was computed under.
pub const KNOWN_MAX: usize = 2;

/// Full-matrix Wagner-Fischer over chars.
///
/// O(nm) time and space, no rolling rows, no early exits. Slow but obviously
/// correct, so the optimized versions are checked against it.
pub fn oracle_levenshtein(s1: &str, s2: &str) -> usize {
    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();

    let mut table = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for (i, row) in table.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=b.len() {
        table[0][j] = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            table[i][j] = (table[i - 1][j] + 1) // deletion
                .min(table[i][j - 1] + 1) // insertion
                .min(table[i - 1][j - 1] + cost); // substitution
        }
    }

    table[a.len()][b.len()]
}
