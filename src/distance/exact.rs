// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Full Levenshtein distance with two rolling rows.
//!
//! Wagner-Fischer without the matrix: only the previous and current DP rows are
//! alive at any time, so memory is `O(min(m, n))` instead of `O(m * n)`. The rows
//! are indexed by the shorter input; the longer one drives the outer loop.

use crate::contracts::{check_row_len, check_row_prefix_cost};

/// Edit distance between `a` and `b`: the minimum number of single-unit
/// insertions, deletions and substitutions turning one into the other.
///
/// Pure and allocation-bounded: two buffers of `min(len(a), len(b)) + 1`
/// entries, dropped on return.
///
/// ```
/// use levdist::levenshtein;
///
/// assert_eq!(levenshtein(b"Cats", b"Hats"), 1);
/// assert_eq!(levenshtein(b"", b"abc"), 3);
/// ```
pub fn levenshtein<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    // Same slice, same answer. Equal-but-distinct slices take the general path.
    if std::ptr::eq(a, b) {
        return 0;
    }

    // Distance is symmetric, so keep the row sized by the shorter side.
    let (cols, rows) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let width = cols.len() + 1;

    // Cost of deleting the first `i` units of `cols`.
    let mut row: Vec<usize> = (0..width).collect();
    let mut next: Vec<usize> = vec![0; width];

    for (j, rc) in rows.iter().enumerate() {
        next[0] = j + 1;

        for (i, cc) in cols.iter().enumerate() {
            let substitution = row[i] + usize::from(cc != rc);
            let deletion = row[i + 1] + 1;
            let insertion = next[i] + 1;
            next[i + 1] = deletion.min(insertion).min(substitution);
        }

        check_row_len(&next, cols.len());
        check_row_prefix_cost(&next, j + 1);
        std::mem::swap(&mut row, &mut next);
    }

    row[cols.len()]
}
