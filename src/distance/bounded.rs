// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance with an early-exit bound.
//!
//! Same recurrence as [`levenshtein`](super::levenshtein), folded into a single
//! cost row. Two facts let it stop before filling the whole table:
//!
//! 1. `|len(a) - len(b)|` is a lower bound on the distance. If it already
//!    exceeds the bound, no row is computed at all.
//! 2. Every path through the DP table crosses every row, so the minimum of a
//!    row is a lower bound on the final cell. Once a row's minimum exceeds the
//!    bound, the answer can only be "too far".
//!
//! Anything past the bound is reported as `max + 1`, never the true value.

use crate::contracts::{check_bounded_result, check_row_len, check_row_prefix_cost};

/// The value a bounded computation returns once the distance is known to be
/// larger than `max`. Callers must read it as "at least this far".
#[inline]
pub fn exceeded_marker(max: usize) -> usize {
    max.saturating_add(1)
}

/// Convert a signed bound where any negative value means "unbounded".
///
/// ```
/// use levdist::max_distance_from_signed;
///
/// assert_eq!(max_distance_from_signed(2), Some(2));
/// assert_eq!(max_distance_from_signed(-1), None);
/// ```
pub fn max_distance_from_signed(max: i64) -> Option<usize> {
    usize::try_from(max).ok()
}

/// Edit distance between `a` and `b`, giving up once it exceeds `max`.
///
/// Returns the exact distance when it is `<= max`, otherwise exactly
/// [`exceeded_marker(max)`](exceeded_marker). With `max = None` the result is
/// always exact.
///
/// An empty input short-circuits to the other input's length *without*
/// applying the bound.
///
/// ```
/// use levdist::levenshtein_bounded;
///
/// assert_eq!(levenshtein_bounded(b"Cats", b"Hats", Some(2)), 1);
/// assert_eq!(levenshtein_bounded(b"Cats", b"Kansas", Some(2)), 3);
/// assert_eq!(levenshtein_bounded(b"Cats", b"Kansas", None), 4);
/// ```
pub fn levenshtein_bounded<T: PartialEq>(a: &[T], b: &[T], max: Option<usize>) -> usize {
    if std::ptr::eq(a, b) {
        return 0;
    }
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Longer input drives the rows, so the cost row is sized by the shorter one
    let (rows, cols) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    if let Some(max) = max {
        if rows.len() - cols.len() > max {
            return exceeded_marker(max);
        }
    }

    let mut cost: Vec<usize> = (0..=cols.len()).collect();

    for (i, rc) in rows.iter().enumerate() {
        // Diagonal predecessor: cost[j] of the previous row
        let mut diag = cost[0];
        cost[0] = i + 1;
        let mut row_min = cost[0];

        for (j, cc) in cols.iter().enumerate() {
            let above = cost[j + 1];
            let substitution = diag + usize::from(rc != cc);
            cost[j + 1] = (above + 1).min(cost[j] + 1).min(substitution);
            diag = above;
            row_min = row_min.min(cost[j + 1]);
        }

        check_row_len(&cost, cols.len());
        check_row_prefix_cost(&cost, i + 1);

        if let Some(max) = max {
            if row_min > max {
                return exceeded_marker(max);
            }
        }
    }

    let distance = cost[cols.len()];
    let result = match max {
        Some(max) if distance > max => exceeded_marker(max),
        _ => distance,
    };
    check_bounded_result(result, max);
    result
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;
    use crate::distance::levenshtein;

    const MAX_LEN: usize = 3;

    fn any_units() -> ([u8; MAX_LEN], usize) {
        let len: usize = kani::any_where(|&n| n <= MAX_LEN);
        let mut units = [0u8; MAX_LEN];
        for unit in units.iter_mut() {
            // Three symbols are enough to hit match, mismatch and repeats
            *unit = kani::any_where(|&u| u < 3);
        }
        (units, len)
    }

    /// Verify the bounded result is the exact distance or the marker.
    #[kani::proof]
    #[kani::unwind(5)] // MAX_LEN + 2
    fn verify_bounded_matches_exact() {
        let (a, a_len) = any_units();
        let (b, b_len) = any_units();
        let (a, b) = (&a[..a_len], &b[..b_len]);
        let max: usize = kani::any_where(|&m| m <= MAX_LEN + 1);

        let exact = levenshtein(a, b);
        let bounded = levenshtein_bounded(a, b, Some(max));

        if a.is_empty() || b.is_empty() || exact <= max {
            kani::assert(bounded == exact, "within bound must be exact");
        } else {
            kani::assert(bounded == max + 1, "past bound must be max + 1");
        }
    }

    /// Verify the unbounded variant never panics and agrees with the exact one.
    #[kani::proof]
    #[kani::unwind(5)]
    fn verify_unbounded_matches_exact() {
        let (a, a_len) = any_units();
        let (b, b_len) = any_units();
        let (a, b) = (&a[..a_len], &b[..b_len]);

        kani::assert(
            levenshtein_bounded(a, b, None) == levenshtein(a, b),
            "unbounded must be exact",
        );
    }
}
