//! Runtime contracts for the edit-distance DP.
//!
//! Debug-mode assertions over the cost rows. These contracts:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Fail at the row that broke, not at the wrong final answer
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function        | Property                                        |
//! |--------------------------|-------------------------------------------------|
//! | `check_row_len`          | every cost row has `len(columns) + 1` cells     |
//! | `check_row_prefix_cost`  | `row[0] == i` for the `i`-th row                |
//! | `check_bounded_result`   | bounded result is `<= max + 1`                  |
//!
//! # Usage
//!
//! ```ignore
//! check_row_len(&row, cols.len());
//! check_row_prefix_cost(&row, i);
//! ```

use crate::distance::exceeded_marker;

// ============================================================================
// COST ROW CONTRACTS
// ============================================================================

/// Check that a cost row spans every column plus the empty prefix.
///
/// # Panics (debug builds only)
/// Panics if `row.len() != columns + 1`.
#[inline]
pub fn check_row_len(row: &[usize], columns: usize) {
    debug_assert_eq!(
        row.len(),
        columns + 1,
        "Contract violation: cost row has {} cells, expected {}",
        row.len(),
        columns + 1
    );
}

/// Check that the first cell of row `i` is the cost of an `i`-unit prefix
/// against the empty string.
///
/// # Panics (debug builds only)
/// Panics if `row[0] != i`.
#[inline]
pub fn check_row_prefix_cost(row: &[usize], i: usize) {
    debug_assert_eq!(
        row.first().copied(),
        Some(i),
        "Contract violation: row {} starts with {:?}",
        i,
        row.first()
    );
}

// ============================================================================
// RESULT CONTRACTS
// ============================================================================

/// Check that a bounded result is either in range or the exceeded marker.
///
/// # Panics (debug builds only)
/// Panics if `result > max + 1`.
#[inline]
pub fn check_bounded_result(result: usize, max: Option<usize>) {
    if let Some(max) = max {
        debug_assert!(
            result <= exceeded_marker(max),
            "Contract violation: bounded result {} past marker {}",
            result,
            exceeded_marker(max)
        );
    }
}
