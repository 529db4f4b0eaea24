// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Levenshtein edit distance, exact and bounded.
//!
//! The minimum number of single-unit insertions, deletions and substitutions
//! that turn one sequence into another. Two flavors:
//!
//! - [`levenshtein`]: the exact distance, two rolling DP rows.
//! - [`levenshtein_bounded`]: the exact distance if it is `<= max`, otherwise
//!   `max + 1`. Stops as soon as the bound is provably exceeded.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐     ┌──────────────────┐
//! │ distance/exact   │     │ distance/bounded │
//! │ (two rows)       │     │ (one row, exits) │
//! └────────┬─────────┘     └────────┬─────────┘
//!          │                        │
//!          ▼                        ▼
//! ┌───────────────────────────────────────────┐
//! │               contracts.rs                │
//! │  (row length, row prefix cost, result)    │
//! └───────────────────────────────────────────┘
//!          ▲
//!          │
//! ┌──────────────────┐     ┌──────────────────┐
//! │ cases.rs         │────▶│ main.rs / wasm   │
//! │ (evaluation)     │     │ (callers)        │
//! └──────────────────┘     └──────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use levdist::{bounded_distance, distance};
//!
//! assert_eq!(distance("Cats", "Kansas"), 4);
//! // Past the bound: reported as max + 1
//! assert_eq!(bounded_distance("Cats", "Kansas", Some(2)), 3);
//! ```

// Module declarations
pub mod cases;
pub mod contracts;
mod distance;
mod error;

#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for public API
pub use cases::{evaluate, load_case_set, CaseOutcome, CaseSet, PairCase, Report};
pub use distance::{
    bounded_distance, distance, exceeded_marker, levenshtein, levenshtein_bounded,
    levenshtein_within, max_distance_from_signed,
};
pub use error::LevError;
