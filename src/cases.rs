// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Pairwise evaluation of both distance variants against expected values.
//!
//! A case set is a list of `(reference, candidate)` pairs, each with the exact
//! distance and the bounded distance it should produce, plus the bound to run
//! the bounded variant with. Evaluation runs every pair through both functions
//! and reports how many came out as expected.
//!
//! Case files are JSON:
//!
//! ```json
//! {
//!   "maxDistance": 2,
//!   "cases": [
//!     { "reference": "Cats", "candidate": "Hats", "expected": 1, "expectedBounded": 1 }
//!   ]
//! }
//! ```

use crate::distance::{bounded_distance, distance, max_distance_from_signed};
use crate::error::LevError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Bound used when a case file does not name one.
pub const DEFAULT_MAX_DISTANCE: i64 = 2;

/// One pair and the distances it should produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairCase {
    pub reference: String,
    pub candidate: String,
    /// Exact distance
    pub expected: usize,
    /// Bounded distance under the set's `max_distance`
    pub expected_bounded: usize,
}

/// A bound and the pairs to evaluate under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseSet {
    /// Negative means unbounded.
    #[serde(default = "default_max_distance")]
    pub max_distance: i64,
    pub cases: Vec<PairCase>,
}

fn default_max_distance() -> i64 {
    DEFAULT_MAX_DISTANCE
}

impl CaseSet {
    /// The stock pairs: two within a bound of 2, two past it.
    pub fn builtin() -> Self {
        let case = |reference: &str, candidate: &str, expected, expected_bounded| PairCase {
            reference: reference.to_string(),
            candidate: candidate.to_string(),
            expected,
            expected_bounded,
        };

        CaseSet {
            max_distance: DEFAULT_MAX_DISTANCE,
            cases: vec![
                case("Cats", "Hats", 1, 1),
                case("Band", "Hands", 2, 2),
                case("Cats", "Kansas", 4, 3),
                case("International", "Internship", 6, 3),
            ],
        }
    }

    /// Parse a case set from JSON text. `origin` names the source in errors.
    pub fn from_json(origin: &str, json: &str) -> Result<Self, LevError> {
        serde_json::from_str(json).map_err(|e| LevError::Parse {
            path: origin.to_string(),
            message: e.to_string(),
        })
    }
}

/// Read and parse a JSON case file.
pub fn load_case_set(path: &Path) -> Result<CaseSet, LevError> {
    let origin = path.display().to_string();
    let json = fs::read_to_string(path).map_err(|e| LevError::Io {
        path: origin.clone(),
        message: e.to_string(),
    })?;
    CaseSet::from_json(&origin, &json)
}

/// What one pair produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseOutcome {
    pub reference: String,
    pub candidate: String,
    pub distance: usize,
    pub expected: usize,
    pub bounded: usize,
    pub expected_bounded: usize,
}

impl CaseOutcome {
    pub fn exact_ok(&self) -> bool {
        self.distance == self.expected
    }

    pub fn bounded_ok(&self) -> bool {
        self.bounded == self.expected_bounded
    }
}

/// Per-pair outcomes and the fraction of pairs each variant got right.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub max_distance: i64,
    pub outcomes: Vec<CaseOutcome>,
    pub exact_accuracy: f64,
    pub bounded_accuracy: f64,
}

/// Run every pair of `set` through both variants.
pub fn evaluate(set: &CaseSet) -> Report {
    let max = max_distance_from_signed(set.max_distance);

    let outcomes: Vec<CaseOutcome> = set
        .cases
        .iter()
        .map(|case| CaseOutcome {
            reference: case.reference.clone(),
            candidate: case.candidate.clone(),
            distance: distance(&case.reference, &case.candidate),
            expected: case.expected,
            bounded: bounded_distance(&case.reference, &case.candidate, max),
            expected_bounded: case.expected_bounded,
        })
        .collect();

    let exact_correct = outcomes.iter().filter(|o| o.exact_ok()).count();
    let bounded_correct = outcomes.iter().filter(|o| o.bounded_ok()).count();

    Report {
        max_distance: set.max_distance,
        exact_accuracy: accuracy(exact_correct, outcomes.len()),
        bounded_accuracy: accuracy(bounded_correct, outcomes.len()),
        outcomes,
    }
}

/// Ratio of correct observations to total observations.
fn accuracy(correct: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        correct as f64 / total as f64
    }
}
