// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the bounded early exit.
//!
//! The early exits are the only place the two variants can drift apart. If
//! the bounded one ever reports a distance the exact one disagrees with, a
//! fuzzy lookup silently drops a real match.

#![no_main]

use arbitrary::Arbitrary;
use levdist::{bounded_distance, distance, levenshtein, levenshtein_bounded};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct PairInput {
    reference: String,
    candidate: String,
    max: u8,
}

fuzz_target!(|input: PairInput| {
    // Cap lengths to avoid timeouts on the O(nm) table
    let reference: String = input.reference.chars().take(64).collect();
    let candidate: String = input.candidate.chars().take(64).collect();
    let max = usize::from(input.max % 16);

    let exact = distance(&reference, &candidate);

    // INVARIANT 1: Symmetry
    assert_eq!(exact, distance(&candidate, &reference));

    // INVARIANT 2: No bound means the exact distance
    assert_eq!(bounded_distance(&reference, &candidate, None), exact);

    // INVARIANT 3: Within the bound exact, past it max + 1 (empty inputs bypass the bound)
    let bounded = bounded_distance(&reference, &candidate, Some(max));
    if reference.is_empty() || candidate.is_empty() || exact <= max {
        assert_eq!(bounded, exact, "ref='{}' cand='{}' max={}", reference, candidate, max);
    } else {
        assert_eq!(bounded, max + 1, "ref='{}' cand='{}' max={}", reference, candidate, max);
    }

    // INVARIANT 4: Byte-level variants agree with each other
    let (ra, cb) = (reference.as_bytes(), candidate.as_bytes());
    assert_eq!(levenshtein_bounded(ra, cb, None), levenshtein(ra, cb));
});
