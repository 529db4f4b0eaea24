// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the levdist command-line interface.
//!
//! Two subcommands: `distance` measures one pair, `demo` runs a case set
//! (the built-in pairs, or a JSON file) through both variants and reports
//! accuracy.

pub mod display;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "levdist",
    about = "Levenshtein edit distance, exact and bounded",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Edit distance between two strings
    Distance {
        /// Reference string
        reference: String,

        /// Candidate string
        candidate: String,

        /// Stop once the distance exceeds this bound (negative = unbounded)
        ///
        /// Past the bound the reported distance is `max + 1`.
        #[arg(short, long, allow_negative_numbers = true)]
        max: Option<i64>,
    },

    /// Evaluate a case set with both variants and report accuracy
    Demo {
        /// JSON case file (defaults to the built-in pairs)
        #[arg(short, long)]
        cases: Option<PathBuf>,

        /// Print the report as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}
