// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use std::io::{self, Write};
use std::path::Path;

use levdist::{
    bounded_distance, distance, evaluate, load_case_set, max_distance_from_signed, CaseSet,
    LevError, Report,
};

mod cli;
use cli::display::{self, themed, BOLD, CYAN, GRAY};
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Distance {
            reference,
            candidate,
            max,
        } => {
            run_distance(&reference, &candidate, max);
            Ok(())
        }
        Commands::Demo { cases, json } => run_demo(cases.as_deref(), json),
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run_distance(reference: &str, candidate: &str, max: Option<i64>) {
    match max {
        Some(signed) => {
            let bound = max_distance_from_signed(signed);
            let d = bounded_distance(reference, candidate, bound);
            println!(
                "levenshtein({}, {}, {}) = {}",
                reference,
                candidate,
                signed,
                display::distance(d, bound)
            );
        }
        None => {
            let d = distance(reference, candidate);
            println!("levenshtein({}, {}) = {}", reference, candidate, d);
        }
    }
}

fn run_demo(cases: Option<&Path>, json: bool) -> Result<(), LevError> {
    let set = match cases {
        Some(path) => load_case_set(path)?,
        None => CaseSet::builtin(),
    };
    let report = evaluate(&set);

    if json {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        serde_json::to_writer_pretty(&mut out, &report)
            .map_err(|e| stdout_error(e.to_string()))?;
        writeln!(out).map_err(|e| stdout_error(e.to_string()))?;
    } else {
        print_report(&report);
    }
    Ok(())
}

fn stdout_error(message: String) -> LevError {
    LevError::Io {
        path: "<stdout>".to_string(),
        message,
    }
}

fn print_report(report: &Report) {
    let bound = max_distance_from_signed(report.max_distance);
    let bound_label = match bound {
        Some(max) => max.to_string(),
        None => "none".to_string(),
    };

    display::section_top("EXACT");
    for o in &report.outcomes {
        display::row(&format!(
            " {} levenshtein({}, {}) = {} {}",
            display::verdict(o.exact_ok()),
            o.reference,
            o.candidate,
            o.distance,
            themed(GRAY, &[], &format!("expected {}", o.expected)),
        ));
    }
    display::section_bot();

    display::section_top(&format!("BOUNDED (max {})", bound_label));
    for o in &report.outcomes {
        display::row(&format!(
            " {} levenshtein({}, {}, {}) = {} {}",
            display::verdict(o.bounded_ok()),
            o.reference,
            o.candidate,
            report.max_distance,
            display::distance(o.bounded, bound),
            themed(GRAY, &[], &format!("expected {}", o.expected_bounded)),
        ));
    }
    display::section_bot();

    println!();
    println!(
        "{} {}",
        themed(CYAN, &[BOLD], "Accuracy of levenshtein:         "),
        display::accuracy(report.exact_accuracy)
    );
    println!(
        "{} {}",
        themed(CYAN, &[BOLD], "Accuracy of levenshtein with max:"),
        display::accuracy(report.bounded_accuracy)
    );
}
