//! Custom cargo commands for the levdist crate.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask check     - Quick check (tests + clippy)
//!   cargo xtask bench     - Run benchmarks
//!   cargo xtask fuzz      - Run the fuzz target for a minute
//!   cargo xtask kani      - Run model checking proofs

use anyhow::{bail, Context, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Contract calls each DP implementation must keep.
const REQUIRED_CONTRACTS: &[(&str, &[&str])] = &[
    (
        "src/distance/exact.rs",
        &["check_row_len", "check_row_prefix_cost"],
    ),
    (
        "src/distance/bounded.rs",
        &["check_row_len", "check_row_prefix_cost", "check_bounded_result"],
    ),
];

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("fuzz") => fuzz()?,
        Some("kani") => kani()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (contracts + tests + clippy + wasm build)
  test      Run all Rust tests
  check     Quick check (cargo test + clippy)
  bench     Run benchmarks
  fuzz      Run the fuzz target for 60 seconds (requires cargo-fuzz, nightly)
  kani      Run model checking proofs (requires cargo-kani)
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("levdist Verification Suite");
    println!("==========================================\n");

    println!("[1/4] Checking contract calls...");
    check_contract_calls()?;
    println!("✓ Contract calls present\n");

    println!("[2/4] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    println!("[3/4] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy clean\n");

    println!("[4/4] Checking wasm feature...");
    run_cargo(&["check", "--quiet", "--features", "wasm"])?;
    println!("✓ wasm bindings build\n");

    println!("==========================================");
    println!("All checks passed");
    println!("==========================================");
    Ok(())
}

fn test() -> Result<()> {
    run_cargo(&["test"])
}

fn check() -> Result<()> {
    run_cargo(&["test", "--quiet"])?;
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;
    println!("✓ Quick check passed");
    Ok(())
}

fn bench() -> Result<()> {
    run_cargo(&["bench", "--bench", "distance_bench"])
}

fn fuzz() -> Result<()> {
    let root = project_root()?;
    run_cargo_in(
        &root.join("fuzz"),
        &[
            "+nightly",
            "fuzz",
            "run",
            "bounded_matches_exact",
            "--",
            "-max_total_time=60",
        ],
    )
}

fn kani() -> Result<()> {
    run_cargo(&["kani"])
}

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    run_cargo_in(&project_root()?, args)
}

fn run_cargo_in(dir: &Path, args: &[&str]) -> Result<()> {
    let status = Command::new("cargo")
        .args(args)
        .current_dir(dir)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

fn check_contract_calls() -> Result<()> {
    let root = project_root()?;

    for (file, contracts) in REQUIRED_CONTRACTS {
        let path = root.join(file);
        let source = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        for contract in *contracts {
            let call = format!("{}(", contract);
            if !source.contains(&call) {
                bail!(
                    "{} no longer calls {}. Someone may have removed a DP invariant check!",
                    file,
                    contract
                );
            }
        }
    }

    Ok(())
}
