use anyhow::{Context, Result};
use colored::Colorize;
use std::process::{Command, Output};
use std::time::Instant;

/// Device target the no_std crates must build for.
pub const DEVICE_TARGET: &str = "thumbv7em-none-eabihf";

/// Crates that must stay no_std (no `std` feature on the device).
pub const NO_STD_CRATES: [&str; 4] = ["catalog", "bluetooth", "ui", "render"];

/// Run `cargo <args>` and report how long it took.
pub fn cargo(label: &str, args: &[&str]) -> Result<(Output, f64)> {
    println!("{}", format!("  {label}...").cyan());
    let start = Instant::now();
    let output = Command::new("cargo")
        .args(args)
        .output()
        .with_context(|| format!("Failed to run cargo for: {label}"))?;
    Ok((output, start.elapsed().as_secs_f64()))
}

fn fail(label: &str, output: &Output) -> anyhow::Error {
    eprintln!("{}", format!("  ✗ {label} failed").red().bold());
    eprintln!();
    eprintln!("{}", String::from_utf8_lossy(&output.stderr));
    anyhow::anyhow!("{label} failed")
}

pub fn run() -> Result<()> {
    println!();
    println!("{}", "🔍 Checking workspace...".cyan().bold());
    println!();

    let total_start = Instant::now();

    // Check 1: no_std crates on the device target
    for krate in NO_STD_CRATES {
        let label = format!("Checking {krate} (no_std, {DEVICE_TARGET})");
        let (output, secs) = cargo(
            &label,
            &["check", "-p", krate, "--target", DEVICE_TARGET, "--no-default-features"],
        )?;
        if !output.status.success() {
            return Err(fail(&label, &output));
        }
        println!("{}", format!("  ✓ {krate} passed in {secs:.2}s").green());
    }
    println!();

    // Check 2: the whole workspace on the host
    let (output, secs) = cargo("Checking workspace (host)", &["check", "--workspace", "--all-targets"])?;
    if !output.status.success() {
        return Err(fail("Host check", &output));
    }
    println!("{}", format!("  ✓ Host check passed in {secs:.2}s").green());
    println!();

    // Check 3: Clippy lints
    let (output, secs) = cargo(
        "Running clippy lints",
        &["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"],
    )?;
    if output.status.success() {
        println!("{}", format!("  ✓ Clippy passed in {secs:.2}s").green());
    } else {
        eprintln!("{}", "  ⚠ Clippy warnings found".yellow().bold());
        eprintln!();
        eprintln!("{}", String::from_utf8_lossy(&output.stderr));
        // Don't fail on clippy warnings, just show them
    }
    println!();

    // Check 4: Format check
    let (output, _) = cargo("Checking code formatting", &["fmt", "--all", "--check"])?;
    if output.status.success() {
        println!("{}", "  ✓ Formatting check passed".green());
    } else {
        eprintln!("{}", "  ⚠ Formatting issues found".yellow().bold());
        eprintln!("     Run 'cargo fmt --all' to fix");
    }
    println!();

    println!(
        "{}",
        format!(
            "✓ All checks completed in {:.2}s",
            total_start.elapsed().as_secs_f64()
        )
        .green()
        .bold()
    );
    println!();

    Ok(())
}
