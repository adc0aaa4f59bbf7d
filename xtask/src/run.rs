use anyhow::{Context, Result};
use colored::Colorize;
use std::process::Command;

/// Build and launch `waste-scanner` attached to this terminal.
pub fn run(release: bool, args: &[String]) -> Result<()> {
    println!();
    println!("{}", "♻  Launching waste scanner simulator...".cyan().bold());
    println!("{}", "   Type 'help' for commands, 'quit' to leave.".dimmed());
    println!();

    let mut cmd = Command::new("cargo");
    cmd.args(["run", "-p", "simulator", "--bin", "waste-scanner"]);
    if release {
        cmd.arg("--release");
    }
    if !args.is_empty() {
        cmd.arg("--").args(args);
    }

    let status = cmd.status().context("Failed to launch simulator")?;
    if !status.success() {
        anyhow::bail!("Simulator exited with {status}");
    }
    Ok(())
}
