use anyhow::Result;
use colored::Colorize;

use crate::check::cargo;

/// Crates whose docs are worth opening first, in reading order.
const ENTRY_POINTS: [&str; 3] = ["ui", "render", "catalog"];

pub fn run(open: bool) -> Result<()> {
    println!();
    println!("{}", "📚 Building documentation...".cyan().bold());
    println!();

    let mut args = vec!["doc", "--workspace", "--no-deps", "--document-private-items"];
    if open {
        args.push("--open");
    }
    let (output, secs) = cargo("Running cargo doc", &args)?;

    if !output.status.success() {
        eprintln!("{}", "✗ Documentation build failed".red().bold());
        eprintln!();
        eprintln!("{}", String::from_utf8_lossy(&output.stderr));
        anyhow::bail!("Documentation build failed");
    }

    println!("{}", format!("✓ Documentation built in {secs:.2}s").green());

    if !open {
        println!();
        for krate in ENTRY_POINTS {
            println!("   {}", format!("target/doc/{krate}/index.html").dimmed());
        }
        println!("   {}", "Or run 'cargo xtask doc --open'".dimmed());
    }

    println!();

    Ok(())
}
