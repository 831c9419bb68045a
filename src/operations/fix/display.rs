//! Display helpers for fix operation output

use console::Style;
use std::path::Path;

use super::{FixOptions, FixOutcome, FixReport};
use crate::discovery::skill_name;

/// Print the run banner
pub fn print_header(root: &Path, options: &FixOptions) {
    println!("{}", Style::new().bold().apply_to("=== Frontmatter Fixer ==="));
    println!("Skills directory: {}", root.display());
    println!("Dry run: {}", options.dry_run);
    println!();
}

/// Print the outcome for one skill file
pub fn print_outcome(path: &Path, outcome: FixOutcome, verbose: bool) {
    match outcome {
        FixOutcome::Fixed => println!(
            "  {} Fixed: {}",
            Style::new().green().apply_to("✓"),
            skill_name(path)
        ),
        FixOutcome::WouldFix => println!(
            "  {} {}",
            Style::new().cyan().apply_to("Would fix:"),
            skill_name(path)
        ),
        FixOutcome::Malformed => eprintln!(
            "  {} No closing --- found in {}",
            Style::new().yellow().for_stderr().apply_to("⚠"),
            path.display()
        ),
        FixOutcome::Unchanged if verbose => println!(
            "  {} {}",
            Style::new().dim().apply_to("Unchanged:"),
            skill_name(path)
        ),
        FixOutcome::Unchanged => {}
    }
}

/// Print the final tally
pub fn print_summary(report: &FixReport, options: &FixOptions) {
    println!();
    println!("{}", Style::new().bold().apply_to("=== Summary ==="));
    if options.verbose {
        println!("Checked: {} skills", report.total());
    }
    println!("Fixed: {} skills", report.fixed());

    let malformed = report.malformed();
    if malformed > 0 {
        println!(
            "{} {}",
            Style::new().yellow().apply_to("Malformed:"),
            malformed
        );
    }

    if options.dry_run {
        println!();
        println!("This was a dry run. Run without 'true' to apply changes.");
    }
}
