//! Formatting functions for console output.
//!
//! Lines are colored with `console`, which drops styling automatically when
//! the stream is not a terminal.

use console::style;

use crate::release::ReleasePlan;
use crate::warning::ReleaseWarning;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a release warning to the user.
pub fn display_warning(warning: &ReleaseWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Text of the completion banner.
pub const COMPLETE_BANNER: &str = "Deployment complete.";

/// Text of the start banner for a run started at `timestamp`.
pub fn format_start_banner(timestamp: &str) -> String {
    format!("Starting automated deployment ({})", timestamp)
}

/// Print the banner shown before the first step runs.
pub fn display_start_banner(timestamp: &str) {
    println!("{}", style(format_start_banner(timestamp)).bold());
}

/// Print the banner shown after a successful deploy.
pub fn display_complete_banner() {
    println!("{}", style(COMPLETE_BANNER).green().bold());
}

/// Render a release plan as numbered lines, one command per step.
pub fn format_plan(plan: &ReleasePlan) -> Vec<String> {
    plan.steps
        .iter()
        .enumerate()
        .map(|(i, step)| format!("Step {}: {:<13} {}", i + 1, step.label, step.command))
        .collect()
}

/// Display what a run would execute without executing it.
pub fn display_plan(plan: &ReleasePlan) {
    display_status("Dry run, nothing will be executed:");
    for line in format_plan(plan) {
        println!("  {}", style(line).cyan());
    }
}
