//! Console output for rename plans and their results.

use colored::Colorize;

use crate::media_format::{ApplySummary, MatchSet, RenameAction, RenameEntry, RenamePlan};

/// Plain one-line description of a plan entry.
#[must_use]
pub fn describe_entry(entry: &RenameEntry) -> String {
    match &entry.action {
        RenameAction::Rename(_) if entry.is_unchanged() => {
            format!("{} is already named correctly", entry.original)
        }
        RenameAction::Rename(new_name) => format!("{} -> {new_name}", entry.original),
        RenameAction::Skip(reason) => format!("{} will be skipped: {reason}", entry.original),
    }
}

/// Print the winning strategy and token.
pub fn print_match_info(matches: &MatchSet) {
    println!(
        "Matched {} file(s) with {} token '{}'",
        matches.files().len(),
        matches.strategy(),
        matches.token()
    );
}

/// Print every entry of the plan, with a coloured diff for renamed files.
pub fn print_plan(plan: &RenamePlan) {
    println!("{}", "The following files will be renamed:".bold().magenta());
    let max_items = plan.entries().len();
    let max_chars = max_items.checked_ilog10().map_or(1, |d| d as usize + 1);
    for (index, entry) in plan.entries().iter().enumerate() {
        let number = format!("{:>max_chars$} / {max_items}", index + 1);
        match &entry.action {
            RenameAction::Rename(new_name) if !entry.is_unchanged() => {
                println!("{}", format!("Rename {number}:").bold().cyan());
                crate::show_diff(&entry.original, new_name);
            }
            RenameAction::Rename(_) => {
                println!("{}", format!("Keep {number}:").bold().dimmed());
                println!("{}", describe_entry(entry).dimmed());
            }
            RenameAction::Skip(_) => {
                println!("{}", format!("Skip {number}:").bold().yellow());
                println!("{}", describe_entry(entry).yellow());
            }
        }
    }
}

/// Print the outcome of an applied plan, including every failed rename.
pub fn print_summary(summary: &ApplySummary) {
    for failure in &summary.failures {
        crate::print_error!("Failed to rename {failure}");
    }
    if summary.is_partial() {
        crate::print_warning!(
            "Plan was only partially applied: {} renamed, {} failed. Renamed files keep their new names.",
            summary.renamed.len(),
            summary.failures.len()
        );
    }

    let message = format!(
        "Renamed {} {}",
        summary.renamed.len(),
        if summary.renamed.len() == 1 { "file" } else { "files" }
    );
    if summary.has_failures() {
        println!("{}", message.yellow());
    } else {
        println!("{}", message.green());
    }
    if summary.skipped > 0 {
        println!("Skipped {} without episode number or with a duplicate name", summary.skipped);
    }
    if summary.unchanged > 0 {
        println!("{} already named correctly", summary.unchanged);
    }
}
