pub mod apply;
pub mod catalog;
pub mod installed;
pub mod search;

use crate::core::types::PackageRecord;
use crate::ui;
use colored::Colorize;

const MIN_NAME_WIDTH: usize = 4;

/// Width of the Name column for `records`.
fn name_width(records: &[&PackageRecord]) -> usize {
    records
        .iter()
        .map(|r| r.name.chars().count())
        .max()
        .unwrap_or(0)
        .max(MIN_NAME_WIDTH)
}

fn format_row(name: &str, identifier: &str, width: usize) -> String {
    format!("{:<width$}  {}", name, identifier, width = width)
}

/// Two-column Name/Id table, the same shape the package manager prints.
pub(crate) fn print_records(records: &[&PackageRecord]) {
    if records.is_empty() {
        ui::info("No packages found.");
        return;
    }

    let width = name_width(records);
    println!("{}", format_row("Name", "Id", width).bold());
    println!("{}", "-".repeat(width + 2 + MIN_NAME_WIDTH * 4).bright_black());
    for record in records {
        println!(
            "{}  {}",
            format!("{:<width$}", record.name, width = width),
            record.identifier.cyan()
        );
    }
}
