//! Live package search

use crate::backends::{CommandRunner, WingetManager};
use crate::commands::print_records;
use crate::error::Result;
use crate::ui as output;
use crate::utils::machine_output;
use colored::Colorize;

pub struct SearchOptions {
    pub query: String,
    pub json: bool,
}

/// Warning when the configured binary cannot be found; commands still run and
/// degrade to empty results.
pub(crate) fn availability_warnings<R: CommandRunner>(manager: &WingetManager<R>) -> Vec<String> {
    if manager.is_available() {
        Vec::new()
    } else {
        vec![format!(
            "Package manager '{}' was not found on PATH; results will be empty",
            manager.binary()
        )]
    }
}

pub fn run<R: CommandRunner>(options: SearchOptions, manager: &WingetManager<R>) -> Result<()> {
    let warnings = availability_warnings(manager);
    let results = manager.search(&options.query);

    if options.json {
        return machine_output::emit_v1("search", &results, warnings, Vec::new());
    }

    for warning in &warnings {
        output::warning(warning);
    }

    output::header(&format!("Search results for '{}'", options.query.cyan()));
    print_records(&results.iter().collect::<Vec<_>>());

    if !results.is_empty() {
        output::info(&format!("{} package(s) found", results.len()));
    }

    Ok(())
}
