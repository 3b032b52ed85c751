//! Installed package listing

use crate::backends::{CommandRunner, WingetManager};
use crate::commands::print_records;
use crate::commands::search::availability_warnings;
use crate::error::Result;
use crate::ui as output;
use crate::utils::machine_output;

pub struct InstalledOptions {
    pub filter: Option<String>,
    pub json: bool,
}

pub fn run<R: CommandRunner>(options: InstalledOptions, manager: &WingetManager<R>) -> Result<()> {
    let warnings = availability_warnings(manager);
    let needle = options.filter.as_deref().unwrap_or("");
    let installed: Vec<_> = manager
        .list_installed()
        .into_iter()
        .filter(|record| record.matches(needle))
        .collect();

    if options.json {
        return machine_output::emit_v1("installed", &installed, warnings, Vec::new());
    }

    for warning in &warnings {
        output::warning(warning);
    }

    output::header("Installed packages");
    print_records(&installed.iter().collect::<Vec<_>>());

    if !installed.is_empty() {
        output::info(&format!("{} package(s)", installed.len()));
    }

    Ok(())
}
