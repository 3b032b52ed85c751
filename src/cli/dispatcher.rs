//! Command dispatcher
//!
//! Loads settings, applies global flag overrides, and routes commands to their handlers.

use crate::backends::WingetManager;
use crate::cli::args::{Cli, Command, GlobalFlags};
use crate::commands;
use crate::config::{self, Settings};
use crate::core::types::{ActionKind, Summary};
use crate::error::{PkgdeckError, Result};
use crate::project_identity;
use crate::ui as output;
use std::process::ExitCode;

/// Dispatch the parsed CLI command to the appropriate handler
pub fn dispatch(args: &Cli) -> Result<ExitCode> {
    let settings = apply_overrides(Settings::load()?, &args.global)?;
    output::init_colors(&settings.color);
    output::verbose(&format!("Package manager: {}", settings.binary));

    let Some(command) = &args.command else {
        print_quick_start();
        return Ok(ExitCode::SUCCESS);
    };

    let manager = WingetManager::new(&settings.binary);
    let json = args.global.json;

    match command {
        Command::Search { query } => commands::search::run(
            commands::search::SearchOptions {
                query: query.clone(),
                json,
            },
            &manager,
        )?,

        Command::Installed { filter } => commands::installed::run(
            commands::installed::InstalledOptions {
                filter: filter.clone(),
                json,
            },
            &manager,
        )?,

        Command::Catalog {
            category,
            filter,
            with_search,
        } => commands::catalog::run(
            commands::catalog::CatalogOptions {
                category: category.clone(),
                filter: filter.clone(),
                with_search: with_search.clone(),
                json,
            },
            config::load_catalog(&settings)?,
            &manager,
        )?,

        Command::Categories => {
            commands::catalog::categories(&config::load_catalog(&settings)?, json)?
        }

        Command::Install { ids } => {
            return handle_apply(ActionKind::Install, ids, &settings, json, manager);
        }

        Command::Uninstall { ids } => {
            return handle_apply(ActionKind::Uninstall, ids, &settings, json, manager);
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn handle_apply(
    action: ActionKind,
    ids: &[String],
    settings: &Settings,
    json: bool,
    manager: WingetManager,
) -> Result<ExitCode> {
    let summary = commands::apply::run(
        commands::apply::ApplyOptions {
            action,
            ids: ids.to_vec(),
            progress: settings.progress,
            json,
        },
        manager,
    )?;

    Ok(exit_code_for(summary))
}

/// `--binary` replaces the binary from the settings file.
pub(crate) fn apply_overrides(mut settings: Settings, global: &GlobalFlags) -> Result<Settings> {
    if let Some(binary) = global.binary.as_deref() {
        if binary.trim().is_empty() {
            return Err(PkgdeckError::ConfigError(
                "--binary cannot be empty".to_string(),
            ));
        }
        settings.binary = binary.trim().to_string();
    }
    Ok(settings)
}

/// A cancelled batch ends the process with status 1.
pub(crate) fn summary_failed(summary: Summary) -> bool {
    summary == Summary::Cancelled
}

fn exit_code_for(summary: Summary) -> ExitCode {
    if summary_failed(summary) {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn print_quick_start() {
    output::info("No command provided.");
    output::info("Quick start:");
    output::indent(&project_identity::cli_with("search \"visual studio code\""), 2);
    output::indent(&project_identity::cli_with("catalog --category Development"), 2);
    output::indent(&project_identity::cli_with("install Git.Git Microsoft.VisualStudioCode"), 2);
    output::indent(&project_identity::cli_with("uninstall Git.Git"), 2);
    output::info(&format!(
        "Use `{}` for full command list.",
        project_identity::cli_with("--help")
    ));
}
