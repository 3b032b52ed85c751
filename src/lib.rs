pub mod backends;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod project_identity;
pub mod queue;
pub mod traits;
pub mod ui;
pub mod utils;

use clap::Parser;
use std::process::ExitCode;

/// Run pkgdeck CLI entrypoint.
pub fn run_cli() -> ExitCode {
    let args = cli::args::Cli::parse();
    ui::set_quiet(args.global.quiet);
    ui::set_verbose(args.global.verbose);

    match cli::dispatcher::dispatch(&args) {
        Ok(code) => code,
        Err(e) => {
            ui::error(&format!("{}", e));
            ExitCode::FAILURE
        }
    }
}
