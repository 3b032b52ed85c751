use std::process::ExitCode;

fn main() -> ExitCode {
    pkgdeck::run_cli()
}
