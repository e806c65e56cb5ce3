//! netbox-config: NetBox connection settings resolver
//!
//! Entry point for the netbox-config application.

use netbox_config::config::{Cli, ResolutionContext};
use std::process::ExitCode;

mod app;
mod run;

#[cfg(test)]
mod run_tests;

use app::{exit_code, print_config_hint, setup_tracing};
use run::RunError;

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();
    setup_tracing(cli.verbose);

    let ctx = match ResolutionContext::from_system(cli.connection.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            print_config_hint(&e);
            return exit_code::CONFIG_ERROR;
        }
    };

    let mut stdout = std::io::stdout().lock();
    match run::execute(&cli, &ctx, &mut stdout) {
        Ok(()) => exit_code::SUCCESS,
        Err(RunError::Config(e)) => {
            eprintln!("Configuration error: {e}");
            print_config_hint(&e);
            exit_code::CONFIG_ERROR
        }
        Err(e) => {
            tracing::error!("{e}");
            exit_code::runtime_error()
        }
    }
}
