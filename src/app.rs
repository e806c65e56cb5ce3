//! Application startup and utilities.
//!
//! This module contains exit codes, tracing setup, and error hints
//! that support the main entry point.

use netbox_config::config::{ConfigError, Field, defaults};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Configuration error (exit code 1) - unreadable config, missing settings, etc.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// Runtime error (exit code 2) - output could not be written.
    ///
    /// Note: This is a function rather than a constant because `ExitCode::from()` is not `const fn`.
    pub fn runtime_error() -> ExitCode {
        ExitCode::from(2)
    }
}

/// Returns a hint for how to supply a missing field.
#[must_use]
pub fn field_hint(field: Field) -> String {
    let flag = match field {
        Field::Url => "--url",
        Field::Token => "--token",
        Field::GraphqlUrl => "--graphql-url",
    };
    format!(
        "{field}: use {flag}, set {} or add {} to the instance section",
        field.env_var(),
        field.ini_key()
    )
}

/// Prints helpful hints for common configuration errors.
pub fn print_config_hint(error: &ConfigError) {
    match error {
        ConfigError::MissingFields { fields, instance } => {
            eprintln!();
            for field in fields {
                eprintln!("  {}", field_hint(*field));
            }
            if instance.is_none() {
                eprintln!(
                    "  instance: use --instance, set {} or add {}=<name> to the [{}] section",
                    defaults::ENV_INSTANCE,
                    defaults::MAIN_INSTANCE_KEY,
                    defaults::MAIN_SECTION
                );
            }
        }
        ConfigError::MissingSection { .. } => {
            eprintln!("\nRun 'netbox-config instances' to list the configured instances.");
        }
        _ => {}
    }
}

/// Sets up the tracing subscriber for logging.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
