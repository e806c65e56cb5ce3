//! Configuration layer for netbox-config.
//!
//! This module provides:
//! - CLI argument parsing ([`ConnectionArgs`], [`Cli`], [`Command`])
//! - Environment snapshot ([`Env`])
//! - INI configuration file parsing ([`ConfigDocument`])
//! - Instance selection ([`select_instance`])
//! - Settings resolution ([`Resolver`], [`ResolutionContext`])
//! - Well-known names ([`defaults`])
//!
//! # Priority
//!
//! Settings are resolved with the following priority (highest to lowest):
//!
//! 1. **Command-line arguments** - `--url`, `--token`, `--graphql-url`
//! 2. **Environment variables** - `NETBOX_URL`, `NETBOX_TOKEN`, `NETBOX_GRAPHQL_URL`
//! 3. **Config file** - the section of the selected instance
//!
//! Each layer replaces a field only if it supplies a value for it, so a
//! config file providing only `URL` can be completed by `NETBOX_TOKEN`.
//!
//! The instance itself is selected by `--instance`, then `NETBOX_INSTANCE`,
//! then `Instance` in the `[Main]` section. The config file is located by
//! `--config`, then `NETBOX_CONFIG`, then `config.ini` in the platform
//! config directory. A missing config file is treated as empty.
//!
//! # Missing Values
//!
//! Validation happens once, after all layers were applied. All missing
//! fields are reported together in [`ConfigError::MissingFields`].
//! [`LoadPolicy::Strict`] restores the older behavior of failing early on a
//! missing instance, section or key.

mod cli;
pub mod defaults;
mod env;
mod error;
mod ini;
mod resolver;
mod selector;
mod settings;

#[cfg(test)]
mod cli_tests;
#[cfg(test)]
mod selector_tests;

pub use cli::{Cli, Command, ConnectionArgs};
pub use env::Env;
pub use error::ConfigError;
pub use ini::{ConfigDocument, LoadPolicy, config_path, default_config_path};
pub use resolver::{
    ResolutionContext, Resolver, authorization_value, resolve_config, resolve_graphql_config,
    resolve_settings,
};
pub use selector::{InstanceOrigin, SelectedInstance, select_instance};
pub use settings::{Field, GraphqlSettings, RestSettings, Settings, SettingsSource};
