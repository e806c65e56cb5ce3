//! CLI argument parsing using clap.
//!
//! [`ConnectionArgs`] is the reusable argument group: any tool can
//! `#[command(flatten)]` it into its own parser. [`Cli`] is the parser of
//! the `netbox-config` binary itself.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::settings::{Field, SettingsSource};

/// Connection options shared by every NetBox command-line tool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Args)]
pub struct ConnectionArgs {
    /// Name of the instance to use from the config file
    #[arg(long, global = true)]
    pub instance: Option<String>,

    /// Path to the config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// URL of the NetBox API endpoint
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Token for the NetBox REST API
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// URL of the GraphQL endpoint
    #[arg(long = "graphql-url", global = true)]
    pub graphql_url: Option<String>,
}

impl SettingsSource for ConnectionArgs {
    fn source_name(&self) -> &'static str {
        "command line"
    }

    fn value(&self, field: Field) -> Option<&str> {
        match field {
            Field::Url => self.url.as_deref(),
            Field::Token => self.token.as_deref(),
            Field::GraphqlUrl => self.graphql_url.as_deref(),
        }
    }
}

/// netbox-config: NetBox connection settings resolver
///
/// Resolves the API URL, GraphQL URL and token from command-line options,
/// NETBOX_* environment variables and the config file.
#[derive(Debug, Parser)]
#[command(name = "netbox-config")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Connection options
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Resolve the GraphQL endpoint instead of the REST API URL
    #[arg(long)]
    pub graphql: bool,

    /// Print the resolved settings as JSON
    #[arg(long)]
    pub json: bool,

    /// Print the token in clear text instead of masking it
    #[arg(long = "show-token")]
    pub show_token: bool,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

/// Subcommands for netbox-config
#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// List the instances defined in the config file
    Instances,
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if this is the instances command.
    #[must_use]
    pub const fn is_instances(&self) -> bool {
        matches!(self.command, Some(Command::Instances))
    }
}
