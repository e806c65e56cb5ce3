//! Tests for CLI argument parsing.

use std::path::Path;

use clap::Parser;

use super::cli::{Cli, Command, ConnectionArgs};
use super::settings::{Field, SettingsSource};

mod parsing {
    use super::*;

    #[test]
    fn parse_no_args() {
        let cli = Cli::parse_from_iter(["netbox-config"]);

        assert_eq!(cli.connection, ConnectionArgs::default());
        assert!(cli.command.is_none());
        assert!(!cli.graphql);
        assert!(!cli.json);
        assert!(!cli.show_token);
        assert!(!cli.verbose);
    }

    #[test]
    fn parse_connection_options() {
        let cli = Cli::parse_from_iter([
            "netbox-config",
            "--instance",
            "prod",
            "--config",
            "/etc/netbox/config.ini",
            "--url",
            "https://netbox.example.com/api",
            "--token",
            "abc123",
            "--graphql-url",
            "https://netbox.example.com/graphql",
        ]);

        let conn = &cli.connection;
        assert_eq!(conn.instance.as_deref(), Some("prod"));
        assert_eq!(
            conn.config.as_deref(),
            Some(Path::new("/etc/netbox/config.ini"))
        );
        assert_eq!(conn.url.as_deref(), Some("https://netbox.example.com/api"));
        assert_eq!(conn.token.as_deref(), Some("abc123"));
        assert_eq!(
            conn.graphql_url.as_deref(),
            Some("https://netbox.example.com/graphql")
        );
    }

    #[test]
    fn parse_output_flags() {
        let cli = Cli::parse_from_iter([
            "netbox-config",
            "--graphql",
            "--json",
            "--show-token",
            "-v",
        ]);

        assert!(cli.graphql);
        assert!(cli.json);
        assert!(cli.show_token);
        assert!(cli.verbose);
    }

    #[test]
    fn parse_instances_command() {
        let cli = Cli::parse_from_iter(["netbox-config", "instances"]);

        assert_eq!(cli.command, Some(Command::Instances));
        assert!(cli.is_instances());
    }

    #[test]
    fn connection_options_after_subcommand() {
        let cli = Cli::parse_from_iter(["netbox-config", "instances", "--config", "x.ini"]);

        assert!(cli.is_instances());
        assert_eq!(cli.connection.config.as_deref(), Some(Path::new("x.ini")));
    }

    #[test]
    fn unknown_flag_is_rejected() {
        let result = Cli::try_parse_from(["netbox-config", "--bogus"]);

        assert!(result.is_err());
    }
}

mod flatten {
    use super::*;

    /// A consumer tool embedding the connection options.
    #[derive(Debug, Parser)]
    struct ToolCli {
        #[command(flatten)]
        connection: ConnectionArgs,

        /// Tool-specific option
        #[arg(long)]
        site: Option<String>,
    }

    #[test]
    fn connection_args_flatten_into_other_parsers() {
        let cli = ToolCli::parse_from(["tool", "--site", "fra1", "--instance", "test"]);

        assert_eq!(cli.site.as_deref(), Some("fra1"));
        assert_eq!(cli.connection.instance.as_deref(), Some("test"));
    }
}

mod settings_source {
    use super::*;

    #[test]
    fn supplies_given_values_only() {
        let args = ConnectionArgs {
            url: Some("https://cli.example/api".to_string()),
            ..ConnectionArgs::default()
        };

        assert_eq!(args.value(Field::Url), Some("https://cli.example/api"));
        assert_eq!(args.value(Field::Token), None);
        assert_eq!(args.value(Field::GraphqlUrl), None);
    }

    #[test]
    fn instance_and_config_are_not_settings() {
        let args = ConnectionArgs {
            instance: Some("prod".to_string()),
            config: Some("c.ini".into()),
            ..ConnectionArgs::default()
        };

        assert!(Field::ALL.iter().all(|&f| args.value(f).is_none()));
    }
}
