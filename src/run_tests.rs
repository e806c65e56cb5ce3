//! Tests for command execution.

use netbox_config::config::{Cli, ConfigDocument, ConfigError, Env, Field, ResolutionContext};

use super::run::{RunError, display_token, execute};

const CONFIG: &str = "\
[Main]
Instance=prod

[prod]
URL=https://prod.example.com/api
Token=1234567890abcdef

[test]
URL=https://test.example.com/api
Token=qwertyqwertz12345
GraphQL-URL=https://test.example.com/graphql/
";

fn cli(args: &[&str]) -> Cli {
    let mut full_args = vec!["netbox-config"];
    full_args.extend(args);
    Cli::parse_from_iter(full_args)
}

/// Runs `args` against the sample config and returns stdout.
fn run(args: &[&str]) -> Result<String, RunError> {
    let cli = cli(args);
    let ctx = ResolutionContext::new(
        cli.connection.clone(),
        Env::empty(),
        ConfigDocument::parse(CONFIG).unwrap(),
    );

    let mut out = Vec::new();
    execute(&cli, &ctx, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

mod rest_output {
    use super::*;

    #[test]
    fn text_output_masks_token() {
        let out = run(&[]).unwrap();

        assert_eq!(
            out,
            "url: https://prod.example.com/api\ntoken: 1234************\n"
        );
    }

    #[test]
    fn show_token_prints_clear_text() {
        let out = run(&["--show-token"]).unwrap();

        assert!(out.contains("token: 1234567890abcdef\n"));
    }

    #[test]
    fn json_output() {
        let out = run(&["--json", "--show-token", "--instance", "test"]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "url": "https://test.example.com/api",
                "token": "qwertyqwertz12345",
            })
        );
    }
}

mod graphql_output {
    use super::*;

    #[test]
    fn text_output() {
        let out = run(&["--graphql", "--instance", "test", "--show-token"]).unwrap();

        assert_eq!(
            out,
            "graphql_url: https://test.example.com/graphql/\n\
             Authorization: Token qwertyqwertz12345\n"
        );
    }

    #[test]
    fn json_output_masks_token() {
        let out = run(&["--graphql", "--json", "--instance", "test"]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["graphql_url"], "https://test.example.com/graphql/");
        assert_eq!(value["headers"]["Authorization"], "Token qwer*************");
    }

    #[test]
    fn missing_endpoint_is_config_error() {
        let result = run(&["--graphql"]);

        let Err(RunError::Config(ConfigError::MissingFields { fields, .. })) = &result else {
            panic!("expected missing fields, got {result:?}");
        };
        assert_eq!(fields, &[Field::GraphqlUrl]);
    }
}

mod instances {
    use super::*;

    #[test]
    fn lists_instances_with_default_marked() {
        let out = run(&["instances"]).unwrap();

        assert_eq!(out, "prod (default)\ntest\n");
    }

    #[test]
    fn empty_config_prints_nothing() {
        let cli = cli(&["instances"]);
        let ctx = ResolutionContext::new(cli.connection.clone(), Env::empty(), ConfigDocument::default());

        let mut out = Vec::new();
        execute(&cli, &ctx, &mut out).unwrap();

        assert!(out.is_empty());
    }
}

mod token_masking {
    use super::*;

    #[test]
    fn long_token_keeps_prefix() {
        assert_eq!(display_token("1234567890", false), "1234******");
    }

    #[test]
    fn short_token_fully_masked() {
        assert_eq!(display_token("abc", false), "***");
        assert_eq!(display_token("12345678", false), "********");
    }

    #[test]
    fn shown_token_unchanged() {
        assert_eq!(display_token("abc", true), "abc");
    }
}
