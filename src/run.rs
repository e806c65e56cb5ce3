//! Command execution for the netbox-config binary.
//!
//! Everything here writes to an injected writer so it can be tested
//! without touching stdout.

use std::io::{self, Write};

use netbox_config::config::{
    Cli, ConfigError, Field, ResolutionContext, Resolver, RestSettings, authorization_value,
    defaults,
};
use thiserror::Error;

/// Errors from running a command.
#[derive(Debug, Error)]
pub enum RunError {
    /// Settings could not be resolved.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Writing the output failed.
    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),

    /// Serializing JSON output failed.
    #[error("Failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
}

/// Runs the command selected by `cli` against `ctx`.
///
/// # Errors
///
/// Returns an error if resolution fails or the output cannot be written.
pub fn execute<W: Write>(cli: &Cli, ctx: &ResolutionContext, out: &mut W) -> Result<(), RunError> {
    if cli.is_instances() {
        return list_instances(ctx, out);
    }

    let resolver = Resolver::new();
    if cli.graphql {
        print_graphql(cli, &resolver, ctx, out)
    } else {
        print_rest(cli, &resolver, ctx, out)
    }
}

fn print_rest<W: Write>(
    cli: &Cli,
    resolver: &Resolver,
    ctx: &ResolutionContext,
    out: &mut W,
) -> Result<(), RunError> {
    let settings = resolver.resolve_rest(ctx)?;
    let token = display_token(&settings.token, cli.show_token);

    if cli.json {
        let shown = RestSettings {
            url: settings.url,
            token,
        };
        serde_json::to_writer_pretty(&mut *out, &shown)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}: {}", Field::Url, settings.url)?;
        writeln!(out, "{}: {token}", Field::Token)?;
    }
    Ok(())
}

fn print_graphql<W: Write>(
    cli: &Cli,
    resolver: &Resolver,
    ctx: &ResolutionContext,
    out: &mut W,
) -> Result<(), RunError> {
    let settings = resolver.resolve(ctx, &Field::GRAPHQL)?;
    let endpoint = settings.graphql_url.unwrap_or_default();
    let token = settings.token.unwrap_or_default();
    authorization_value(&token)?;

    let authorization = format!(
        "{} {}",
        defaults::AUTH_SCHEME,
        display_token(&token, cli.show_token)
    );

    if cli.json {
        let value = serde_json::json!({
            "graphql_url": endpoint,
            "headers": { "Authorization": authorization },
        });
        serde_json::to_writer_pretty(&mut *out, &value)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}: {endpoint}", Field::GraphqlUrl)?;
        writeln!(out, "Authorization: {authorization}")?;
    }
    Ok(())
}

fn list_instances<W: Write>(ctx: &ResolutionContext, out: &mut W) -> Result<(), RunError> {
    let doc = &ctx.document;
    let default = doc.default_instance();

    if doc.instances().next().is_none() {
        match &ctx.config_path {
            Some(path) => tracing::warn!("No instances defined in {}", path.display()),
            None => tracing::warn!("No config file available"),
        }
        return Ok(());
    }

    for name in doc.instances() {
        if Some(name) == default {
            writeln!(out, "{name} (default)")?;
        } else {
            writeln!(out, "{name}")?;
        }
    }
    Ok(())
}

/// Masks a token for display unless `show` is set.
///
/// Tokens longer than eight characters keep their first four characters.
pub fn display_token(token: &str, show: bool) -> String {
    if show {
        return token.to_string();
    }

    let len = token.chars().count();
    if len > 8 {
        let prefix: String = token.chars().take(4).collect();
        format!("{prefix}{}", "*".repeat(len - 4))
    } else {
        "*".repeat(len)
    }
}
