//! Settings resolution across command line, environment and config file.
//!
//! The cascade always runs in the same order and never short-circuits:
//!
//! 1. Select the instance (see [`select_instance`]).
//! 2. Read that instance's section from the config file.
//! 3. Overlay `NETBOX_*` environment variables.
//! 4. Overlay command-line arguments.
//! 5. Validate the required fields, reporting all missing ones at once.

use std::path::PathBuf;

use http::HeaderMap;
use http::header::{AUTHORIZATION, HeaderValue};

use super::cli::ConnectionArgs;
use super::defaults;
use super::env::Env;
use super::error::ConfigError;
use super::ini::{ConfigDocument, LoadPolicy, config_path};
use super::selector::select_instance;
use super::settings::{Field, GraphqlSettings, RestSettings, Settings};

/// Inputs of a single resolution: arguments, environment and config file.
///
/// Built fresh for every resolution; nothing is cached between calls.
#[derive(Debug, Clone, Default)]
pub struct ResolutionContext {
    /// Parsed command-line arguments
    pub args: ConnectionArgs,
    /// Environment snapshot
    pub env: Env,
    /// Loaded config file (empty if there is none)
    pub document: ConfigDocument,
    /// Path the document was loaded from, if any
    pub config_path: Option<PathBuf>,
}

impl ResolutionContext {
    /// Creates a context from already-loaded parts.
    #[must_use]
    pub const fn new(args: ConnectionArgs, env: Env, document: ConfigDocument) -> Self {
        Self {
            args,
            env,
            document,
            config_path: None,
        }
    }

    /// Creates a context, loading the config file named by `--config`,
    /// `NETBOX_CONFIG` or the platform default path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or parsed.
    pub fn load(args: ConnectionArgs, env: Env) -> Result<Self, ConfigError> {
        let path = config_path(args.config.as_deref(), &env);

        let document = match path {
            Some(ref path) => ConfigDocument::load(path)?,
            None => {
                tracing::debug!("No config directory on this platform, using empty config");
                ConfigDocument::default()
            }
        };

        Ok(Self {
            args,
            env,
            document,
            config_path: path,
        })
    }

    /// Like [`ResolutionContext::load`], with a snapshot of the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or parsed.
    pub fn from_system(args: ConnectionArgs) -> Result<Self, ConfigError> {
        Self::load(args, Env::from_system())
    }
}

/// Resolves settings from a [`ResolutionContext`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Resolver {
    policy: LoadPolicy,
}

impl Resolver {
    /// Creates a resolver with the lenient config-file policy.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            policy: LoadPolicy::Lenient,
        }
    }

    /// Sets the config-file policy.
    #[must_use]
    pub const fn with_policy(mut self, policy: LoadPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Returns the config-file policy.
    #[must_use]
    pub const fn policy(&self) -> LoadPolicy {
        self.policy
    }

    /// Runs the full cascade and validates `required`.
    ///
    /// # Errors
    ///
    /// Returns `MissingFields` naming every required field that is absent or
    /// empty after all sources were applied. Under [`LoadPolicy::Strict`]
    /// the config-file errors are returned instead when the file has to
    /// supply a field.
    pub fn resolve(
        &self,
        ctx: &ResolutionContext,
        required: &[Field],
    ) -> Result<Settings, ConfigError> {
        let selected = select_instance(&ctx.args, &ctx.env, &ctx.document);
        let instance = selected.as_ref().map(|s| s.name.as_str());

        let needed = match self.policy {
            LoadPolicy::Lenient => Vec::new(),
            LoadPolicy::Strict => Settings::default()
                .overlaid(&ctx.env)
                .overlaid(&ctx.args)
                .missing(required),
        };

        let mut settings = ctx
            .document
            .load_instance_settings(instance, self.policy, &needed)?;
        settings.overlay(&ctx.env);
        settings.overlay(&ctx.args);

        let missing = settings.missing(required);
        if !missing.is_empty() {
            return Err(ConfigError::missing(missing, instance.map(str::to_owned)));
        }

        Ok(settings)
    }

    /// Resolves the settings needed by a REST API client (`url`, `token`).
    ///
    /// # Errors
    ///
    /// See [`Resolver::resolve`].
    pub fn resolve_rest(&self, ctx: &ResolutionContext) -> Result<RestSettings, ConfigError> {
        let settings = self.resolve(ctx, &Field::REST)?;
        Ok(RestSettings {
            url: settings.url.unwrap_or_default(),
            token: settings.token.unwrap_or_default(),
        })
    }

    /// Resolves the GraphQL endpoint and builds the authorization headers.
    ///
    /// # Errors
    ///
    /// See [`Resolver::resolve`]; additionally `InvalidToken` if the token
    /// cannot be sent as a header value.
    pub fn resolve_graphql(&self, ctx: &ResolutionContext) -> Result<GraphqlSettings, ConfigError> {
        let settings = self.resolve(ctx, &Field::GRAPHQL)?;
        let token = settings.token.unwrap_or_default();

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, authorization_value(&token)?);

        Ok(GraphqlSettings {
            endpoint: settings.graphql_url.unwrap_or_default(),
            headers,
        })
    }
}

/// Builds the `Token <token>` authorization header value.
///
/// # Errors
///
/// Returns `InvalidToken` if the token contains characters not allowed in
/// header values.
pub fn authorization_value(token: &str) -> Result<HeaderValue, ConfigError> {
    let mut value = HeaderValue::from_str(&format!("{} {token}", defaults::AUTH_SCHEME)).map_err(
        |e| ConfigError::InvalidToken {
            reason: e.to_string(),
        },
    )?;
    value.set_sensitive(true);
    Ok(value)
}

/// Resolves all settings from `args` and the process environment.
///
/// No field is required; the result may be partial.
///
/// # Errors
///
/// Returns an error if the config file exists but cannot be read or parsed.
pub fn resolve_settings(args: &ConnectionArgs) -> Result<Settings, ConfigError> {
    let ctx = ResolutionContext::from_system(args.clone())?;
    Resolver::new().resolve(&ctx, &[])
}

/// Resolves REST API settings from `args` and the process environment.
///
/// # Errors
///
/// See [`Resolver::resolve_rest`].
pub fn resolve_config(args: &ConnectionArgs) -> Result<RestSettings, ConfigError> {
    let ctx = ResolutionContext::from_system(args.clone())?;
    Resolver::new().resolve_rest(&ctx)
}

/// Resolves GraphQL settings from `args` and the process environment.
///
/// # Errors
///
/// See [`Resolver::resolve_graphql`].
pub fn resolve_graphql_config(args: &ConnectionArgs) -> Result<GraphqlSettings, ConfigError> {
    let ctx = ResolutionContext::from_system(args.clone())?;
    Resolver::new().resolve_graphql(&ctx)
}
