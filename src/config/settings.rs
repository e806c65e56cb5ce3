//! Connection settings and the overlay operation.

use std::fmt;

use http::HeaderMap;
use serde::Serialize;
use url::Url;

use super::defaults;
use super::error::ConfigError;

/// A connection setting that can be resolved from any source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// API base URL
    Url,
    /// API token
    Token,
    /// GraphQL endpoint URL
    GraphqlUrl,
}

impl Field {
    /// All fields, in resolution order.
    pub const ALL: [Self; 3] = [Self::Url, Self::Token, Self::GraphqlUrl];

    /// Fields required to talk to the REST API.
    pub const REST: [Self; 2] = [Self::Url, Self::Token];

    /// Fields required to talk to the GraphQL endpoint.
    pub const GRAPHQL: [Self; 2] = [Self::GraphqlUrl, Self::Token];

    /// Settings key name (`url`, `token`, `graphql_url`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Url => "url",
            Self::Token => "token",
            Self::GraphqlUrl => "graphql_url",
        }
    }

    /// Key inside an instance section of the config file.
    #[must_use]
    pub const fn ini_key(self) -> &'static str {
        match self {
            Self::Url => defaults::KEY_URL,
            Self::Token => defaults::KEY_TOKEN,
            Self::GraphqlUrl => defaults::KEY_GRAPHQL_URL,
        }
    }

    /// Environment variable supplying this field.
    #[must_use]
    pub const fn env_var(self) -> &'static str {
        match self {
            Self::Url => defaults::ENV_URL,
            Self::Token => defaults::ENV_TOKEN,
            Self::GraphqlUrl => defaults::ENV_GRAPHQL_URL,
        }
    }

    /// Whether the strict config-file policy treats a missing key as an error.
    ///
    /// `GraphQL-URL` is always optional in the file.
    #[must_use]
    pub const fn is_required_key(self) -> bool {
        !matches!(self, Self::GraphqlUrl)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Anything that may supply values for connection settings.
///
/// Implemented by the command-line arguments and the environment snapshot.
pub trait SettingsSource {
    /// Human-readable name of the source, used in log output.
    fn source_name(&self) -> &'static str;

    /// Returns the value this source supplies for `field`, if any.
    fn value(&self, field: Field) -> Option<&str>;
}

/// Partially or fully resolved connection settings.
///
/// No field is guaranteed to be present until validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Settings {
    /// API base URL
    pub url: Option<String>,
    /// API token
    pub token: Option<String>,
    /// GraphQL endpoint URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graphql_url: Option<String>,
}

impl Settings {
    /// Returns the current value of `field`.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Url => self.url.as_deref(),
            Field::Token => self.token.as_deref(),
            Field::GraphqlUrl => self.graphql_url.as_deref(),
        }
    }

    /// Replaces the value of `field`.
    pub fn set(&mut self, field: Field, value: Option<String>) {
        *self.slot_mut(field) = value;
    }

    /// Returns `true` if `field` holds a non-empty value.
    #[must_use]
    pub fn is_set(&self, field: Field) -> bool {
        self.get(field).is_some_and(|v| !v.is_empty())
    }

    /// Returns `true` if no field holds a value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|&f| self.get(f).is_none())
    }

    /// Replaces every field the source supplies; keeps the rest untouched.
    pub fn overlay<S: SettingsSource + ?Sized>(&mut self, source: &S) {
        for field in Field::ALL {
            if let Some(value) = source.value(field) {
                tracing::debug!("{field} supplied by {}", source.source_name());
                self.set(field, Some(value.to_owned()));
            }
        }
    }

    /// Returns a copy with `source` overlaid.
    #[must_use]
    pub fn overlaid<S: SettingsSource + ?Sized>(mut self, source: &S) -> Self {
        self.overlay(source);
        self
    }

    /// Returns the fields of `required` that are absent or empty.
    #[must_use]
    pub fn missing(&self, required: &[Field]) -> Vec<Field> {
        required
            .iter()
            .copied()
            .filter(|&f| !self.is_set(f))
            .collect()
    }

    /// Parses the API base URL.
    ///
    /// # Errors
    ///
    /// Returns `MissingFields` if unset, `InvalidUrl` if unparsable.
    pub fn api_url(&self) -> Result<Url, ConfigError> {
        self.parse_url(Field::Url)
    }

    /// Parses the GraphQL endpoint URL.
    ///
    /// # Errors
    ///
    /// Returns `MissingFields` if unset, `InvalidUrl` if unparsable.
    pub fn graphql_endpoint(&self) -> Result<Url, ConfigError> {
        self.parse_url(Field::GraphqlUrl)
    }

    fn parse_url(&self, field: Field) -> Result<Url, ConfigError> {
        let raw = self
            .get(field)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ConfigError::missing(vec![field], None))?;

        Url::parse(raw).map_err(|e| ConfigError::InvalidUrl {
            field,
            url: raw.to_string(),
            reason: e.to_string(),
        })
    }

    const fn slot_mut(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::Url => &mut self.url,
            Field::Token => &mut self.token,
            Field::GraphqlUrl => &mut self.graphql_url,
        }
    }
}

/// Validated settings for a REST API client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RestSettings {
    /// API base URL (non-empty)
    pub url: String,
    /// API token (non-empty)
    pub token: String,
}

/// Validated settings for a GraphQL client.
#[derive(Debug, Clone)]
pub struct GraphqlSettings {
    /// GraphQL endpoint URL (non-empty)
    pub endpoint: String,
    /// Request headers, containing `Authorization: Token <token>`
    pub headers: HeaderMap,
}
