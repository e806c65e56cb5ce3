//! Environment variable snapshot.
//!
//! Resolution never reads the process environment directly; it consults an
//! [`Env`] captured up front so tests can supply a deterministic one.

use std::collections::HashMap;

use super::defaults;
use super::settings::{Field, SettingsSource};

/// Snapshot of the `NETBOX_*` environment variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Env {
    vars: HashMap<String, String>,
}

impl Env {
    /// Captures the recognized variables from the process environment.
    ///
    /// Variables that are unset or not valid Unicode are treated as absent.
    #[must_use]
    pub fn from_system() -> Self {
        let vars = defaults::ENV_VARS
            .iter()
            .filter_map(|&name| std::env::var(name).ok().map(|v| (name.to_string(), v)))
            .collect();
        Self { vars }
    }

    /// Builds a snapshot from explicit name/value pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self { vars }
    }

    /// An empty environment.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Looks up a variable.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// `NETBOX_INSTANCE`
    #[must_use]
    pub fn instance(&self) -> Option<&str> {
        self.get(defaults::ENV_INSTANCE)
    }

    /// `NETBOX_CONFIG`
    #[must_use]
    pub fn config(&self) -> Option<&str> {
        self.get(defaults::ENV_CONFIG)
    }
}

impl SettingsSource for Env {
    fn source_name(&self) -> &'static str {
        "environment"
    }

    fn value(&self, field: Field) -> Option<&str> {
        self.get(field.env_var())
    }
}
