//! Error types for configuration loading and resolution.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use super::settings::Field;

/// Error type for configuration operations.
///
/// Covers errors from reading and parsing the config file, as well as
/// the final validation of the merged settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid INI.
    #[error("Failed to parse config file '{}': {message}", path.display())]
    Parse {
        /// Path to the config file (`<string>` when parsed from memory)
        path: PathBuf,
        /// Parser message
        message: String,
    },

    /// Required fields are still unresolved after all sources were applied.
    #[error("Missing required settings: {}{}", FieldList(.fields), InstanceSuffix(.instance.as_deref()))]
    MissingFields {
        /// Every required field that is absent or empty
        fields: Vec<Field>,
        /// Instance used for the config file lookup, if one was selected
        instance: Option<String>,
    },

    /// No instance could be selected (strict policy only).
    #[error(
        "No instance selected. Use --instance, set NETBOX_INSTANCE or add Instance to the [Main] section"
    )]
    MissingInstance,

    /// The selected instance has no section in the config file (strict policy only).
    #[error("Instance '{instance}' not found in config file")]
    MissingSection {
        /// Selected instance name
        instance: String,
    },

    /// The instance section lacks a required key (strict policy only).
    #[error("Missing key '{key}' in section [{section}]")]
    MissingKey {
        /// Instance section name
        section: String,
        /// The missing INI key
        key: &'static str,
    },

    /// The token cannot be used as an HTTP header value.
    #[error("Invalid token: {reason}")]
    InvalidToken {
        /// Reason for invalidity
        reason: String,
    },

    /// A URL setting is not a valid URL.
    #[error("Invalid URL for {field} '{url}': {reason}")]
    InvalidUrl {
        /// Field holding the URL
        field: Field,
        /// The invalid URL string
        url: String,
        /// Reason for invalidity
        reason: String,
    },
}

impl ConfigError {
    /// Creates a `MissingFields` error.
    #[must_use]
    pub const fn missing(fields: Vec<Field>, instance: Option<String>) -> Self {
        Self::MissingFields { fields, instance }
    }

    /// Returns the missing fields if this is a `MissingFields` error.
    #[must_use]
    pub fn missing_fields(&self) -> &[Field] {
        match self {
            Self::MissingFields { fields, .. } => fields,
            _ => &[],
        }
    }
}

struct FieldList<'a>(&'a [Field]);

impl fmt::Display for FieldList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, field) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{field}")?;
        }
        Ok(())
    }
}

struct InstanceSuffix<'a>(Option<&'a str>);

impl fmt::Display for InstanceSuffix<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(instance) => write!(f, " (instance '{instance}')"),
            None => f.write_str(" (no instance selected)"),
        }
    }
}
