//! Instance selection.

use std::fmt;

use super::cli::ConnectionArgs;
use super::env::Env;
use super::ini::ConfigDocument;

/// Where the selected instance name came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstanceOrigin {
    /// `--instance`
    CommandLine,
    /// `NETBOX_INSTANCE`
    Environment,
    /// `[Main] Instance`
    ConfigFile,
}

impl fmt::Display for InstanceOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::CommandLine => "command line",
            Self::Environment => "environment",
            Self::ConfigFile => "config file",
        };
        f.write_str(s)
    }
}

/// A selected instance name together with its origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedInstance {
    /// Instance (section) name
    pub name: String,
    /// Source that supplied the name
    pub origin: InstanceOrigin,
}

/// Selects the instance governing the config file lookup.
///
/// The first non-empty value wins: `--instance`, then `NETBOX_INSTANCE`,
/// then `[Main] Instance`. Returns `None` if no source names one.
#[must_use]
pub fn select_instance(
    args: &ConnectionArgs,
    env: &Env,
    doc: &ConfigDocument,
) -> Option<SelectedInstance> {
    let candidates = [
        (args.instance.as_deref(), InstanceOrigin::CommandLine),
        (env.instance(), InstanceOrigin::Environment),
        (doc.default_instance(), InstanceOrigin::ConfigFile),
    ];

    let selected = candidates
        .into_iter()
        .find_map(|(value, origin)| {
            value.filter(|v| !v.is_empty()).map(|name| SelectedInstance {
                name: name.to_string(),
                origin,
            })
        });

    match &selected {
        Some(s) => tracing::debug!("Selected instance '{}' from {}", s.name, s.origin),
        None => tracing::debug!("No instance selected"),
    }

    selected
}
