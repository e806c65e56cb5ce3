//! INI configuration file parsing.
//!
//! The file holds a `[Main]` section naming the default instance and one
//! section per instance:
//!
//! ```ini
//! [Main]
//! Instance=prod
//!
//! [prod]
//! URL=https://netbox.example.com/api
//! Token=0123456789abcdef
//! GraphQL-URL=https://netbox.example.com/graphql/
//! ```
//!
//! Section and key names are case-sensitive.

use std::collections::{BTreeMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};

use configparser::ini::Ini;

use super::defaults;
use super::env::Env;
use super::error::ConfigError;
use super::settings::{Field, Settings};

/// Path reported in parse errors for documents parsed from memory.
const IN_MEMORY: &str = "<string>";

type Section = BTreeMap<String, String>;

/// How the config file layer treats a missing instance, section or key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadPolicy {
    /// Missing pieces yield empty settings; final validation reports
    /// whatever the other sources could not fill in.
    #[default]
    Lenient,

    /// Missing instance, section, or `URL`/`Token` key fail immediately,
    /// but only for fields the environment and command line left unset.
    Strict,
}

/// A parsed config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigDocument {
    sections: BTreeMap<String, Section>,
}

impl ConfigDocument {
    /// Loads a config file.
    ///
    /// A missing file yields an empty document. The file is read in full and
    /// closed before parsing.
    ///
    /// # Errors
    ///
    /// Returns `FileRead` if the file exists but cannot be read, or `Parse`
    /// if its content is not valid INI.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("Config file {} not found, using empty config", path.display());
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(ConfigError::FileRead {
                    path: path.to_path_buf(),
                    source: e,
                });
            }
        };

        tracing::debug!("Loaded config file {}", path.display());
        Self::parse_with_path(&content, path)
    }

    /// Parses a config document from a string.
    ///
    /// # Errors
    ///
    /// Returns `Parse` if the content is not valid INI.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Self::parse_with_path(content, Path::new(IN_MEMORY))
    }

    fn parse_with_path(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let parse_error = |message: String| ConfigError::Parse {
            path: path.to_path_buf(),
            message,
        };

        check_structure(content).map_err(parse_error)?;

        // Tokens and URL fragments may contain `#` and `;`; only whole-line
        // comments are recognized.
        let no_inline_comments: &[char] = &[];
        let mut ini = Ini::new_cs();
        ini.set_inline_comment_symbols(Some(no_inline_comments));
        let map = ini.read(content.to_string()).map_err(parse_error)?;

        let sections = map
            .into_iter()
            .map(|(name, entries)| {
                let entries: Section = entries
                    .into_iter()
                    .filter_map(|(key, value)| value.map(|v| (key, v)))
                    .collect();
                (name, entries)
            })
            .collect();

        Ok(Self { sections })
    }

    /// Returns `true` if the document has no sections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Returns `true` if a section with exactly this name exists.
    #[must_use]
    pub fn has_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    /// Looks up a key in a section.
    #[must_use]
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|s| s.get(key))
            .map(String::as_str)
    }

    /// The default instance name from `[Main] Instance`.
    #[must_use]
    pub fn default_instance(&self) -> Option<&str> {
        self.get(defaults::MAIN_SECTION, defaults::MAIN_INSTANCE_KEY)
    }

    /// Names of all instance sections (every section except `Main`), sorted.
    pub fn instances(&self) -> impl Iterator<Item = &str> {
        self.sections
            .keys()
            .map(String::as_str)
            .filter(|name| *name != defaults::MAIN_SECTION)
    }

    /// Reads the settings of an instance section, all keys optional.
    ///
    /// An unresolved instance or a missing section yields empty settings.
    #[must_use]
    pub fn instance_settings(&self, instance: Option<&str>) -> Settings {
        let mut settings = Settings::default();

        let Some(name) = instance else {
            tracing::debug!("No instance selected, skipping config file");
            return settings;
        };

        if !self.has_section(name) {
            tracing::debug!("Instance '{name}' has no section in config file");
            return settings;
        }

        for field in Field::ALL {
            settings.set(field, self.get(name, field.ini_key()).map(str::to_owned));
        }
        settings
    }

    /// Reads the settings of an instance section under `policy`.
    ///
    /// `needed` lists the fields the caller still has to fill from the file;
    /// the strict policy only complains about those. `GraphQL-URL` is never
    /// required.
    ///
    /// # Errors
    ///
    /// Under [`LoadPolicy::Strict`] with a non-empty `needed`, returns
    /// `MissingInstance`, `MissingSection` or `MissingKey`.
    pub fn load_instance_settings(
        &self,
        instance: Option<&str>,
        policy: LoadPolicy,
        needed: &[Field],
    ) -> Result<Settings, ConfigError> {
        if policy == LoadPolicy::Strict && !needed.is_empty() {
            let name = instance.ok_or(ConfigError::MissingInstance)?;

            if !self.has_section(name) {
                return Err(ConfigError::MissingSection {
                    instance: name.to_string(),
                });
            }

            if let Some(field) = needed
                .iter()
                .find(|f| f.is_required_key() && self.get(name, f.ini_key()).is_none())
            {
                return Err(ConfigError::MissingKey {
                    section: name.to_string(),
                    key: field.ini_key(),
                });
            }
        }

        Ok(self.instance_settings(instance))
    }
}

/// Checks the line structure: the first entry must be a section header,
/// every header must be closed and unique, and every entry needs a `=` or
/// `:` delimiter.
fn check_structure(content: &str) -> Result<(), String> {
    let mut seen = HashSet::new();
    let mut in_section = false;

    for (idx, line) in content.lines().enumerate() {
        let num = idx + 1;
        let line = line.trim();
        if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
            continue;
        }

        if let Some(header) = line.strip_prefix('[') {
            let Some(name) = header.strip_suffix(']') else {
                return Err(format!("line {num}: unclosed section header '{line}'"));
            };
            if !seen.insert(name.trim()) {
                return Err(format!("line {num}: duplicate section '{}'", name.trim()));
            }
            in_section = true;
        } else if !in_section {
            return Err(format!("line {num}: entry outside of any section: '{line}'"));
        } else if !line.contains(['=', ':']) {
            return Err(format!("line {num}: entry without '=' or ':': '{line}'"));
        }
    }
    Ok(())
}

/// Returns the platform default config file path, if the platform has a
/// per-user config directory.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(defaults::APP_DIR).join(defaults::CONFIG_FILE_NAME))
}

/// Determines the config file path: `--config`, then `NETBOX_CONFIG`, then
/// the platform default.
#[must_use]
pub fn config_path(config_arg: Option<&Path>, env: &Env) -> Option<PathBuf> {
    config_arg
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .or_else(|| env.config().filter(|p| !p.is_empty()).map(PathBuf::from))
        .or_else(default_config_path)
}
