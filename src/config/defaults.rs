//! Default values and well-known names.
//!
//! Centralized constants to avoid magic strings scattered across the codebase.

/// Environment variable selecting the instance.
pub const ENV_INSTANCE: &str = "NETBOX_INSTANCE";

/// Environment variable pointing at the config file.
pub const ENV_CONFIG: &str = "NETBOX_CONFIG";

/// Environment variable supplying the API base URL.
pub const ENV_URL: &str = "NETBOX_URL";

/// Environment variable supplying the API token.
pub const ENV_TOKEN: &str = "NETBOX_TOKEN";

/// Environment variable supplying the GraphQL endpoint URL.
pub const ENV_GRAPHQL_URL: &str = "NETBOX_GRAPHQL_URL";

/// All environment variables consulted during resolution.
pub const ENV_VARS: [&str; 5] = [ENV_INSTANCE, ENV_CONFIG, ENV_URL, ENV_TOKEN, ENV_GRAPHQL_URL];

/// Section holding the default instance name.
pub const MAIN_SECTION: &str = "Main";

/// Key of the default instance name inside [`MAIN_SECTION`].
pub const MAIN_INSTANCE_KEY: &str = "Instance";

/// Instance section key for the API base URL.
pub const KEY_URL: &str = "URL";

/// Instance section key for the API token.
pub const KEY_TOKEN: &str = "Token";

/// Instance section key for the GraphQL endpoint URL.
pub const KEY_GRAPHQL_URL: &str = "GraphQL-URL";

/// Directory name below the platform config directory.
pub const APP_DIR: &str = "netbox-config";

/// File name of the default config file.
pub const CONFIG_FILE_NAME: &str = "config.ini";

/// Scheme prefix of the authorization header value (`Token <token>`).
pub const AUTH_SCHEME: &str = "Token";
