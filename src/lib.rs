//! netbox-config: NetBox connection settings resolver
//!
//! A library for resolving the API URL, GraphQL endpoint and token of a
//! NetBox instance from command-line arguments, environment variables and
//! an INI config file.

pub mod config;
