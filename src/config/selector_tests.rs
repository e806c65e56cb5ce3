//! Tests for instance selection.

use super::cli::ConnectionArgs;
use super::env::Env;
use super::ini::ConfigDocument;
use super::selector::{InstanceOrigin, select_instance};

fn args(instance: Option<&str>) -> ConnectionArgs {
    ConnectionArgs {
        instance: instance.map(str::to_string),
        ..ConnectionArgs::default()
    }
}

fn env(instance: Option<&str>) -> Env {
    instance.map_or_else(Env::empty, |i| Env::from_pairs([("NETBOX_INSTANCE", i)]))
}

fn doc() -> ConfigDocument {
    ConfigDocument::parse("[Main]\nInstance=prod\n[prod]\nURL=x\n").unwrap()
}

#[test]
fn argument_overrides_environment_and_file() {
    let selected = select_instance(&args(Some("cmdline")), &env(Some("env")), &doc()).unwrap();

    assert_eq!(selected.name, "cmdline");
    assert_eq!(selected.origin, InstanceOrigin::CommandLine);
}

#[test]
fn environment_overrides_file() {
    let selected = select_instance(&args(None), &env(Some("env")), &doc()).unwrap();

    assert_eq!(selected.name, "env");
    assert_eq!(selected.origin, InstanceOrigin::Environment);
}

#[test]
fn file_default_used_last() {
    let selected = select_instance(&args(None), &env(None), &doc()).unwrap();

    assert_eq!(selected.name, "prod");
    assert_eq!(selected.origin, InstanceOrigin::ConfigFile);
}

#[test]
fn none_when_no_source_names_one() {
    let selected = select_instance(&args(None), &env(None), &ConfigDocument::default());

    assert!(selected.is_none());
}

#[test]
fn empty_values_are_skipped() {
    let selected = select_instance(&args(Some("")), &env(Some("")), &doc()).unwrap();

    assert_eq!(selected.name, "prod");
    assert_eq!(selected.origin, InstanceOrigin::ConfigFile);
}

#[test]
fn argument_need_not_exist_in_file() {
    let selected = select_instance(&args(Some("elsewhere")), &env(None), &doc()).unwrap();

    assert_eq!(selected.name, "elsewhere");
}

#[test]
fn origin_display() {
    assert_eq!(InstanceOrigin::CommandLine.to_string(), "command line");
    assert_eq!(InstanceOrigin::Environment.to_string(), "environment");
    assert_eq!(InstanceOrigin::ConfigFile.to_string(), "config file");
}
