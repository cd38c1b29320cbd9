//! Tests for configs that should load, and for what they change.

use std::fs;

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::{ksort_command, output_keys, output_line_keys};

#[test]
fn test_empty_config() {
    ksort_command(&[
        "-C",
        "./tests/valid_configs/empty_config.toml",
        "./tests/data/objects.json",
        ".weight",
    ])
    .assert()
    .success();
}

#[test]
fn test_profile() {
    let output = ksort_command(&[
        "-C",
        "./tests/valid_configs/profiles.toml",
        "--profile",
        "by_weight",
        "./tests/data/objects.json",
    ])
    .assert()
    .success()
    .get_output()
    .stdout
    .clone();

    assert_eq!(
        output_keys(&output, "color"),
        ["purple", "green", "red", "blue"]
    );
}

#[test]
fn test_arguments_override_profile() {
    let output = ksort_command(&[
        "-C",
        "./tests/valid_configs/profiles.toml",
        "-p",
        "by_weight",
        "./tests/data/objects.json",
        ".color",
    ])
    .assert()
    .success()
    .get_output()
    .stdout
    .clone();

    assert_eq!(
        output_keys(&output, "color"),
        ["blue", "green", "purple", "red"]
    );
}

#[test]
fn test_general_options() {
    // The config sets JSON lines, which is never pretty-printed.
    let output = ksort_command(&[
        "-C",
        "./tests/valid_configs/general.toml",
        "-p",
        "heaviest",
        "./tests/data/objects.jsonl",
    ])
    .assert()
    .success()
    .get_output()
    .stdout
    .clone();

    assert_eq!(
        output_line_keys(&output, "color"),
        ["blue", "red", "green", "purple"]
    );
}

#[test]
fn test_general_options_overridden() {
    ksort_command(&[
        "-C",
        "./tests/valid_configs/general.toml",
        "-f",
        "json",
        "./tests/data/objects.json",
        ".weight",
    ])
    .assert()
    .success()
    .stdout(predicate::str::starts_with("[\n  {"));
}

#[test]
fn test_creates_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("new").join("ksort.toml");
    let config_str = config.to_str().unwrap();

    ksort_command(&["-C", config_str, "./tests/data/objects.json", ".weight"])
        .assert()
        .success();

    let text = fs::read_to_string(&config).unwrap();
    assert!(text.contains("[profiles]"));
}
