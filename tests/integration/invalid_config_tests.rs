//! These tests are for testing some invalid config-file-specific options.

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::ksort_command;

fn invalid_config(config: &str) -> std::process::Command {
    ksort_command(&["-C", config, "./tests/data/objects.json", ".weight"])
}

#[test]
fn test_toml_mismatch_type() {
    invalid_config("./tests/invalid_configs/toml_mismatch_type.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid type"));
}

/// This test isn't really needed as this is technically covered by TOML spec.
/// However, I feel like it's worth checking anyways - not like it takes long.
#[test]
fn test_duplicate_key() {
    invalid_config("./tests/invalid_configs/duplicate_key.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate key"));
}

#[test]
fn test_unknown_field() {
    invalid_config("./tests/invalid_configs/unknown_field.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown field"));
}

#[test]
fn test_invalid_format() {
    invalid_config("./tests/invalid_configs/invalid_format.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown variant"));
}

#[test]
fn test_empty_profile() {
    invalid_config("./tests/invalid_configs/empty_profile.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("'nothing' has no rules"));
}

#[test]
fn test_invalid_profile_rule() {
    invalid_config("./tests/invalid_configs/invalid_profile_rule.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "'weight:desc' in the profile 'bad' is not a valid sort rule",
        ));
}
