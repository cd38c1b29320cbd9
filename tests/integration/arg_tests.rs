//! These tests are mostly here just to ensure that invalid results will be
//! caught when passing arguments.

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::no_cfg_ksort_command;

#[test]
fn test_no_rules() {
    no_cfg_ksort_command(&["./tests/data/objects.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "invalid argument: at least one sort rule required",
        ));
}

#[test]
fn test_unrecognized_direction() {
    no_cfg_ksort_command(&["./tests/data/objects.json", ".weight:sideways"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "unrecognized sort direction 'sideways'",
        ));
}

#[test]
fn test_too_many_rule_parts() {
    no_cfg_ksort_command(&["./tests/data/objects.json", ".weight:desc:extra"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid sort rule '.weight:desc:extra'"));
}

#[test]
fn test_rule_without_prefix() {
    no_cfg_ksort_command(&["./tests/data/objects.json", "weight"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid key path 'weight'"));
}

#[test]
fn test_missing_input_file() {
    no_cfg_ksort_command(&["./tests/data/does_not_exist.json", ".weight"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unable to open the input file"));
}

#[test]
fn test_invalid_format() {
    no_cfg_ksort_command(&["-f", "yaml", "./tests/data/objects.json", ".weight"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'yaml'"));
}

#[test]
fn test_missing_profile() {
    no_cfg_ksort_command(&["-p", "heaviest", "./tests/data/objects.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "'heaviest' is not a profile in the config file",
        ));
}

#[test]
fn test_help() {
    no_cfg_ksort_command(&["--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("INPUT_OR_RULE"))
        .stdout(predicate::str::contains("--config_location"));
}

#[test]
fn test_version() {
    no_cfg_ksort_command(&["-V"])
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
