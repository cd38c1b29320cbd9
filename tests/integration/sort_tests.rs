//! Tests for how records are sorted.

use assert_cmd::{prelude::*, Command};
use predicates::prelude::*;

use crate::util::{no_cfg_ksort_command, output_keys, output_line_keys};

fn sorted_colors(args: &[&str]) -> Vec<String> {
    let output = no_cfg_ksort_command(args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    output_keys(&output, "color")
}

fn sorted_stdin(args: &[&str], input: &str) -> Vec<u8> {
    Command::from_std(no_cfg_ksort_command(args))
        .write_stdin(input)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone()
}

#[test]
fn test_single_key() {
    assert_eq!(
        sorted_colors(&["./tests/data/objects.json", ".weight"]),
        ["green", "purple", "red", "blue"]
    );
    assert_eq!(
        sorted_colors(&["./tests/data/objects.json", ".weight:desc"]),
        ["blue", "red", "green", "purple"]
    );
}

#[test]
fn test_relative_input_path() {
    // Only the input is given, so it must not be mistaken for a key path.
    no_cfg_ksort_command(&["./tests/data/objects.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least one sort rule required"));

    assert_eq!(
        sorted_colors(&["./tests/data/objects.json", ".color"]),
        ["blue", "green", "purple", "red"]
    );
}

#[test]
fn test_tie_break() {
    assert_eq!(
        sorted_colors(&["./tests/data/objects.json", ".weight:asc", ".color:desc"]),
        ["purple", "green", "red", "blue"]
    );
}

#[test]
fn test_boolean_key() {
    assert_eq!(
        sorted_colors(&["./tests/data/objects.json", ".active:desc", ".weight"]),
        ["purple", "red", "green", "blue"]
    );
}

#[test]
fn test_unstable_sort_still_sorts() {
    assert_eq!(
        sorted_colors(&[
            "--unstable",
            "./tests/data/objects.json",
            ".weight",
            ".color"
        ]),
        ["green", "purple", "red", "blue"]
    );
}

#[test]
fn test_nested_keys() {
    let output = no_cfg_ksort_command(&["./tests/data/nested.json", ".stats.score:desc"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    // A missing key sorts before any number, so it ends up last here.
    assert_eq!(output_keys(&output, "name"), ["a", "c", "b"]);

    let output = no_cfg_ksort_command(&["./tests/data/nested.json", ".tags.0"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(output_keys(&output, "name"), ["c", "b", "a"]);
}

#[test]
fn test_unsortable_key() {
    no_cfg_ksort_command(&["./tests/data/nested.json", ".tags"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "record 0 has an array or object at '.tags'",
        ));
}

#[test]
fn test_not_an_array() {
    no_cfg_ksort_command(&["./tests/data/not_an_array.json", ".weight"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("JSON array of records"));
}

#[test]
fn test_rules_first_reads_stdin() {
    let output = sorted_stdin(
        &[".weight:asc", ".color:desc"],
        r#"[{"color": "red", "weight": 2}, {"color": "blue", "weight": 1}, {"color": "azure", "weight": 1}]"#,
    );

    assert_eq!(output_keys(&output, "color"), ["blue", "azure", "red"]);
}

#[test]
fn test_dash_reads_stdin() {
    let output = sorted_stdin(&["-", ".a"], r#"[{"a": 3}, {"a": 1}, {"a": 2}]"#);
    assert_eq!(output_keys(&output, "a"), ["1", "2", "3"]);
}

#[test]
fn test_json_lines() {
    let output = no_cfg_ksort_command(&[
        "-f",
        "jsonl",
        "./tests/data/objects.jsonl",
        ".weight",
        ".color",
    ])
    .assert()
    .success()
    .get_output()
    .stdout
    .clone();

    assert_eq!(
        output_line_keys(&output, "color"),
        ["green", "purple", "red", "blue"]
    );
}

#[test]
fn test_mixed_kinds() {
    let output = sorted_stdin(
        &[".v"],
        r#"[{"v": "x"}, {"v": 1}, {"v": null}, {}, {"v": true}]"#,
    );

    assert_eq!(
        output_keys(&output, "v"),
        ["null", "null", "true", "1", "x"]
    );
}

#[test]
fn test_input_is_not_modified() {
    let before = std::fs::read_to_string("./tests/data/objects.json").unwrap();
    sorted_colors(&["./tests/data/objects.json", ".color"]);
    let after = std::fs::read_to_string("./tests/data/objects.json").unwrap();

    assert_eq!(before, after);
}
