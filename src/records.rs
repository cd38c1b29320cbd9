//! Sorting JSON records by textual rules.
//!
//! Records are read as either a single JSON array or as JSON lines, sorted by
//! a list of [`RuleSpec`]s such as `.weight` or `.color:desc`, and written back
//! out in the same format.

mod field;
mod key_path;
mod rule_spec;

use std::{
    fmt,
    io::{BufRead, Read, Write},
    result,
    str::FromStr,
};

pub use field::FieldKey;
pub use key_path::KeyPath;
pub use rule_spec::{Classified, RuleSpec};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::sort::{RuleList, SortBy, SortError, Stability};

/// A type alias for handling errors related to records.
pub type Result<T> = result::Result<T, RecordError>;

/// An error that can occur while reading, sorting, or writing records.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("invalid key path '{path}', {reason}")]
    InvalidKeyPath { path: String, reason: String },
    #[error("invalid sort rule '{0}', expected '.path', '.path:asc', or '.path:desc'")]
    InvalidRule(String),
    /// A record holds an array or an object where a rule expects a key.
    #[error("record {index} has an array or object at '{path}', which cannot be sorted on")]
    NotComparable { path: String, index: usize },
    #[error("expected the input to be a JSON array of records")]
    NotAnArray,
    #[error("invalid JSON on line {line}, {reason}")]
    InvalidJson { line: usize, reason: String },
    #[error("IO exception, {0}")]
    InvalidIo(String),
    #[error(transparent)]
    Sort(#[from] SortError),
}

impl RecordError {
    pub(crate) fn invalid_key_path(path: &str, reason: &str) -> Self {
        RecordError::InvalidKeyPath {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    fn invalid_json(err: serde_json::Error, line: usize) -> Self {
        RecordError::InvalidJson {
            line,
            reason: err.to_string(),
        }
    }
}

impl From<std::io::Error> for RecordError {
    fn from(err: std::io::Error) -> Self {
        RecordError::InvalidIo(err.to_string())
    }
}

impl From<serde_json::Error> for RecordError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            RecordError::InvalidIo(err.to_string())
        } else {
            let line = err.line();
            RecordError::invalid_json(err, line)
        }
    }
}

/// How records are laid out in the input and output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum InputFormat {
    /// A single JSON array.
    #[default]
    #[serde(rename = "json")]
    Json,
    /// One JSON value per line.
    #[serde(rename = "jsonl")]
    JsonLines,
}

impl InputFormat {
    pub const ALL: [&'static str; 2] = ["json", "jsonl"];

    pub fn as_str(&self) -> &'static str {
        match self {
            InputFormat::Json => "json",
            InputFormat::JsonLines => "jsonl",
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputFormat {
    type Err = String;

    fn from_str(s: &str) -> result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(InputFormat::Json),
            "jsonl" | "ndjson" => Ok(InputFormat::JsonLines),
            _ => Err(format!(
                "'{s}' is not a supported format, expected one of {:?}",
                Self::ALL
            )),
        }
    }
}

/// Reads records from `reader`.
pub fn read_records<R: BufRead>(reader: R, format: InputFormat) -> Result<Vec<Value>> {
    match format {
        InputFormat::Json => read_array(reader),
        InputFormat::JsonLines => read_lines(reader),
    }
}

fn read_array<R: Read>(reader: R) -> Result<Vec<Value>> {
    match serde_json::from_reader::<_, Value>(reader)? {
        Value::Array(records) => Ok(records),
        _ => Err(RecordError::NotAnArray),
    }
}

fn read_lines<R: BufRead>(reader: R) -> Result<Vec<Value>> {
    let mut records = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let record = serde_json::from_str(&line)
            .map_err(|err| RecordError::invalid_json(err, index + 1))?;
        records.push(record);
    }

    Ok(records)
}

/// Writes records to `writer`. JSON lines output is never pretty-printed.
pub fn write_records<W: Write>(
    mut writer: W, records: &[Value], format: InputFormat, pretty: bool,
) -> Result<()> {
    match format {
        InputFormat::Json => {
            if pretty {
                serde_json::to_writer_pretty(&mut writer, records)?;
            } else {
                serde_json::to_writer(&mut writer, records)?;
            }
            writeln!(writer)?;
        }
        InputFormat::JsonLines => {
            for record in records {
                serde_json::to_writer(&mut writer, record)?;
                writeln!(writer)?;
            }
        }
    }

    writer.flush()?;
    Ok(())
}

/// Checks that every record has a sortable key under every rule.
pub fn check_keys(records: &[Value], specs: &[RuleSpec]) -> Result<()> {
    for spec in specs {
        if let Some(index) = records.iter().position(|record| spec.key(record).is_none()) {
            return Err(RecordError::NotComparable {
                path: spec.path().to_string(),
                index,
            });
        }
    }

    Ok(())
}

/// Sorts records in place by `specs`, the first rule deciding and the rest
/// breaking ties.
pub fn sort_records(
    records: &mut [Value], specs: &[RuleSpec], stability: Stability,
) -> Result<()> {
    check_keys(records, specs)?;

    let rules = RuleList::try_from(specs.iter().map(RuleSpec::to_rule).collect::<Vec<_>>())?;
    SortBy::new(rules)
        .with_stability(stability)
        .sort_in_place(records);

    Ok(())
}
