use std::{fmt, str::FromStr};

use serde_json::Value;

use super::RecordError;

/// A path into a JSON value, written as `.field.0.other`.
///
/// Each segment looks up an object field by name, or an array element by
/// index. A lone `.` is the whole value. Segments may not contain `/` or
/// `\`, so relative file paths such as `./data.json` are never key paths.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyPath {
    text: String,
    segments: Vec<String>,
}

impl KeyPath {
    /// The prefix every key path starts with.
    pub const PREFIX: char = '.';

    /// Returns the path segments, outermost first.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Follows the path through `value`. Returns [`None`] if some segment does
    /// not exist.
    pub fn resolve<'v>(&self, value: &'v Value) -> Option<&'v Value> {
        self.segments
            .iter()
            .try_fold(value, |current, segment| match current {
                Value::Object(map) => map.get(segment),
                Value::Array(values) => segment
                    .parse::<usize>()
                    .ok()
                    .and_then(|index| values.get(index)),
                _ => None,
            })
    }
}

impl FromStr for KeyPath {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some(rest) = s.strip_prefix(Self::PREFIX) else {
            return Err(RecordError::invalid_key_path(s, "it must start with '.'"));
        };

        let segments = if rest.is_empty() {
            Vec::new()
        } else {
            rest.split(Self::PREFIX)
                .map(|segment| {
                    if segment.is_empty() {
                        Err(RecordError::invalid_key_path(s, "it has an empty segment"))
                    } else if segment.contains(['/', '\\']) {
                        Err(RecordError::invalid_key_path(s, "it contains a path separator"))
                    } else {
                        Ok(segment.to_string())
                    }
                })
                .collect::<Result<Vec<_>, _>>()?
        };

        Ok(Self {
            text: s.to_string(),
            segments,
        })
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
