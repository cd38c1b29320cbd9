use std::cmp::Ordering;

use serde_json::{Number, Value};

use crate::sort::Comparable;

/// A sortable view of a JSON value found at some key path.
///
/// Keys of different kinds order by kind: missing, then `null`, then
/// booleans, numbers, and strings. Arrays and objects have no key.
///
/// Two integers compare exactly; any other pair of numbers compares as `f64`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldKey<'v> {
    Missing,
    Null,
    Bool(bool),
    Number(&'v Number),
    String(&'v str),
}

impl<'v> FieldKey<'v> {
    /// Returns the key of a possibly missing value, or [`None`] if the value
    /// is an array or object.
    pub fn of(value: Option<&'v Value>) -> Option<Self> {
        match value {
            None => Some(FieldKey::Missing),
            Some(Value::Null) => Some(FieldKey::Null),
            Some(Value::Bool(b)) => Some(FieldKey::Bool(*b)),
            Some(Value::Number(n)) => Some(FieldKey::Number(n)),
            Some(Value::String(s)) => Some(FieldKey::String(s)),
            Some(Value::Array(_) | Value::Object(_)) => None,
        }
    }

    fn rank(&self) -> u8 {
        match self {
            FieldKey::Missing => 0,
            FieldKey::Null => 1,
            FieldKey::Bool(_) => 2,
            FieldKey::Number(_) => 3,
            FieldKey::String(_) => 4,
        }
    }
}

fn as_integer(n: &Number) -> Option<i128> {
    n.as_i64()
        .map(i128::from)
        .or_else(|| n.as_u64().map(i128::from))
}

fn compare_numbers(a: &Number, b: &Number) -> Ordering {
    match (as_integer(a), as_integer(b)) {
        (Some(a), Some(b)) => a.cmp(&b),
        _ => {
            let (a, b) = (a.as_f64().unwrap_or(f64::NAN), b.as_f64().unwrap_or(f64::NAN));
            a.compare(&b)
        }
    }
}

impl Comparable for FieldKey<'_> {
    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (FieldKey::Bool(a), FieldKey::Bool(b)) => a.cmp(b),
            (FieldKey::Number(a), FieldKey::Number(b)) => compare_numbers(a, b),
            (FieldKey::String(a), FieldKey::String(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}
