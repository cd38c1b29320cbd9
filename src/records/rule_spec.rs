use std::{fmt, str::FromStr};

use concat_string::concat_string;
use serde_json::Value;

use super::{FieldKey, KeyPath, RecordError};
use crate::sort::{Comparable, SortOrder, SortRule};

/// A textual sort rule for JSON records.
///
/// A rule is either a bare key path such as `.weight` (sorted ascending), or a
/// pair of a key path and a direction separated by `:`, such as
/// `.color:desc`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleSpec {
    path: KeyPath,
    order: SortOrder,
}

/// How a command line argument was classified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Classified<'s> {
    /// The argument is a sort rule.
    Rule(RuleSpec),
    /// The argument is not a sort rule, so it names the items to sort.
    Sequence(&'s str),
}

impl RuleSpec {
    /// Separates a key path from its direction.
    pub const SEPARATOR: char = ':';

    /// Creates a rule spec.
    pub fn new(path: KeyPath, order: SortOrder) -> Self {
        Self { path, order }
    }

    /// Decides whether `arg` is a sort rule or the items to sort.
    ///
    /// An argument is a rule if it is a bare key path, or exactly a key path
    /// and a recognized direction. Everything else, including a pair with
    /// more than two parts, is the items.
    pub fn classify(arg: &str) -> Classified<'_> {
        match arg.parse() {
            Ok(spec) => Classified::Rule(spec),
            Err(_) => Classified::Sequence(arg),
        }
    }

    /// Returns the key path of this rule.
    pub fn path(&self) -> &KeyPath {
        &self.path
    }

    /// Returns the order of this rule.
    pub fn order(&self) -> SortOrder {
        self.order
    }

    /// Returns the key of a record under this rule, or [`None`] if the value
    /// there cannot be sorted on.
    pub fn key<'v>(&self, record: &'v Value) -> Option<FieldKey<'v>> {
        FieldKey::of(self.path.resolve(record))
    }

    /// Builds a [`SortRule`] over JSON records.
    ///
    /// Values that cannot be sorted on compare as missing; use
    /// [`check_keys`](super::check_keys) first to reject them instead.
    pub fn to_rule(&self) -> SortRule<'_, Value> {
        SortRule::by_comparison(
            move |a, b| {
                let a = self.key(a).unwrap_or(FieldKey::Missing);
                let b = self.key(b).unwrap_or(FieldKey::Missing);
                a.compare(&b)
            },
            self.order,
        )
    }
}

impl FromStr for RuleSpec {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s.split(Self::SEPARATOR).collect::<Vec<_>>();

        match parts.as_slice() {
            [projection] => Ok(Self::new(projection.parse()?, SortOrder::Ascending)),
            [projection, direction] => Ok(Self::new(projection.parse()?, direction.parse()?)),
            _ => Err(RecordError::InvalidRule(s.to_string())),
        }
    }
}

impl fmt::Display for RuleSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.order {
            SortOrder::Ascending => write!(f, "{}", self.path),
            SortOrder::Descending => f.write_str(&concat_string!(
                self.path.to_string(),
                ":",
                self.order.as_str()
            )),
        }
    }
}
