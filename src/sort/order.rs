use std::{cmp::Ordering, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::SortError;

/// Denotes the sort order of a single rule.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// All recognized textual forms, in declaration order.
    pub const ALL: [&'static str; 2] = ["asc", "desc"];

    /// Returns the textual form of this order.
    pub const fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "asc",
            SortOrder::Descending => "desc",
        }
    }

    /// Returns the opposite order.
    pub const fn toggle(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    /// Given how a projected `a` compares to a projected `b`, returns whether
    /// `a` should be placed after `b` under this order.
    ///
    /// For [`SortOrder::Ascending`] this is `a > b`, and for
    /// [`SortOrder::Descending`] this is `a < b`. If neither `a` ranks after
    /// `b` nor `b` after `a`, the two are considered equal.
    #[inline]
    pub const fn ranks_after(self, projected: Ordering) -> bool {
        match self {
            SortOrder::Ascending => matches!(projected, Ordering::Greater),
            SortOrder::Descending => matches!(projected, Ordering::Less),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Ascending),
            "desc" => Ok(SortOrder::Descending),
            other => Err(SortError::UnrecognizedDirection(other.to_string())),
        }
    }
}

impl TryFrom<String> for SortOrder {
    type Error = SortError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SortOrder> for String {
    fn from(order: SortOrder) -> Self {
        order.as_str().to_string()
    }
}
