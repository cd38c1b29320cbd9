use std::result;

use thiserror::Error;

/// A type alias for results of building or running a sort.
pub type Result<T> = result::Result<T, SortError>;

/// An error that can occur while building a sort.
///
/// Both variants are caller mistakes; neither is transient.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SortError {
    /// A sort was requested without any rules.
    #[error("invalid argument: at least one sort rule required")]
    EmptyRuleList,
    /// A direction other than `asc` or `desc` was given.
    #[error("unrecognized sort direction '{0}', expected 'asc' or 'desc'")]
    UnrecognizedDirection(String),
}
