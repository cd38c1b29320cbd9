//! Multi-key sorting.
//!
//! A sort is described by a [`RuleList`]: an ordered, non-empty list of
//! [`SortRule`]s, each projecting an element onto a [`Comparable`] key and
//! sorting that key in some [`SortOrder`]. The first rule decides; later
//! rules only break ties.
//!
//! There are two ways to call a sort. Eagerly, with the items first:
//!
//! ```
//! use keysort::{sort_by, RuleList, SortRule};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Fruit {
//!     color: &'static str,
//!     weight: u32,
//! }
//!
//! let fruits = [
//!     Fruit { color: "red", weight: 2 },
//!     Fruit { color: "blue", weight: 3 },
//!     Fruit { color: "green", weight: 1 },
//!     Fruit { color: "purple", weight: 1 },
//! ];
//!
//! let sorted = sort_by(
//!     &fruits,
//!     RuleList::new(SortRule::asc(|f: &Fruit| f.weight)).then_by(|f: &Fruit| f.color),
//! );
//! let colors: Vec<_> = sorted.iter().map(|f| f.color).collect();
//! assert_eq!(colors, ["green", "purple", "red", "blue"]);
//! ```
//!
//! Or curried, with the rules first, producing a [`SortBy`] that can be applied
//! to any number of inputs later:
//!
//! ```
//! use keysort::{sort_by_rules, SortRule, SortedByExt};
//!
//! let longest_first = sort_by_rules(SortRule::desc(|s: &&str| s.len()));
//! assert_eq!(["a", "abc", "ab"].pipe(&longest_first), ["abc", "ab", "a"]);
//! ```
//!
//! The sort is stable unless [`SortBy::unstable`] is used.

pub mod comparable;
mod comparator;
mod dispatch;
mod error;
mod order;
mod rule;

pub use comparable::Comparable;
pub use comparator::{comparator, Comparator};
pub use dispatch::{
    dispatch, sort_by, sort_by_rules, sort_by_strict, Dispatched, SortArg, SortBy, SortedByExt,
    Stability,
};
pub use error::{Result, SortError};
pub use order::SortOrder;
pub use rule::{identity, RuleList, SortRule};
