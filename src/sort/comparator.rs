use std::cmp::Ordering;

use super::{RuleList, SortRule};

/// A two-argument comparator usable by any standard sort.
pub type Comparator<'r, T> = Box<dyn Fn(&T, &T) -> Ordering + 'r>;

/// Builds a single comparator out of a [`RuleList`].
///
/// The primary rule decides first. Only when it considers two elements equal is
/// the next rule consulted, and so on; if every rule ties, the elements compare
/// as [`Ordering::Equal`].
pub fn comparator<'r, 'a, T>(rules: &'r RuleList<'a, T>) -> Comparator<'r, T>
where
    'a: 'r,
    T: 'r,
{
    let (primary, rest) = rules.split_first();
    comparer(primary, rest)
}

fn comparer<'r, 'a, T>(
    primary: &'r SortRule<'a, T>, rest: &'r [SortRule<'a, T>],
) -> Comparator<'r, T>
where
    'a: 'r,
    T: 'r,
{
    let order = primary.order();
    let next = rest
        .split_first()
        .map(|(secondary, others)| comparer(secondary, others));

    Box::new(move |a, b| {
        let projected = primary.compare_keys(a, b);

        if order.ranks_after(projected) {
            Ordering::Greater
        } else if order.ranks_after(projected.reverse()) {
            Ordering::Less
        } else {
            // Equal as far as this rule can tell, so defer to the next one.
            match &next {
                Some(next) => next(a, b),
                None => Ordering::Equal,
            }
        }
    })
}
