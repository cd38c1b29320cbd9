use std::cmp::Ordering;

/// Returns an [`Ordering`] between two [`PartialOrd`]s, treating incomparable
/// values as equal.
#[inline]
pub(crate) fn partial_ordering<T: PartialOrd>(a: T, b: T) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}
