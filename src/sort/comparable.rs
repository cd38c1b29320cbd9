//! Values that a sort rule may project elements onto.
//!
//! [`Comparable`] covers primitive-like values, a few smart pointer and
//! container wrappers around them, and date/time values.
//! Anything else with a total order can opt in through
//! [`comparable_by_ord!`](crate::comparable_by_ord).

use std::{
    borrow::Cow,
    cmp::{Ordering, Reverse},
    rc::Rc,
    sync::Arc,
    time::{Duration, Instant, SystemTime},
};

use crate::utils::general::partial_ordering;

/// A value with a deterministic ordering that a sort rule can compare.
pub trait Comparable {
    /// Returns an [`Ordering`] between `self` and `other`.
    fn compare(&self, other: &Self) -> Ordering;
}

/// Implements [`Comparable`] for one or more types through their [`Ord`]
/// implementation.
///
/// ```
/// use keysort::{comparable_by_ord, sort_by, RuleList};
///
/// #[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
/// enum Priority {
///     Low,
///     High,
/// }
///
/// comparable_by_ord!(Priority);
///
/// let tasks = [("b", Priority::High), ("a", Priority::Low)];
/// let sorted = sort_by(&tasks, RuleList::by(|t: &(&str, Priority)| t.1.clone()));
/// assert_eq!(sorted[0].0, "a");
/// ```
#[macro_export]
macro_rules! comparable_by_ord {
    ( $($Type:ty),+ $(,)? ) => {
        $(
            impl $crate::sort::comparable::Comparable for $Type {
                #[inline]
                fn compare(&self, other: &Self) -> ::std::cmp::Ordering {
                    ::std::cmp::Ord::cmp(self, other)
                }
            }
        )*
    };
}

macro_rules! comparable_float {
    ( $($Type:ty),+ $(,)? ) => {
        $(
            impl Comparable for $Type {
                #[inline]
                fn compare(&self, other: &Self) -> Ordering {
                    match (self.is_nan(), other.is_nan()) {
                        (false, false) => partial_ordering(self, other),
                        (self_nan, other_nan) => self_nan.cmp(&other_nan),
                    }
                }
            }
        )*
    };
}

comparable_by_ord!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, bool, char, str, String, (),
    Duration, Instant, SystemTime,
);

// NaN ranks after every number, and ties with other NaNs. Zeroes of either
// sign tie.
comparable_float!(f32, f64);

#[cfg(feature = "time")]
comparable_by_ord!(
    time::Date,
    time::Time,
    time::PrimitiveDateTime,
    time::OffsetDateTime,
);

impl<K: Comparable + ?Sized> Comparable for &K {
    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        (**self).compare(*other)
    }
}

impl<K: Comparable + ?Sized> Comparable for Box<K> {
    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        (**self).compare(other)
    }
}

impl<K: Comparable + ?Sized> Comparable for Rc<K> {
    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        (**self).compare(other)
    }
}

impl<K: Comparable + ?Sized> Comparable for Arc<K> {
    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        (**self).compare(other)
    }
}

impl<B> Comparable for Cow<'_, B>
where
    B: Comparable + ToOwned + ?Sized,
{
    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        (**self).compare(&**other)
    }
}

/// [`None`] sorts before any [`Some`], as with [`Option`]'s own [`Ord`].
impl<K: Comparable> Comparable for Option<K> {
    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Some(a), Some(b)) => a.compare(b),
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

impl<K: Comparable> Comparable for Reverse<K> {
    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        other.0.compare(&self.0)
    }
}

/// Lexicographic, like slices' [`Ord`].
impl<K: Comparable> Comparable for [K] {
    fn compare(&self, other: &Self) -> Ordering {
        for (a, b) in self.iter().zip(other) {
            match a.compare(b) {
                Ordering::Equal => {}
                non_eq => return non_eq,
            }
        }

        self.len().cmp(&other.len())
    }
}

impl<K: Comparable> Comparable for Vec<K> {
    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        self.as_slice().compare(other.as_slice())
    }
}

macro_rules! comparable_tuple_impl {
    ( $( ($($name:ident $idx:tt),+) ),+ $(,)? ) => {
        $(
            impl<$($name: Comparable),+> Comparable for ($($name,)+) {
                fn compare(&self, other: &Self) -> Ordering {
                    Ordering::Equal
                        $(.then_with(|| self.$idx.compare(&other.$idx)))+
                }
            }
        )*
    };
}

comparable_tuple_impl!(
    (A 0),
    (A 0, B 1),
    (A 0, B 1, C 2),
    (A 0, B 1, C 2, D 3),
);
