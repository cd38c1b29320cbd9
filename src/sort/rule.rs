use std::{cmp::Ordering, fmt, iter, slice};

use super::{comparable::Comparable, SortError, SortOrder};

/// Compares the projections of two elements in ascending order.
pub(crate) type KeyComparison<'a, T> = Box<dyn Fn(&T, &T) -> Ordering + 'a>;

/// A single sort rule: a projection from an element onto a [`Comparable`] key,
/// and the [`SortOrder`] to sort that key in.
pub struct SortRule<'a, T> {
    key_cmp: KeyComparison<'a, T>,
    order: SortOrder,
}

impl<'a, T> SortRule<'a, T> {
    /// Creates a rule from a projection and an order.
    pub fn new<K, F>(projection: F, order: SortOrder) -> Self
    where
        K: Comparable,
        F: Fn(&T) -> K + 'a,
    {
        Self {
            key_cmp: Box::new(move |a, b| projection(a).compare(&projection(b))),
            order,
        }
    }

    /// Creates a rule sorting by `projection` in [`SortOrder::Ascending`]
    /// order. This is also what a bare projection means.
    pub fn asc<K, F>(projection: F) -> Self
    where
        K: Comparable,
        F: Fn(&T) -> K + 'a,
    {
        Self::new(projection, SortOrder::Ascending)
    }

    /// Creates a rule sorting by `projection` in [`SortOrder::Descending`]
    /// order.
    pub fn desc<K, F>(projection: F) -> Self
    where
        K: Comparable,
        F: Fn(&T) -> K + 'a,
    {
        Self::new(projection, SortOrder::Descending)
    }

    /// Creates a rule from a function that already compares the projections of
    /// two elements in ascending order.
    ///
    /// This is useful when keys borrow from the elements, which a plain
    /// `Fn(&T) -> K` projection cannot express.
    pub fn by_comparison<F>(key_cmp: F, order: SortOrder) -> Self
    where
        F: Fn(&T, &T) -> Ordering + 'a,
    {
        Self {
            key_cmp: Box::new(key_cmp),
            order,
        }
    }

    /// Returns the order of this rule.
    pub fn order(&self) -> SortOrder {
        self.order
    }

    /// Returns this rule with its order replaced.
    pub fn with_order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }

    /// Compares the projected keys of `a` and `b`, ignoring the rule's order.
    #[inline]
    pub(crate) fn compare_keys(&self, a: &T, b: &T) -> Ordering {
        (self.key_cmp)(a, b)
    }
}

impl<T> fmt::Debug for SortRule<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortRule")
            .field("order", &self.order)
            .finish_non_exhaustive()
    }
}

/// Iterator over the rules of a [`RuleList`], in priority order.
pub type Iter<'r, 'a, T> =
    iter::Chain<iter::Once<&'r SortRule<'a, T>>, slice::Iter<'r, SortRule<'a, T>>>;

/// An ordered, non-empty list of [`SortRule`]s.
///
/// The first rule is the primary one; each following rule only breaks ties
/// left by the rules before it.
pub struct RuleList<'a, T> {
    first: SortRule<'a, T>,
    rest: Vec<SortRule<'a, T>>,
}

impl<'a, T> RuleList<'a, T> {
    /// Creates a list with `first` as the primary rule.
    pub fn new(first: SortRule<'a, T>) -> Self {
        Self {
            first,
            rest: Vec::new(),
        }
    }

    /// Shorthand for a list whose primary rule sorts by `projection`,
    /// ascending.
    pub fn by<K, F>(projection: F) -> Self
    where
        K: Comparable,
        F: Fn(&T) -> K + 'a,
    {
        Self::new(SortRule::asc(projection))
    }

    /// Shorthand for a list whose primary rule sorts by `projection`,
    /// descending.
    pub fn by_desc<K, F>(projection: F) -> Self
    where
        K: Comparable,
        F: Fn(&T) -> K + 'a,
    {
        Self::new(SortRule::desc(projection))
    }

    /// Appends a tie-breaking rule.
    pub fn then(mut self, rule: SortRule<'a, T>) -> Self {
        self.rest.push(rule);
        self
    }

    /// Appends an ascending tie-breaking rule.
    pub fn then_by<K, F>(self, projection: F) -> Self
    where
        K: Comparable,
        F: Fn(&T) -> K + 'a,
    {
        self.then(SortRule::asc(projection))
    }

    /// Appends a descending tie-breaking rule.
    pub fn then_by_desc<K, F>(self, projection: F) -> Self
    where
        K: Comparable,
        F: Fn(&T) -> K + 'a,
    {
        self.then(SortRule::desc(projection))
    }

    /// Returns the number of rules. This is never zero.
    pub fn len(&self) -> usize {
        1 + self.rest.len()
    }

    /// Always `false`; present for symmetry with [`RuleList::len`].
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the primary rule and the tie-breaking rules after it.
    pub fn split_first(&self) -> (&SortRule<'a, T>, &[SortRule<'a, T>]) {
        (&self.first, &self.rest)
    }

    /// Iterates over the rules in priority order.
    pub fn iter(&self) -> Iter<'_, 'a, T> {
        iter::once(&self.first).chain(&self.rest)
    }
}

impl<T> fmt::Debug for RuleList<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T> From<SortRule<'a, T>> for RuleList<'a, T> {
    fn from(rule: SortRule<'a, T>) -> Self {
        Self::new(rule)
    }
}

impl<'a, T> TryFrom<Vec<SortRule<'a, T>>> for RuleList<'a, T> {
    type Error = SortError;

    fn try_from(rules: Vec<SortRule<'a, T>>) -> Result<Self, Self::Error> {
        let mut rules = rules.into_iter();
        let first = rules.next().ok_or(SortError::EmptyRuleList)?;

        Ok(Self {
            first,
            rest: rules.collect(),
        })
    }
}

impl<'a, T> Extend<SortRule<'a, T>> for RuleList<'a, T> {
    fn extend<I: IntoIterator<Item = SortRule<'a, T>>>(&mut self, iter: I) {
        self.rest.extend(iter);
    }
}

impl<'r, 'a, T> IntoIterator for &'r RuleList<'a, T> {
    type Item = &'r SortRule<'a, T>;
    type IntoIter = Iter<'r, 'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Projects an element onto (a copy of) itself, for sorting elements that
/// are already [`Comparable`].
pub fn identity<T: Clone>(item: &T) -> T {
    item.clone()
}
