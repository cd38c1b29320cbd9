//! The two call shapes of a sort: eager (items first) and curried (rules
//! first, items later).

use super::{comparator, Result, RuleList, SortRule};

/// Whether a sort keeps elements that tie on every rule in their original
/// relative order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Stability {
    /// Fully tied elements keep their input order.
    #[default]
    Stable,
    /// Fully tied elements may end up in any order.
    Unstable,
}

/// A sort that has its rules but is still waiting for items.
///
/// Applying it never mutates the given items and never changes the sort
/// itself, so one [`SortBy`] can be applied any number of times.
#[derive(Debug)]
pub struct SortBy<'a, T> {
    rules: RuleList<'a, T>,
    stability: Stability,
}

impl<'a, T> SortBy<'a, T> {
    /// Creates a stable sort from some rules.
    pub fn new<R: Into<RuleList<'a, T>>>(rules: R) -> Self {
        Self {
            rules: rules.into(),
            stability: Stability::Stable,
        }
    }

    /// Allows fully tied elements to be reordered, in exchange for a sort that
    /// does not allocate.
    pub fn unstable(mut self) -> Self {
        self.stability = Stability::Unstable;
        self
    }

    /// Sets the [`Stability`] of the sort.
    pub fn with_stability(mut self, stability: Stability) -> Self {
        self.stability = stability;
        self
    }

    /// Returns the [`Stability`] of the sort.
    pub fn stability(&self) -> Stability {
        self.stability
    }

    /// Returns the rules of the sort.
    pub fn rules(&self) -> &RuleList<'a, T> {
        &self.rules
    }

    /// Sorts `items` in place.
    pub fn sort_in_place(&self, items: &mut [T]) {
        let cmp = comparator(&self.rules);

        match self.stability {
            Stability::Stable => items.sort_by(cmp),
            Stability::Unstable => items.sort_unstable_by(cmp),
        }
    }
}

impl<'a, T: Clone> SortBy<'a, T> {
    /// Returns a sorted copy of `items`.
    pub fn apply(&self, items: &[T]) -> Vec<T> {
        let mut sorted = items.to_vec();
        self.sort_in_place(&mut sorted);
        sorted
    }

    /// Returns a sorted copy of a fixed-size array, keeping its length in the
    /// type.
    pub fn apply_array<const N: usize>(&self, items: &[T; N]) -> [T; N] {
        let mut sorted = items.clone();
        self.sort_in_place(&mut sorted);
        sorted
    }

    /// Turns the sort into a plain function from items to sorted items.
    pub fn into_fn(self) -> impl Fn(&[T]) -> Vec<T> + 'a
    where
        T: 'a,
    {
        move |items| self.apply(items)
    }
}

/// Returns a copy of `items` sorted by `rules`.
///
/// ```
/// use keysort::{sort_by, RuleList};
///
/// let items = [1, 3, 7, 2];
/// assert_eq!(sort_by(&items, RuleList::by(|x: &i32| *x)), vec![1, 2, 3, 7]);
/// assert_eq!(items, [1, 3, 7, 2]);
/// ```
pub fn sort_by<'a, T, R>(items: &[T], rules: R) -> Vec<T>
where
    T: Clone,
    R: Into<RuleList<'a, T>>,
{
    SortBy::new(rules).apply(items)
}

/// Returns a [`SortBy`] holding `rules`, to be applied to items later.
///
/// ```
/// use keysort::{sort_by_rules, SortRule};
///
/// let by_len = sort_by_rules(SortRule::desc(|s: &&str| s.len()));
/// assert_eq!(by_len.apply(&["a", "ccc", "bb"]), vec!["ccc", "bb", "a"]);
/// assert_eq!(by_len.apply(&["xx", "y"]), vec!["xx", "y"]);
/// ```
pub fn sort_by_rules<'a, T, R>(rules: R) -> SortBy<'a, T>
where
    R: Into<RuleList<'a, T>>,
{
    SortBy::new(rules)
}

/// Like [`sort_by`], but for fixed-size arrays: the output has the same length
/// as the input, in the type.
pub fn sort_by_strict<'a, T, R, const N: usize>(items: &[T; N], rules: R) -> [T; N]
where
    T: Clone,
    R: Into<RuleList<'a, T>>,
{
    SortBy::new(rules).apply_array(items)
}

/// The first argument of [`dispatch`]: either the items to sort, or the first
/// rule.
#[derive(Debug)]
pub enum SortArg<'s, 'a, T> {
    Items(&'s [T]),
    Rule(SortRule<'a, T>),
}

impl<'s, T> From<&'s [T]> for SortArg<'s, '_, T> {
    fn from(items: &'s [T]) -> Self {
        SortArg::Items(items)
    }
}

impl<'s, T, const N: usize> From<&'s [T; N]> for SortArg<'s, '_, T> {
    fn from(items: &'s [T; N]) -> Self {
        SortArg::Items(items)
    }
}

impl<'s, T> From<&'s Vec<T>> for SortArg<'s, '_, T> {
    fn from(items: &'s Vec<T>) -> Self {
        SortArg::Items(items)
    }
}

impl<'a, T> From<SortRule<'a, T>> for SortArg<'_, 'a, T> {
    fn from(rule: SortRule<'a, T>) -> Self {
        SortArg::Rule(rule)
    }
}

/// What [`dispatch`] produced, depending on the call shape.
#[derive(Debug)]
pub enum Dispatched<'a, T> {
    /// Items came first, so they were sorted right away.
    Sorted(Vec<T>),
    /// A rule came first, so the sort waits for items.
    Deferred(SortBy<'a, T>),
}

impl<'a, T> Dispatched<'a, T> {
    /// Returns the sorted items, if the call was eager.
    pub fn sorted(self) -> Option<Vec<T>> {
        match self {
            Dispatched::Sorted(items) => Some(items),
            Dispatched::Deferred(_) => None,
        }
    }

    /// Returns the pending sort, if the call was curried.
    pub fn deferred(self) -> Option<SortBy<'a, T>> {
        match self {
            Dispatched::Sorted(_) => None,
            Dispatched::Deferred(sort) => Some(sort),
        }
    }
}

/// Single entry point for both call shapes.
///
/// If `first` is a rule, it and `rest` become the rules of a deferred sort.
/// If `first` is the items, `rest` are the rules and the items are sorted
/// immediately; `rest` must then not be empty.
pub fn dispatch<'s, 'a, T, A>(first: A, rest: Vec<SortRule<'a, T>>) -> Result<Dispatched<'a, T>>
where
    T: Clone + 's,
    A: Into<SortArg<'s, 'a, T>>,
{
    match first.into() {
        SortArg::Rule(rule) => {
            let mut rules = RuleList::new(rule);
            rules.extend(rest);
            Ok(Dispatched::Deferred(SortBy::new(rules)))
        }
        SortArg::Items(items) => {
            let rules = RuleList::try_from(rest)?;
            Ok(Dispatched::Sorted(sort_by(items, rules)))
        }
    }
}

/// Sorting methods on slices.
pub trait SortedByExt<T> {
    /// Returns a sorted copy of the items, as [`sort_by`].
    fn sorted_by<'a, R>(&self, rules: R) -> Vec<T>
    where
        R: Into<RuleList<'a, T>>,
        T: 'a;

    /// Passes the items through an existing [`SortBy`].
    fn pipe(&self, sort: &SortBy<'_, T>) -> Vec<T>;
}

impl<T: Clone> SortedByExt<T> for [T] {
    fn sorted_by<'a, R>(&self, rules: R) -> Vec<T>
    where
        R: Into<RuleList<'a, T>>,
        T: 'a,
    {
        sort_by(self, rules)
    }

    fn pipe(&self, sort: &SortBy<'_, T>) -> Vec<T> {
        sort.apply(self)
    }
}
