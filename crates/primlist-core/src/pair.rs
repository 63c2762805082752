//! Two-component element type.

use std::cmp::Ordering;
use std::fmt;

use crate::order::NaturalOrd;

/// A pair of same-typed values, e.g. a 2D grid coordinate.
///
/// Ordered lexicographically: `first`, then `second`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pair<T> {
    /// First component.
    pub first: T,
    /// Second component.
    pub second: T,
}

impl<T> Pair<T> {
    /// Build a pair from its two components.
    pub const fn new(first: T, second: T) -> Self {
        Self { first, second }
    }
}

impl<T> From<(T, T)> for Pair<T> {
    fn from((first, second): (T, T)) -> Self {
        Self { first, second }
    }
}

impl<T: NaturalOrd> NaturalOrd for Pair<T> {
    fn natural_cmp(&self, other: &Self) -> Ordering {
        self.first
            .natural_cmp(&other.first)
            .then_with(|| self.second.natural_cmp(&other.second))
    }
}

impl<T: fmt::Display> fmt::Display for Pair<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}
