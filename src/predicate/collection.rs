//! Collection predicates

use super::combinators::Predicate;
use std::collections::HashSet;
use std::hash::Hash;

/// Predicate that checks that no element of a collection repeats.
#[derive(Clone, Copy, Default, Debug)]
pub struct AllDistinct;

impl AllDistinct {
    fn distinct<T: Eq + Hash>(values: &[T]) -> bool {
        let mut seen = HashSet::with_capacity(values.len());
        values.iter().all(|v| seen.insert(v))
    }
}

impl<T: Eq + Hash> Predicate<[T]> for AllDistinct {
    #[inline]
    fn check(&self, value: &[T]) -> bool {
        Self::distinct(value)
    }
}

impl<T: Eq + Hash> Predicate<Vec<T>> for AllDistinct {
    #[inline]
    fn check(&self, value: &Vec<T>) -> bool {
        Self::distinct(value)
    }
}

/// Create a predicate that checks every element of a collection is unique.
///
/// # Example
///
/// ```rust
/// use lotto_validate::predicate::*;
///
/// assert!(all_distinct().check(&vec![1, 2, 3]));
/// assert!(!all_distinct().check(&vec![1, 2, 3, 3, 5]));
/// ```
pub fn all_distinct() -> AllDistinct {
    AllDistinct
}
