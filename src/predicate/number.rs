//! Number predicates

use super::combinators::Predicate;
use std::cmp::PartialOrd;

/// Predicate for greater than or equal.
#[derive(Clone, Copy, Debug)]
pub struct Ge<T>(pub T);

impl<T: PartialOrd + Send + Sync> Predicate<T> for Ge<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value >= self.0
    }
}

/// Create a predicate that checks if value is greater than or equal to threshold.
///
/// # Example
///
/// ```rust
/// use lotto_validate::predicate::*;
///
/// assert!(ge(1000).check(&1000));
/// assert!(!ge(50).check(&49));
/// ```
pub fn ge<T: PartialOrd + Send + Sync>(value: T) -> Ge<T> {
    Ge(value)
}

/// Predicate for value in range (inclusive).
#[derive(Clone, Copy, Debug)]
pub struct Between<T> {
    min: T,
    max: T,
}

impl<T: PartialOrd + Send + Sync> Predicate<T> for Between<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value >= self.min && *value <= self.max
    }
}

/// Create a predicate that checks if value is between min and max (inclusive).
///
/// An inverted range (`min > max`) accepts nothing.
///
/// # Example
///
/// ```rust
/// use lotto_validate::predicate::*;
///
/// let p = between(1, 10);
/// assert!(p.check(&1));
/// assert!(p.check(&10));
/// assert!(!p.check(&0));
/// assert!(!p.check(&11));
/// ```
pub fn between<T: PartialOrd + Send + Sync>(min: T, max: T) -> Between<T> {
    Between { min, max }
}
