//! Core predicate trait and logical combinators

/// A composable predicate over values of type T.
///
/// # Example
///
/// ```rust
/// use lotto_validate::predicate::*;
///
/// let odd_ball = between(1_i64, 45).and(|n: &i64| n % 2 == 1);
/// assert!(odd_ball.check(&45));
/// assert!(!odd_ball.check(&44));
/// assert!(!odd_ball.check(&47));
/// ```
pub trait Predicate<T: ?Sized>: Send + Sync {
    /// Check if the value satisfies this predicate.
    fn check(&self, value: &T) -> bool;
}

// Blanket impl for closures
impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        self(value)
    }
}

/// Extension trait for predicate combinators.
pub trait PredicateExt<T: ?Sized>: Predicate<T> + Sized {
    /// Combine with AND logic.
    fn and<P: Predicate<T>>(self, other: P) -> And<Self, P> {
        And(self, other)
    }
}

impl<T: ?Sized, P: Predicate<T>> PredicateExt<T> for P {}

/// AND combinator - both predicates must be true.
#[derive(Clone, Copy, Debug)]
pub struct And<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for And<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) && self.1.check(value)
    }
}

/// Validate a value using a predicate.
///
/// Returns `Ok(value)` if the predicate is satisfied, otherwise `Err(error)`.
///
/// # Example
///
/// ```rust
/// use lotto_validate::{predicate::*, ValidationError};
///
/// assert_eq!(validate(3, between(1, 45), ValidationError::Duplicated), Ok(3));
/// assert_eq!(
///     validate(46, between(1, 45), ValidationError::OutOfRange { min: 1, max: 45 }),
///     Err(ValidationError::OutOfRange { min: 1, max: 45 })
/// );
/// ```
pub fn validate<T, E, P>(value: T, predicate: P, error: E) -> Result<T, E>
where
    P: Predicate<T>,
{
    if predicate.check(&value) {
        Ok(value)
    } else {
        Err(error)
    }
}
