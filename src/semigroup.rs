//! Semigroup trait for accumulating validation errors
//!
//! A Semigroup is a type with an associative binary operation. `Validation`
//! uses it to merge the errors of several failed checks instead of stopping
//! at the first one, so a user who typed `"0,2,2,99"` hears about every
//! problem in a single pass.
//!
//! # Examples
//!
//! ```
//! use lotto_validate::Semigroup;
//!
//! let first = vec!["must be a number between 1 and 45."];
//! let second = vec!["elements must not be duplicated."];
//! assert_eq!(
//!     first.combine(second),
//!     vec![
//!         "must be a number between 1 and 45.",
//!         "elements must not be duplicated.",
//!     ]
//! );
//! ```

/// A type that supports an associative binary operation
///
/// # Laws
///
/// Implementations must satisfy the associativity law:
/// ```text
/// a.combine(b).combine(c) == a.combine(b.combine(c))
/// ```
pub trait Semigroup: Sized {
    /// Combine this value with another value associatively
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}
