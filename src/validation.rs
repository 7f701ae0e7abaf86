//! Validation type for accumulating errors
//!
//! `Validation` is similar to `Result` but keeps going after the first failure:
//! combining two failed validations merges their errors with [`Semigroup`].
//! The lottery entry layer uses it to report every problem in a ticket at once.
//!
//! # Examples
//!
//! ```
//! use lotto_validate::{Validation, ValidationError};
//!
//! let low = Validation::<i64, _>::failure(vec![ValidationError::OutOfRange { min: 1, max: 45 }]);
//! let dup = Validation::<i64, _>::failure(vec![ValidationError::Duplicated]);
//!
//! assert_eq!(
//!     low.and(dup),
//!     Validation::Failure(vec![
//!         ValidationError::OutOfRange { min: 1, max: 45 },
//!         ValidationError::Duplicated,
//!     ])
//! );
//! ```

use crate::predicate::Predicate;
use crate::Semigroup;

/// A validation that either succeeds with a value or fails with accumulated errors
///
/// # Type Parameters
///
/// * `T` - The type of the success value
/// * `E` - The type of the error value (must implement `Semigroup` for accumulation)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation<T, E> {
    /// Successful validation with a value
    Success(T),
    /// Failed validation with accumulated errors
    Failure(E),
}

impl<T, E> Validation<T, E> {
    /// Create a successful validation
    #[inline]
    pub fn success(value: T) -> Self {
        Validation::Success(value)
    }

    /// Create a failed validation
    #[inline]
    pub fn failure(error: E) -> Self {
        Validation::Failure(error)
    }

    /// Create a validation from a Result
    ///
    /// # Examples
    ///
    /// ```
    /// use lotto_validate::{validators, Validation, ValidationError};
    ///
    /// let v = Validation::from_result(validators::validate_over_number("1000", 1000));
    /// assert_eq!(v, Validation::Success(1000));
    ///
    /// let v = Validation::from_result(validators::validate_over_number("999", 1000));
    /// assert_eq!(v, Validation::Failure(ValidationError::BelowMinimum { min: 1000 }));
    /// ```
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Validation::Success(value),
            Err(error) => Validation::Failure(error),
        }
    }

    /// Transform the success value if present
    #[inline]
    pub fn map<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Validation::Success(value) => Validation::Success(f(value)),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }

    /// Transform the error value if present
    ///
    /// # Examples
    ///
    /// ```
    /// use lotto_validate::{Validation, ValidationError};
    ///
    /// let v = Validation::<i64, _>::failure(ValidationError::NotANumber);
    /// assert_eq!(v.map_err(|e| vec![e]), Validation::Failure(vec![ValidationError::NotANumber]));
    /// ```
    #[inline]
    pub fn map_err<E2, F>(self, f: F) -> Validation<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Validation::Success(value) => Validation::Success(value),
            Validation::Failure(error) => Validation::Failure(f(error)),
        }
    }
}

impl<T, E: Semigroup> Validation<T, E> {
    /// Combine two validations, accumulating errors using the Semigroup instance
    ///
    /// If both validations are successful, returns a success with a tuple of both values.
    /// If either or both fail, accumulates the errors using `Semigroup::combine`.
    pub fn and<U>(self, other: Validation<U, E>) -> Validation<(T, U), E> {
        match (self, other) {
            (Validation::Success(a), Validation::Success(b)) => Validation::Success((a, b)),
            (Validation::Failure(e1), Validation::Failure(e2)) => {
                Validation::Failure(e1.combine(e2))
            }
            (Validation::Failure(e), _) => Validation::Failure(e),
            (_, Validation::Failure(e)) => Validation::Failure(e),
        }
    }

    /// Chain a dependent validation
    ///
    /// The function is only called if the current validation is successful.
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> Validation<U, E>,
    {
        match self {
            Validation::Success(value) => f(value),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }

    /// Check the success value against a predicate
    ///
    /// A failing predicate turns the success into `Failure(error)`. An existing
    /// failure is returned unchanged and the predicate is not consulted.
    ///
    /// # Examples
    ///
    /// ```
    /// use lotto_validate::{predicate::all_distinct, Validation, ValidationError};
    ///
    /// let v = Validation::<_, Vec<ValidationError>>::success(vec![1, 2, 2])
    ///     .ensure(all_distinct(), vec![ValidationError::Duplicated]);
    /// assert_eq!(v, Validation::Failure(vec![ValidationError::Duplicated]));
    /// ```
    pub fn ensure<P>(self, predicate: P, error: E) -> Self
    where
        P: Predicate<T>,
    {
        match self {
            Validation::Success(value) if predicate.check(&value) => Validation::Success(value),
            Validation::Success(_) => Validation::Failure(error),
            Validation::Failure(e) => Validation::Failure(e),
        }
    }

    /// Combine all validations in a Vec
    ///
    /// Returns a success with a Vec of all success values if all validations succeed.
    /// Otherwise, accumulates all errors in order using `Semigroup::combine`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lotto_validate::Validation;
    ///
    /// let validations = vec![
    ///     Validation::<i32, _>::failure(vec!["error1"]),
    ///     Validation::success(2),
    ///     Validation::failure(vec!["error2"]),
    /// ];
    /// let result = Validation::all_vec(validations);
    /// assert_eq!(result, Validation::Failure(vec!["error1", "error2"]));
    /// ```
    pub fn all_vec(validations: Vec<Validation<T, E>>) -> Validation<Vec<T>, E> {
        let mut successes = Vec::new();
        let mut failure: Option<E> = None;

        for validation in validations {
            match validation {
                Validation::Success(value) => successes.push(value),
                Validation::Failure(error) => {
                    failure = Some(match failure {
                        Some(acc) => acc.combine(error),
                        None => error,
                    });
                }
            }
        }

        match failure {
            Some(error) => Validation::Failure(error),
            None => Validation::Success(successes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::ge;

    #[test]
    fn test_from_result_ok() {
        let v = Validation::from_result(Ok::<_, String>(42));
        assert_eq!(v, Validation::Success(42));
    }

    #[test]
    fn test_from_result_err() {
        let v = Validation::from_result(Err::<i32, _>("error".to_string()));
        assert_eq!(v, Validation::Failure("error".to_string()));
    }

    #[test]
    fn test_map_on_failure_is_untouched() {
        let v = Validation::<i32, _>::failure("error");
        assert_eq!(v.map(|x| x * 2), Validation::Failure("error"));
    }

    #[test]
    fn test_map_err_on_success_is_untouched() {
        let v = Validation::<_, &str>::success(5);
        assert_eq!(v.map_err(|e| e.len()), Validation::Success(5));
    }

    #[test]
    fn test_and_both_success() {
        let v = Validation::<_, Vec<&str>>::success(1).and(Validation::success(2));
        assert_eq!(v, Validation::Success((1, 2)));
    }

    #[test]
    fn test_and_both_failure() {
        let v1 = Validation::<i32, _>::failure(vec!["error1"]);
        let v2 = Validation::<i32, _>::failure(vec!["error2"]);
        assert_eq!(v1.and(v2), Validation::Failure(vec!["error1", "error2"]));
    }

    #[test]
    fn test_and_second_failure() {
        let v1 = Validation::<_, Vec<&str>>::success(1);
        let v2 = Validation::<i32, _>::failure(vec!["error2"]);
        assert_eq!(v1.and(v2), Validation::Failure(vec!["error2"]));
    }

    #[test]
    fn test_and_then_skips_on_failure() {
        let v = Validation::<i32, _>::failure(vec!["first"]);
        let result = v.and_then(|_| Validation::<i32, _>::failure(vec!["second"]));
        assert_eq!(result, Validation::Failure(vec!["first"]));
    }

    #[test]
    fn test_ensure_passes() {
        let v = Validation::<_, Vec<&str>>::success(1000).ensure(ge(1000), vec!["too small"]);
        assert_eq!(v, Validation::Success(1000));
    }

    #[test]
    fn test_ensure_fails() {
        let v = Validation::<_, Vec<&str>>::success(999).ensure(ge(1000), vec!["too small"]);
        assert_eq!(v, Validation::Failure(vec!["too small"]));
    }

    #[test]
    fn test_ensure_keeps_existing_failure() {
        let v = Validation::<i64, _>::failure(vec!["earlier"]).ensure(ge(0), vec!["later"]);
        assert_eq!(v, Validation::Failure(vec!["earlier"]));
    }

    #[test]
    fn test_all_vec_empty() {
        let result = Validation::<i32, Vec<&str>>::all_vec(vec![]);
        assert_eq!(result, Validation::Success(vec![]));
    }

    #[test]
    fn test_all_vec_all_success() {
        let result = Validation::<_, Vec<&str>>::all_vec(vec![
            Validation::success(1),
            Validation::success(2),
        ]);
        assert_eq!(result, Validation::Success(vec![1, 2]));
    }

    #[test]
    fn test_all_vec_accumulates_in_order() {
        let result = Validation::all_vec(vec![
            Validation::<i32, _>::failure(vec!["a"]),
            Validation::success(2),
            Validation::failure(vec!["b"]),
            Validation::failure(vec!["c"]),
        ]);
        assert_eq!(result, Validation::Failure(vec!["a", "b", "c"]));
    }
}
