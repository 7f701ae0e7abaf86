//! Testing utilities for code built on the validators
//!
//! - [`RecordingSignal`] stands in for the real error signal and remembers
//!   every message it was asked to raise.
//! - `assert_success!`, `assert_failure!` and `assert_validation_errors!`
//!   check [`Validation`](crate::Validation) values.
//! - With the `proptest` feature, [`integer_literal`] and
//!   [`non_integer_literal`] generate input strings.
//!
//! # Example
//!
//! ```rust
//! use lotto_validate::testing::RecordingSignal;
//! use lotto_validate::Guard;
//!
//! let guard = Guard::new(RecordingSignal::new());
//! guard.is_over_number("49", 50);
//! assert_eq!(guard.signal().messages(), vec!["must be a number of 50 or more."]);
//! ```

use std::sync::{Mutex, PoisonError};

use crate::signal::ErrorSignal;

/// Error signal that records raised messages in order.
#[derive(Debug, Default)]
pub struct RecordingSignal {
    messages: Mutex<Vec<String>>,
}

impl RecordingSignal {
    /// Create a signal with nothing recorded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages raised so far, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of messages raised so far.
    pub fn len(&self) -> usize {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// True if nothing has been raised.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Forget everything recorded so far.
    pub fn clear(&self) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl ErrorSignal for RecordingSignal {
    fn raise(&self, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
    }
}

/// Assert that a validation succeeds.
///
/// # Example
///
/// ```rust
/// use lotto_validate::{lotto, assert_success, Validators};
///
/// assert_success!(lotto::parse_winning_numbers("1,2,3,4,5,6", &Validators::default()));
/// ```
#[macro_export]
macro_rules! assert_success {
    ($validation:expr) => {
        match $validation {
            $crate::Validation::Success(_) => {}
            $crate::Validation::Failure(e) => {
                panic!("Expected Success, got Failure: {:?}", e);
            }
        }
    };
}

/// Assert that a validation fails.
#[macro_export]
macro_rules! assert_failure {
    ($validation:expr) => {
        match $validation {
            $crate::Validation::Failure(_) => {}
            $crate::Validation::Success(v) => {
                panic!("Expected Failure, got Success: {:?}", v);
            }
        }
    };
}

/// Assert that a validation fails with specific errors.
///
/// # Example
///
/// ```rust
/// use lotto_validate::{lotto, assert_validation_errors, ValidationError, Validators};
///
/// assert_validation_errors!(
///     lotto::parse_winning_numbers("1,2,3,4,5,5", &Validators::default()),
///     vec![ValidationError::Duplicated]
/// );
/// ```
#[macro_export]
macro_rules! assert_validation_errors {
    ($validation:expr, $expected:expr) => {
        match $validation {
            $crate::Validation::Failure(errors) => {
                assert_eq!(errors, $expected);
            }
            $crate::Validation::Success(v) => {
                panic!(
                    "Expected Failure with errors {:?}, got Success: {:?}",
                    $expected, v
                );
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

/// Strategy producing strings that match `^-?\d+$`.
#[cfg(feature = "proptest")]
pub fn integer_literal() -> impl Strategy<Value = String> {
    "-?[0-9]{1,25}"
}

/// Strategy producing strings that are not integer literals.
#[cfg(feature = "proptest")]
pub fn non_integer_literal() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("-".to_string()),
        "[+ ]?[0-9]{1,5}[a-z. ,]{1,3}[0-9]{0,3}",
        "[a-z]{1,8}",
        "[+ ][0-9]{1,5}",
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Validation, ValidationError};

    #[test]
    fn recording_signal_keeps_order() {
        let signal = RecordingSignal::new();
        signal.raise("first");
        signal.raise("second");
        assert_eq!(signal.messages(), vec!["first", "second"]);
        assert_eq!(signal.len(), 2);
    }

    #[test]
    fn recording_signal_clear() {
        let signal = RecordingSignal::new();
        signal.raise("first");
        signal.clear();
        assert!(signal.is_empty());
    }

    #[test]
    fn assert_success_macro() {
        let val = Validation::<_, Vec<ValidationError>>::success(42);
        assert_success!(val);
    }

    #[test]
    fn assert_failure_macro() {
        let val = Validation::<i32, _>::failure(vec![ValidationError::NotANumber]);
        assert_failure!(val);
    }

    #[test]
    fn assert_validation_errors_macro() {
        let val = Validation::<i32, _>::failure(vec![ValidationError::Duplicated]);
        assert_validation_errors!(val, vec![ValidationError::Duplicated]);
    }

    #[test]
    #[should_panic(expected = "Expected Success, got Failure")]
    fn assert_success_panics_on_failure() {
        let val = Validation::<i32, _>::failure(vec![ValidationError::NotANumber]);
        assert_success!(val);
    }

    #[test]
    #[should_panic(expected = "Expected Failure, got Success")]
    fn assert_failure_panics_on_success() {
        let val = Validation::<_, Vec<ValidationError>>::success(42);
        assert_failure!(val);
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use super::*;
        use crate::validators::is_number;

        proptest! {
            #[test]
            fn integer_literals_are_numbers(s in integer_literal()) {
                prop_assert!(is_number(&s));
            }

            #[test]
            fn non_integer_literals_are_rejected(s in non_integer_literal()) {
                prop_assert!(!is_number(&s));
            }
        }
    }
}
