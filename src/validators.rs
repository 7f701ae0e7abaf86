//! Input validators for numeric user entry
//!
//! Every check comes in three shapes:
//!
//! - `is_*` returns a plain `bool` and has no side effects.
//! - `validate_*` returns `Result<_, ValidationError>` for use with `?`.
//! - [`Guard`] methods return the same `bool` as `is_*`, and on failure hand
//!   the fixed message to an injected [`ErrorSignal`] exactly once.
//!
//! A number is an integer literal: one optional leading `-` followed by ASCII
//! digits (`^-?\d+$`). `"+5"`, `"1.5"`, `" 1"` and `""` are not numbers.
//!
//! # Example
//!
//! ```
//! use lotto_validate::validators::*;
//! use lotto_validate::ValidationError;
//!
//! assert!(is_numbers_in_array("1,2,3"));
//! assert!(!is_number_in_range("11", 1, 10));
//! assert_eq!(validate_over_number("49", 50), Err(ValidationError::BelowMinimum { min: 50 }));
//! assert!(has_duplicate_in_array(&[1, 2, 3, 3, 5]));
//! ```

use std::fmt;
use std::hash::Hash;

use crate::error::{ConfigError, ValidationError};
use crate::predicate::{all_distinct, between, ge, integer_literal, validate, Predicate};
use crate::signal::ErrorSignal;

/// Separator between numbers typed on a single line.
pub const DEFAULT_DELIMITER: &str = ",";

/// Settings for [`Validators`].
///
/// # Example
///
/// ```
/// use lotto_validate::{ValidatorConfig, Validators};
///
/// let validators = Validators::new(ValidatorConfig::default().with_delimiter(";")).unwrap();
/// assert!(validators.is_numbers_in_array("4;8;15"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ValidatorConfig {
    /// Separator used to split composite input into tokens.
    pub delimiter: String,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
        }
    }
}

impl ValidatorConfig {
    /// Replace the token delimiter.
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }
}

/// Validators that depend on configuration.
///
/// Only splitting composite input needs the delimiter; the single-value
/// checks are also available as free functions in this module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validators {
    delimiter: String,
}

impl Default for Validators {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
        }
    }
}

impl Validators {
    /// Build validators from a config, rejecting an empty delimiter.
    pub fn new(config: ValidatorConfig) -> Result<Self, ConfigError> {
        if config.delimiter.is_empty() {
            return Err(ConfigError::EmptyDelimiter);
        }
        Ok(Self {
            delimiter: config.delimiter,
        })
    }

    /// The configured delimiter.
    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Split composite input into raw tokens. Tokens are not trimmed.
    pub fn tokens<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        text.split(self.delimiter.as_str())
    }

    /// True iff every token of `text` is a number.
    ///
    /// Empty input yields one empty token and is therefore rejected, as is
    /// a trailing delimiter.
    pub fn is_numbers_in_array(&self, text: &str) -> bool {
        self.tokens(text).all(is_number)
    }

    /// Like [`is_numbers_in_array`](Self::is_numbers_in_array), failing with
    /// [`ValidationError::NotAllNumbers`].
    pub fn validate_numbers_in_array(&self, text: &str) -> Result<(), ValidationError> {
        if self.is_numbers_in_array(text) {
            Ok(())
        } else {
            Err(ValidationError::NotAllNumbers)
        }
    }
}

/// Parse `text` if it is a number that fits in an `i64`.
///
/// Literals too large for `i64` are still numbers to [`is_number`], but have
/// no value here. They fall outside every `i64` range.
pub fn parse_number(text: &str) -> Option<i64> {
    if integer_literal().check(text) {
        text.parse().ok()
    } else {
        None
    }
}

/// True iff `text` is an integer literal.
pub fn is_number(text: &str) -> bool {
    integer_literal().check(text)
}

/// Fails with [`ValidationError::NotANumber`] unless `text` is a number.
pub fn validate_number(text: &str) -> Result<(), ValidationError> {
    if is_number(text) {
        Ok(())
    } else {
        Err(ValidationError::NotANumber)
    }
}

/// True iff every `,`-separated token of `text` is a number.
pub fn is_numbers_in_array(text: &str) -> bool {
    Validators::default().is_numbers_in_array(text)
}

/// Fails with [`ValidationError::NotAllNumbers`] unless every `,`-separated
/// token of `text` is a number.
pub fn validate_numbers_in_array(text: &str) -> Result<(), ValidationError> {
    Validators::default().validate_numbers_in_array(text)
}

/// True iff `text` is a number within `min..=max`.
pub fn is_number_in_range(text: &str, min: i64, max: i64) -> bool {
    validate_number_in_range(text, min, max).is_ok()
}

/// Parse `text` and check it lies within `min..=max`.
///
/// Non-numeric input and out-of-range values both fail with
/// [`ValidationError::OutOfRange`].
pub fn validate_number_in_range(text: &str, min: i64, max: i64) -> Result<i64, ValidationError> {
    parse_number(text)
        .filter(|n| between(min, max).check(n))
        .ok_or(ValidationError::OutOfRange { min, max })
}

/// True iff `text` is a number of at least `min`.
pub fn is_over_number(text: &str, min: i64) -> bool {
    validate_over_number(text, min).is_ok()
}

/// Parse `text` and check it is at least `min`.
///
/// Non-numeric input fails with [`ValidationError::BelowMinimum`] as well.
/// A positive literal beyond `i64::MAX` meets every minimum and is returned
/// as `i64::MAX`; a negative one beyond `i64::MIN` meets none.
pub fn validate_over_number(text: &str, min: i64) -> Result<i64, ValidationError> {
    let error = ValidationError::BelowMinimum { min };
    if !is_number(text) {
        return Err(error);
    }
    match text.parse::<i64>() {
        Ok(n) => validate(n, ge(min), error),
        // a matching literal only fails to parse on overflow
        Err(_) if !text.starts_with('-') => Ok(i64::MAX),
        Err(_) => Err(error),
    }
}

/// True iff some value appears more than once.
///
/// Note the polarity: `true` means the input is invalid. Prefer
/// [`is_duplicate_free`] when writing guards.
pub fn has_duplicate_in_array<T: Eq + Hash>(values: &[T]) -> bool {
    !is_duplicate_free(values)
}

/// True iff no value appears more than once.
pub fn is_duplicate_free<T: Eq + Hash>(values: &[T]) -> bool {
    all_distinct().check(values)
}

/// Fails with [`ValidationError::Duplicated`] if any value repeats.
pub fn validate_duplicate_free<T: Eq + Hash>(values: &[T]) -> Result<(), ValidationError> {
    if is_duplicate_free(values) {
        Ok(())
    } else {
        Err(ValidationError::Duplicated)
    }
}

/// Validators that report failures through an [`ErrorSignal`].
///
/// Each method returns what the matching `is_*` function returns. When the
/// check fails the signal is raised once with the failure's message; when it
/// passes the signal is left alone.
///
/// # Example
///
/// ```
/// use lotto_validate::testing::RecordingSignal;
/// use lotto_validate::Guard;
///
/// let guard = Guard::new(RecordingSignal::new());
/// assert!(!guard.is_number_in_range("11", 1, 10));
/// assert_eq!(guard.signal().messages(), vec!["must be a number between 1 and 10."]);
/// ```
pub struct Guard<S> {
    validators: Validators,
    signal: S,
}

impl<S> fmt::Debug for Guard<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard")
            .field("validators", &self.validators)
            .finish_non_exhaustive()
    }
}

impl<S: ErrorSignal> Guard<S> {
    /// Guard using the default `,` delimiter.
    pub fn new(signal: S) -> Self {
        Self::with_validators(Validators::default(), signal)
    }

    /// Guard using configured validators.
    pub fn with_validators(validators: Validators, signal: S) -> Self {
        Self { validators, signal }
    }

    /// The signal failures are raised on.
    pub fn signal(&self) -> &S {
        &self.signal
    }

    /// The underlying validators.
    pub fn validators(&self) -> &Validators {
        &self.validators
    }

    /// Consume the guard, returning its signal.
    pub fn into_signal(self) -> S {
        self.signal
    }

    fn escalate<T>(&self, result: Result<T, ValidationError>) -> bool {
        match result {
            Ok(_) => true,
            Err(error) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(kind = error.kind(), %error, "validation failed");
                self.signal.raise(&error.to_string());
                false
            }
        }
    }

    /// See [`Validators::is_numbers_in_array`].
    pub fn is_numbers_in_array(&self, text: &str) -> bool {
        self.escalate(self.validators.validate_numbers_in_array(text))
    }

    /// See [`is_number`].
    pub fn is_number(&self, text: &str) -> bool {
        self.escalate(validate_number(text))
    }

    /// See [`is_number_in_range`].
    pub fn is_number_in_range(&self, text: &str, min: i64, max: i64) -> bool {
        self.escalate(validate_number_in_range(text, min, max))
    }

    /// See [`is_over_number`].
    pub fn is_over_number(&self, text: &str, min: i64) -> bool {
        self.escalate(validate_over_number(text, min))
    }

    /// See [`has_duplicate_in_array`]. Returns `true` (and raises) when a
    /// value repeats.
    pub fn has_duplicate_in_array<T: Eq + Hash>(&self, values: &[T]) -> bool {
        !self.is_duplicate_free(values)
    }

    /// See [`is_duplicate_free`]. Raises when a value repeats.
    pub fn is_duplicate_free<T: Eq + Hash>(&self, values: &[T]) -> bool {
        self.escalate(validate_duplicate_free(values))
    }
}
