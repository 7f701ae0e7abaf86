//! Validation failure kinds
//!
//! Every failed check maps to exactly one [`ValidationError`] variant, and every
//! variant renders to a fixed, user-facing message through `Display`. Those
//! messages are what an [`ErrorSignal`](crate::ErrorSignal) receives.

use std::error::Error as StdError;
use std::fmt;

/// Why a piece of user input was rejected.
///
/// # Examples
///
/// ```
/// use lotto_validate::ValidationError;
///
/// let err = ValidationError::OutOfRange { min: 1, max: 10 };
/// assert_eq!(err.to_string(), "must be a number between 1 and 10.");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum ValidationError {
    /// A single value is not an integer literal.
    NotANumber,
    /// At least one delimiter-separated token is not an integer literal.
    NotAllNumbers,
    /// The value is not a number inside the inclusive range.
    OutOfRange {
        /// Inclusive lower bound.
        min: i64,
        /// Inclusive upper bound.
        max: i64,
    },
    /// The value is not a number at or above the minimum.
    BelowMinimum {
        /// Inclusive lower bound.
        min: i64,
    },
    /// A collection repeats at least one element.
    Duplicated,
    /// A ticket holds the wrong number of entries.
    WrongCount {
        /// Number of entries required.
        expected: usize,
        /// Number of entries supplied.
        actual: usize,
    },
}

impl ValidationError {
    /// Short machine-readable name of the failure kind.
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::NotANumber => "not_a_number",
            ValidationError::NotAllNumbers => "not_all_numbers",
            ValidationError::OutOfRange { .. } => "out_of_range",
            ValidationError::BelowMinimum { .. } => "below_minimum",
            ValidationError::Duplicated => "duplicated",
            ValidationError::WrongCount { .. } => "wrong_count",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NotANumber => f.write_str("only numbers may be entered."),
            ValidationError::NotAllNumbers => f.write_str("all values must be numbers."),
            ValidationError::OutOfRange { min, max } => {
                write!(f, "must be a number between {} and {}.", min, max)
            }
            ValidationError::BelowMinimum { min } => {
                write!(f, "must be a number of {} or more.", min)
            }
            ValidationError::Duplicated => f.write_str("elements must not be duplicated."),
            ValidationError::WrongCount { expected, .. } => {
                write!(f, "must enter exactly {} numbers.", expected)
            }
        }
    }
}

impl StdError for ValidationError {}

/// Rejected [`ValidatorConfig`](crate::ValidatorConfig).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The token delimiter is the empty string.
    EmptyDelimiter,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyDelimiter => f.write_str("delimiter must not be empty"),
        }
    }
}

impl StdError for ConfigError {}
