//! # lotto-validate
//!
//! Validators for the text a player types into a lottery entry form:
//! integer literals, inclusive ranges, minimum amounts, lists of numbers and
//! duplicate detection.
//!
//! ## Three ways to check
//!
//! - Pure predicates (`is_*`) that only answer yes or no.
//! - `validate_*` functions returning `Result<_, ValidationError>`.
//! - A [`Guard`] that raises the failure message on an injected
//!   [`ErrorSignal`], so the caller decides how failures surface.
//!
//! ## Quick Example
//!
//! ```rust
//! use lotto_validate::prelude::*;
//! use lotto_validate::testing::RecordingSignal;
//!
//! assert!(is_numbers_in_array("1,2,3"));
//! assert!(!is_number("12a"));
//!
//! let guard = Guard::new(RecordingSignal::new());
//! assert!(!guard.is_numbers_in_array("1,a,3"));
//! assert_eq!(guard.signal().messages(), vec!["all values must be numbers."]);
//!
//! assert_eq!(
//!     validate_number_in_range("11", 1, 10),
//!     Err(ValidationError::OutOfRange { min: 1, max: 10 })
//! );
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod lotto;
pub mod predicate;
pub mod semigroup;
pub mod signal;
pub mod testing;
pub mod validation;
pub mod validators;

// Re-exports
pub use error::{ConfigError, ValidationError};
pub use semigroup::Semigroup;
pub use signal::{ErrorSignal, Silent};
#[cfg(feature = "tracing")]
pub use signal::TracingSignal;
pub use validation::Validation;
pub use validators::{Guard, ValidatorConfig, Validators};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::ValidationError;
    pub use crate::signal::ErrorSignal;
    pub use crate::validation::Validation;
    pub use crate::validators::{
        has_duplicate_in_array, is_duplicate_free, is_number, is_number_in_range,
        is_numbers_in_array, is_over_number, validate_duplicate_free, validate_number,
        validate_number_in_range, validate_numbers_in_array, validate_over_number, Guard,
        ValidatorConfig, Validators,
    };
}
