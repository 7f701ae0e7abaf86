//! Predicate combinators for composable validation logic
//!
//! The validators in [`crate::validators`] are built from the small predicates
//! here. They can also be combined directly with `and` / `not`.
//!
//! # Example
//!
//! ```rust
//! use lotto_validate::predicate::*;
//!
//! assert!(integer_literal().check("-45"));
//! assert!(between(1, 45).check(&45));
//! assert!(!all_distinct().check(&vec![1, 1]));
//! ```

mod collection;
mod combinators;
mod number;
mod string;

pub use combinators::{validate, And, Predicate, PredicateExt};
pub use collection::{all_distinct, AllDistinct};
pub use number::{between, ge, Between, Ge};
pub use string::{integer_literal, IntegerLiteral};
