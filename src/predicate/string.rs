//! String predicates

use super::combinators::Predicate;

/// Predicate that checks if a string is an integer literal.
///
/// A literal is one optional leading `-` followed by one or more ASCII
/// digits and nothing else: no whitespace, no `+`, no decimal point, no
/// thousands separators.
#[derive(Clone, Copy, Default, Debug)]
pub struct IntegerLiteral;

impl IntegerLiteral {
    #[inline]
    fn matches(value: &str) -> bool {
        let digits = value.strip_prefix('-').unwrap_or(value);
        !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
    }
}

impl Predicate<str> for IntegerLiteral {
    #[inline]
    fn check(&self, value: &str) -> bool {
        Self::matches(value)
    }
}

impl Predicate<String> for IntegerLiteral {
    #[inline]
    fn check(&self, value: &String) -> bool {
        Self::matches(value)
    }
}

/// Create a predicate that checks if a string is an integer literal.
///
/// # Example
///
/// ```rust
/// use lotto_validate::predicate::*;
///
/// assert!(integer_literal().check("-45"));
/// assert!(!integer_literal().check("12a"));
/// assert!(!integer_literal().check("+5"));
/// ```
pub fn integer_literal() -> IntegerLiteral {
    IntegerLiteral
}
