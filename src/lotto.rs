//! Lottery entry rules
//!
//! Parses what a player types into the three inputs of a draw: the purchase
//! amount, the winning numbers and the bonus number. Winning numbers report
//! every problem at once through [`Validation`]; the single-value inputs stop
//! at the first failure.
//!
//! # Example
//!
//! ```
//! use lotto_validate::{lotto, Validation, ValidationError, Validators};
//!
//! let validators = Validators::default();
//! assert_eq!(
//!     lotto::parse_winning_numbers("1,2,3,4,5,6", &validators),
//!     Validation::Success(vec![1, 2, 3, 4, 5, 6])
//! );
//! assert_eq!(
//!     lotto::parse_bonus_number("6", &[1, 2, 3, 4, 5, 6]),
//!     Err(ValidationError::Duplicated)
//! );
//! ```

use crate::error::ValidationError;
use crate::predicate::{all_distinct, validate};
use crate::validators::{validate_number_in_range, validate_over_number, Validators};
use crate::Validation;

/// Separator between winning numbers.
pub const WINNING_NUMBER_DELIMITER: &str = crate::validators::DEFAULT_DELIMITER;

/// Smallest ball number.
pub const LOTTO_MIN: i64 = 1;

/// Largest ball number.
pub const LOTTO_MAX: i64 = 45;

/// Balls drawn per ticket, bonus excluded.
pub const LOTTO_SIZE: usize = 6;

/// Price of one ticket.
pub const TICKET_PRICE: i64 = 1000;

/// Parse the winning numbers of a draw.
///
/// Fails with `[NotAllNumbers]` alone if any token is not a number. Otherwise
/// every applicable failure is reported, in this order: `WrongCount`, one
/// `OutOfRange` per out-of-range token, `Duplicated`.
pub fn parse_winning_numbers(
    text: &str,
    validators: &Validators,
) -> Validation<Vec<i64>, Vec<ValidationError>> {
    Validation::from_result(validators.validate_numbers_in_array(text))
        .map_err(|e| vec![e])
        .and_then(|()| check_tokens(validators.tokens(text).collect()))
}

fn check_tokens(tokens: Vec<&str>) -> Validation<Vec<i64>, Vec<ValidationError>> {
    let count = if tokens.len() == LOTTO_SIZE {
        Validation::success(())
    } else {
        Validation::failure(vec![ValidationError::WrongCount {
            expected: LOTTO_SIZE,
            actual: tokens.len(),
        }])
    };

    let numbers = Validation::all_vec(
        tokens
            .iter()
            .map(|t| {
                Validation::from_result(validate_number_in_range(t, LOTTO_MIN, LOTTO_MAX))
                    .map_err(|e| vec![e])
            })
            .collect(),
    );

    let distinct = if tokens.iter().all(|t| t.parse::<i64>().is_ok()) {
        // compare by value so "07" and "7" collide
        let values: Vec<i64> = tokens.iter().filter_map(|t| t.parse().ok()).collect();
        Validation::success(values).ensure(all_distinct(), vec![ValidationError::Duplicated])
    } else {
        Validation::success(Vec::new())
    };

    count
        .and(numbers)
        .and(distinct)
        .map(|((_, numbers), _)| numbers)
}

/// Parse the bonus number, which must be a ball number not already drawn.
pub fn parse_bonus_number(text: &str, winning: &[i64]) -> Result<i64, ValidationError> {
    let bonus = validate_number_in_range(text, LOTTO_MIN, LOTTO_MAX)?;
    validate(
        bonus,
        |n: &i64| !winning.contains(n),
        ValidationError::Duplicated,
    )
}

/// Parse a purchase amount of at least one ticket.
pub fn parse_purchase_amount(text: &str) -> Result<i64, ValidationError> {
    validate_over_number(text, TICKET_PRICE)
}

/// Number of tickets an amount buys.
pub fn ticket_count(amount: i64) -> i64 {
    amount / TICKET_PRICE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_success, assert_validation_errors};

    fn validators() -> Validators {
        Validators::default()
    }

    #[test]
    fn test_parse_winning_numbers_success() {
        assert_eq!(
            parse_winning_numbers("1,2,3,4,5,45", &validators()),
            Validation::Success(vec![1, 2, 3, 4, 5, 45])
        );
    }

    #[test]
    fn test_parse_winning_numbers_not_numbers() {
        assert_validation_errors!(
            parse_winning_numbers("1,a,3,4,5,6", &validators()),
            vec![ValidationError::NotAllNumbers]
        );
    }

    #[test]
    fn test_parse_winning_numbers_accumulates() {
        assert_validation_errors!(
            parse_winning_numbers("0,2,2,99,5", &validators()),
            vec![
                ValidationError::WrongCount {
                    expected: 6,
                    actual: 5
                },
                ValidationError::OutOfRange { min: 1, max: 45 },
                ValidationError::OutOfRange { min: 1, max: 45 },
                ValidationError::Duplicated,
            ]
        );
    }

    #[test]
    fn test_parse_winning_numbers_duplicates_by_value() {
        assert_validation_errors!(
            parse_winning_numbers("7,07,1,2,3,4", &validators()),
            vec![ValidationError::Duplicated]
        );
    }

    #[test]
    fn test_parse_winning_numbers_custom_delimiter() {
        let v = Validators::new(crate::ValidatorConfig::default().with_delimiter("-")).unwrap();
        assert_success!(parse_winning_numbers("1-2-3-4-5-6", &v));
    }

    #[test]
    fn test_parse_bonus_number() {
        let winning = [1, 2, 3, 4, 5, 6];
        assert_eq!(parse_bonus_number("7", &winning), Ok(7));
        assert_eq!(
            parse_bonus_number("6", &winning),
            Err(ValidationError::Duplicated)
        );
        assert_eq!(
            parse_bonus_number("46", &winning),
            Err(ValidationError::OutOfRange { min: 1, max: 45 })
        );
    }

    #[test]
    fn test_parse_purchase_amount() {
        assert_eq!(parse_purchase_amount("8000"), Ok(8000));
        assert_eq!(
            parse_purchase_amount("999"),
            Err(ValidationError::BelowMinimum { min: 1000 })
        );
        assert_eq!(
            parse_purchase_amount("abc"),
            Err(ValidationError::BelowMinimum { min: 1000 })
        );
    }

    #[test]
    fn test_parse_purchase_amount_beyond_i64() {
        assert_eq!(parse_purchase_amount("100000000000000000000"), Ok(i64::MAX));
    }

    #[test]
    fn test_ticket_count() {
        assert_eq!(ticket_count(8000), 8);
        assert_eq!(ticket_count(8500), 8);
    }
}
