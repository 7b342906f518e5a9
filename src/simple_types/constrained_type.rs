//! Check helpers shared by the constrained types
//!
//! Each helper runs one predicate against a raw value and, on failure, returns
//! a [`ValidationError`] whose message embeds the offending value and the rule
//! it violated. The constrained types compose these checks inside their
//! `validate` constructors; the helpers themselves know nothing about fields
//! or paths.

use regex::Regex;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use super::error::ValidationError;

/// Checks that `value` matches `pattern` in full.
///
/// Patterns are anchored by their definition sites, so a match means the
/// whole string conforms.
///
/// # Errors
///
/// Returns `'{value}' must match the pattern '{pattern}'` on mismatch.
pub fn check_pattern(pattern: &Regex, value: &str) -> Result<(), ValidationError> {
    if pattern.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::new(format!(
            "'{value}' must match the pattern '{pattern}'"
        )))
    }
}

/// Checks that the length of `value` lies in `min..=max` characters.
///
/// # Errors
///
/// Returns `The length of <{value}> should be between <{min}> and <{max}>`
/// when the length falls outside the range.
pub fn check_string_length(min: usize, max: usize, value: &str) -> Result<(), ValidationError> {
    let length = value.chars().count();
    if length >= min && length <= max {
        Ok(())
    } else {
        Err(ValidationError::new(format!(
            "The length of <{value}> should be between <{min}> and <{max}>"
        )))
    }
}

/// Checks that `value` is absent or has a length in `min..=max` characters.
///
/// # Errors
///
/// Returns `The <{value}> should be <null> or its length should be between
/// <{min}> and <{max}>` when a present value falls outside the range.
pub fn check_optional_string_length(
    min: usize,
    max: usize,
    value: Option<&str>,
) -> Result<(), ValidationError> {
    match value {
        None => Ok(()),
        Some(present) => {
            let length = present.chars().count();
            if length >= min && length <= max {
                Ok(())
            } else {
                Err(ValidationError::new(format!(
                    "The <{present}> should be <null> or its length should be between <{min}> and <{max}>"
                )))
            }
        }
    }
}

/// Checks that `value` lies in `min..=max`.
///
/// # Errors
///
/// Returns `The <{value}> should be between <{min}> and <{max}>` when out of
/// range.
pub fn check_integer_range(min: i32, max: i32, value: i32) -> Result<(), ValidationError> {
    if value >= min && value <= max {
        Ok(())
    } else {
        Err(ValidationError::new(format!(
            "The <{value}> should be between <{min}> and <{max}>"
        )))
    }
}

/// Checks that `value` lies in `min..=max`.
///
/// # Errors
///
/// Returns `The <{value}> should be between <{min}> and <{max}>` when out of
/// range.
pub fn check_decimal_range(
    min: Decimal,
    max: Decimal,
    value: Decimal,
) -> Result<(), ValidationError> {
    if value >= min && value <= max {
        Ok(())
    } else {
        Err(ValidationError::new(format!(
            "The <{value}> should be between <{min}> and <{max}>"
        )))
    }
}

/// Checks that `value` carries at most `max_scale` decimal places.
///
/// Trailing zeros do not count; `10.550` has an effective scale of 2.
///
/// # Errors
///
/// Returns `The scale of <{value}> should be at most <{max_scale}>` when the
/// value has more significant decimal places.
pub fn check_decimal_scale(max_scale: u32, value: Decimal) -> Result<(), ValidationError> {
    if value.normalize().scale() <= max_scale {
        Ok(())
    } else {
        Err(ValidationError::new(format!(
            "The scale of <{value}> should be at most <{max_scale}>"
        )))
    }
}

/// Checks that `value` is integer-valued and returns it as an `i32`.
///
/// Values with a fractional part, and integer values too large for `i32`,
/// are rejected.
///
/// # Errors
///
/// Returns `The <{value}> should be an integer` otherwise.
pub fn check_integer_valued(value: Decimal) -> Result<i32, ValidationError> {
    let as_integer = if value.is_integer() {
        value.to_i32()
    } else {
        None
    };
    as_integer.ok_or_else(|| ValidationError::new(format!("The <{value}> should be an integer")))
}
