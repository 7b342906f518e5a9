//! Accumulating validation combinators
//!
//! Combines independently validated fields into one result: success only when
//! every field succeeds, failure carrying the union of all failures in field
//! order. This is the error-accumulating composition used by every multi-field
//! validation in the crate; nothing here short-circuits.
//!
//! The path helpers [`assign_all`] and [`prepend_all`] tag accumulated errors
//! with the property they belong to as results bubble up through nested
//! structures.

use super::error::{Property, PropertyValidationError, ValidationError};

fn push_errors<T, E>(result: Result<T, Vec<E>>, errors: &mut Vec<E>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(mut failures) => {
            errors.append(&mut failures);
            None
        }
    }
}

/// Combines two validated fields, accumulating failures from both.
///
/// # Errors
///
/// Returns the concatenated failures of every failing field, in field order.
///
/// # Examples
///
/// ```
/// use order_taking::simple_types::{ValidationError, zip2};
///
/// let ok: Result<i32, Vec<ValidationError>> = Ok(1);
/// let bad: Result<i32, Vec<ValidationError>> =
///     Err(vec![ValidationError::new("broken")]);
///
/// assert_eq!(zip2(ok.clone(), Ok("a")), Ok((1, "a")));
/// assert_eq!(
///     zip2(bad, ok),
///     Err(vec![ValidationError::new("broken")])
/// );
/// ```
pub fn zip2<A, B, E>(
    first: Result<A, Vec<E>>,
    second: Result<B, Vec<E>>,
) -> Result<(A, B), Vec<E>> {
    let mut errors = Vec::new();
    let first = push_errors(first, &mut errors);
    let second = push_errors(second, &mut errors);
    match (first, second) {
        (Some(first), Some(second)) => Ok((first, second)),
        _ => Err(errors),
    }
}

/// Combines three validated fields, accumulating failures from all of them.
///
/// # Errors
///
/// Returns the concatenated failures of every failing field, in field order.
pub fn zip3<A, B, C, E>(
    first: Result<A, Vec<E>>,
    second: Result<B, Vec<E>>,
    third: Result<C, Vec<E>>,
) -> Result<(A, B, C), Vec<E>> {
    let mut errors = Vec::new();
    let first = push_errors(first, &mut errors);
    let second = push_errors(second, &mut errors);
    let third = push_errors(third, &mut errors);
    match (first, second, third) {
        (Some(first), Some(second), Some(third)) => Ok((first, second, third)),
        _ => Err(errors),
    }
}

/// Combines four validated fields, accumulating failures from all of them.
///
/// # Errors
///
/// Returns the concatenated failures of every failing field, in field order.
pub fn zip4<A, B, C, D, E>(
    first: Result<A, Vec<E>>,
    second: Result<B, Vec<E>>,
    third: Result<C, Vec<E>>,
    fourth: Result<D, Vec<E>>,
) -> Result<(A, B, C, D), Vec<E>> {
    let mut errors = Vec::new();
    let first = push_errors(first, &mut errors);
    let second = push_errors(second, &mut errors);
    let third = push_errors(third, &mut errors);
    let fourth = push_errors(fourth, &mut errors);
    match (first, second, third, fourth) {
        (Some(first), Some(second), Some(third), Some(fourth)) => {
            Ok((first, second, third, fourth))
        }
        _ => Err(errors),
    }
}

/// Combines five validated fields, accumulating failures from all of them.
///
/// # Errors
///
/// Returns the concatenated failures of every failing field, in field order.
pub fn zip5<A, B, C, D, F, E>(
    first: Result<A, Vec<E>>,
    second: Result<B, Vec<E>>,
    third: Result<C, Vec<E>>,
    fourth: Result<D, Vec<E>>,
    fifth: Result<F, Vec<E>>,
) -> Result<(A, B, C, D, F), Vec<E>> {
    let mut errors = Vec::new();
    let first = push_errors(first, &mut errors);
    let second = push_errors(second, &mut errors);
    let third = push_errors(third, &mut errors);
    let fourth = push_errors(fourth, &mut errors);
    let fifth = push_errors(fifth, &mut errors);
    match (first, second, third, fourth, fifth) {
        (Some(first), Some(second), Some(third), Some(fourth), Some(fifth)) => {
            Ok((first, second, third, fourth, fifth))
        }
        _ => Err(errors),
    }
}

/// Combines six validated fields, accumulating failures from all of them.
///
/// # Errors
///
/// Returns the concatenated failures of every failing field, in field order.
pub fn zip6<A, B, C, D, F, G, E>(
    first: Result<A, Vec<E>>,
    second: Result<B, Vec<E>>,
    third: Result<C, Vec<E>>,
    fourth: Result<D, Vec<E>>,
    fifth: Result<F, Vec<E>>,
    sixth: Result<G, Vec<E>>,
) -> Result<(A, B, C, D, F, G), Vec<E>> {
    let mut errors = Vec::new();
    let first = push_errors(first, &mut errors);
    let second = push_errors(second, &mut errors);
    let third = push_errors(third, &mut errors);
    let fourth = push_errors(fourth, &mut errors);
    let fifth = push_errors(fifth, &mut errors);
    let sixth = push_errors(sixth, &mut errors);
    match (first, second, third, fourth, fifth, sixth) {
        (Some(first), Some(second), Some(third), Some(fourth), Some(fifth), Some(sixth)) => {
            Ok((first, second, third, fourth, fifth, sixth))
        }
        _ => Err(errors),
    }
}

/// Combines a sequence of validated items into a validated list, accumulating
/// failures across the whole sequence.
///
/// # Errors
///
/// Returns the concatenated failures of every failing item, in item order.
///
/// # Examples
///
/// ```
/// use order_taking::simple_types::{ValidationError, collect_all};
///
/// let results: Vec<Result<i32, Vec<ValidationError>>> = vec![
///     Ok(1),
///     Err(vec![ValidationError::new("second broken")]),
///     Err(vec![ValidationError::new("third broken")]),
/// ];
///
/// let errors = collect_all(results).unwrap_err();
/// assert_eq!(errors.len(), 2);
/// ```
pub fn collect_all<T, E>(
    results: impl IntoIterator<Item = Result<T, Vec<E>>>,
) -> Result<Vec<T>, Vec<E>> {
    let mut values = Vec::new();
    let mut errors = Vec::new();
    for result in results {
        match result {
            Ok(value) => values.push(value),
            Err(mut failures) => errors.append(&mut failures),
        }
    }
    if errors.is_empty() {
        Ok(values)
    } else {
        Err(errors)
    }
}

/// Drops duplicate errors, keeping the first occurrence of each.
///
/// Two errors are duplicates when they compare equal, which for
/// [`PropertyValidationError`] means equal path and equal message.
#[must_use]
pub fn distinct<E: PartialEq>(errors: Vec<E>) -> Vec<E> {
    let mut unique: Vec<E> = Vec::with_capacity(errors.len());
    for error in errors {
        if !unique.contains(&error) {
            unique.push(error);
        }
    }
    unique
}

/// Tags every plain error with the property it belongs to.
#[must_use]
pub fn assign_all(
    property: &Property,
    errors: Vec<ValidationError>,
) -> Vec<PropertyValidationError> {
    errors
        .into_iter()
        .map(|error| error.assign(property.clone()))
        .collect()
}

/// Extends the path of every error by prepending the enclosing property.
#[must_use]
pub fn prepend_all(
    property: &Property,
    errors: Vec<PropertyValidationError>,
) -> Vec<PropertyValidationError> {
    errors
        .into_iter()
        .map(|error| error.prepend(property.clone()))
        .collect()
}
