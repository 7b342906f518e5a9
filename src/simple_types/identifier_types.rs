//! Order identifier types
//!
//! Defines `OrderId` and `OrderLineId`. Both share the same constraint: 1 to
//! 10 uppercase alphanumeric characters.

use regex::Regex;
use std::sync::LazyLock;

use super::constrained_type;
use super::error::{ValidationError, join_messages};

/// Regex pattern shared by `OrderId` and `OrderLineId`
static ORDER_IDENTIFIER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z0-9]{1,10}$").expect("Invalid order identifier pattern"));

// =============================================================================
// OrderId
// =============================================================================

/// The identifier of an order.
///
/// # Examples
///
/// ```
/// use order_taking::simple_types::OrderId;
///
/// let id = OrderId::validate("ORD1".to_string()).unwrap();
/// assert_eq!(id.value(), "ORD1");
///
/// assert!(OrderId::validate(String::new()).is_err());
/// assert!(OrderId::validate("ord1".to_string()).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OrderId(String);

impl OrderId {
    /// Validates an order identifier.
    ///
    /// # Errors
    ///
    /// Returns a pattern error when the value is not 1 to 10 uppercase
    /// alphanumeric characters.
    pub fn validate(value: String) -> Result<Self, Vec<ValidationError>> {
        constrained_type::check_pattern(&ORDER_IDENTIFIER_PATTERN, &value)
            .map(|()| Self(value))
            .map_err(|error| vec![error])
    }

    /// Creates an `OrderId` from a value already known to be valid.
    ///
    /// # Panics
    ///
    /// Panics when the value violates the identifier pattern.
    #[must_use]
    pub fn create(value: String) -> Self {
        Self::validate(value).unwrap_or_else(|errors| {
            panic!(
                "Not expecting OrderId to be invalid: {}",
                join_messages(&errors)
            )
        })
    }

    /// Returns the inner string
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// OrderLineId
// =============================================================================

/// The identifier of a single order line.
///
/// # Examples
///
/// ```
/// use order_taking::simple_types::OrderLineId;
///
/// let id = OrderLineId::validate("LN1".to_string()).unwrap();
/// assert_eq!(id.value(), "LN1");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OrderLineId(String);

impl OrderLineId {
    /// Validates an order line identifier.
    ///
    /// # Errors
    ///
    /// Returns a pattern error when the value is not 1 to 10 uppercase
    /// alphanumeric characters.
    pub fn validate(value: String) -> Result<Self, Vec<ValidationError>> {
        constrained_type::check_pattern(&ORDER_IDENTIFIER_PATTERN, &value)
            .map(|()| Self(value))
            .map_err(|error| vec![error])
    }

    /// Creates an `OrderLineId` from a value already known to be valid.
    ///
    /// # Panics
    ///
    /// Panics when the value violates the identifier pattern.
    #[must_use]
    pub fn create(value: String) -> Self {
        Self::validate(value).unwrap_or_else(|errors| {
            panic!(
                "Not expecting OrderLineId to be invalid: {}",
                join_messages(&errors)
            )
        })
    }

    /// Returns the inner string
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}
