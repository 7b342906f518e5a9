//! Order quantity types
//!
//! Defines `UnitQuantity`, `KilogramQuantity`, and the `OrderQuantity` union.
//! Which variant is legal depends on the product code the quantity belongs
//! to: widgets are ordered in whole units, gizmos by weight.

use rust_decimal::Decimal;
use std::str::FromStr;

use super::constrained_type;
use super::error::{ValidationError, join_messages};
use super::product_types::ProductCode;
use super::validation;

// =============================================================================
// UnitQuantity
// =============================================================================

/// A whole-unit quantity between 1 and 1000.
///
/// # Examples
///
/// ```
/// use order_taking::simple_types::UnitQuantity;
///
/// let quantity = UnitQuantity::validate(124).unwrap();
/// assert_eq!(quantity.value(), 124);
///
/// assert!(UnitQuantity::validate(0).is_err());
/// assert!(UnitQuantity::validate(1001).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct UnitQuantity(i32);

/// Bounds for `UnitQuantity`
const UNIT_QUANTITY_MIN: i32 = 1;
const UNIT_QUANTITY_MAX: i32 = 1000;

impl UnitQuantity {
    /// Validates a unit quantity.
    ///
    /// # Errors
    ///
    /// Returns a range error when the value lies outside 1 to 1000.
    pub fn validate(value: i32) -> Result<Self, Vec<ValidationError>> {
        constrained_type::check_integer_range(UNIT_QUANTITY_MIN, UNIT_QUANTITY_MAX, value)
            .map(|()| Self(value))
            .map_err(|error| vec![error])
    }

    /// Creates a `UnitQuantity` from a value already known to be valid.
    ///
    /// # Panics
    ///
    /// Panics when the value lies outside the range.
    #[must_use]
    pub fn create(value: i32) -> Self {
        Self::validate(value).unwrap_or_else(|errors| {
            panic!(
                "Not expecting UnitQuantity to be invalid: {}",
                join_messages(&errors)
            )
        })
    }

    /// Returns the inner integer
    #[must_use]
    pub const fn value(&self) -> i32 {
        self.0
    }
}

// =============================================================================
// KilogramQuantity
// =============================================================================

/// A weight quantity between 0.05 and 100.00 kilograms, at most two decimal
/// places.
///
/// The range check and the scale check are independent; both failures are
/// reported when both apply.
///
/// # Examples
///
/// ```
/// use order_taking::simple_types::KilogramQuantity;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let quantity = KilogramQuantity::validate(Decimal::from_str("10.55").unwrap()).unwrap();
/// assert_eq!(quantity.value(), Decimal::from_str("10.55").unwrap());
///
/// assert!(KilogramQuantity::validate(Decimal::from_str("0.04").unwrap()).is_err());
/// assert!(KilogramQuantity::validate(Decimal::from_str("10.555").unwrap()).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KilogramQuantity(Decimal);

/// Maximum number of decimal places a weight may carry
const KILOGRAM_QUANTITY_MAX_SCALE: u32 = 2;

impl KilogramQuantity {
    /// The smallest orderable weight
    fn min_value() -> Decimal {
        Decimal::from_str("0.05").expect("Valid decimal literal")
    }

    /// The largest orderable weight
    fn max_value() -> Decimal {
        Decimal::from_str("100.00").expect("Valid decimal literal")
    }

    /// Validates a kilogram quantity.
    ///
    /// # Errors
    ///
    /// Returns a range error, a scale error, or both, accumulated.
    pub fn validate(value: Decimal) -> Result<Self, Vec<ValidationError>> {
        validation::zip2(
            constrained_type::check_decimal_range(Self::min_value(), Self::max_value(), value)
                .map_err(|error| vec![error]),
            constrained_type::check_decimal_scale(KILOGRAM_QUANTITY_MAX_SCALE, value)
                .map_err(|error| vec![error]),
        )
        .map(|((), ())| Self(value))
    }

    /// Creates a `KilogramQuantity` from a value already known to be valid.
    ///
    /// # Panics
    ///
    /// Panics when the value violates the range or scale constraints.
    #[must_use]
    pub fn create(value: Decimal) -> Self {
        Self::validate(value).unwrap_or_else(|errors| {
            panic!(
                "Not expecting KilogramQuantity to be invalid: {}",
                join_messages(&errors)
            )
        })
    }

    /// Returns the inner decimal
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.0
    }
}

// =============================================================================
// OrderQuantity
// =============================================================================

/// A quantity on an order line: whole units for widgets, kilograms for
/// gizmos.
///
/// Validation dispatches on the product code the quantity belongs to, not on
/// the raw value's shape. A widget quantity must be integer-valued; a
/// fractional widget quantity is a validation failure, never a silent
/// truncation.
///
/// # Examples
///
/// ```
/// use order_taking::simple_types::{OrderQuantity, ProductCode};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let widget = ProductCode::create("W1234".to_string());
/// let units = OrderQuantity::validate(&widget, Decimal::from(124)).unwrap();
/// assert_eq!(units.value(), Decimal::from(124));
///
/// let gizmo = ProductCode::create("G123".to_string());
/// let weight = Decimal::from_str("10.55").unwrap();
/// assert_eq!(OrderQuantity::validate(&gizmo, weight).unwrap().value(), weight);
///
/// // A fractional quantity is invalid for a widget
/// assert!(OrderQuantity::validate(&widget, weight).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OrderQuantity {
    /// Whole units, for widgets
    Unit(UnitQuantity),
    /// Kilograms, for gizmos
    Kilogram(KilogramQuantity),
}

impl OrderQuantity {
    /// Validates a raw quantity against the product code it belongs to.
    ///
    /// # Errors
    ///
    /// For widgets, returns an integer-valued error or a unit range error;
    /// for gizmos, the kilogram range and scale errors.
    pub fn validate(
        product_code: &ProductCode,
        quantity: Decimal,
    ) -> Result<Self, Vec<ValidationError>> {
        match product_code {
            ProductCode::Widget(_) => constrained_type::check_integer_valued(quantity)
                .map_err(|error| vec![error])
                .and_then(UnitQuantity::validate)
                .map(Self::Unit),
            ProductCode::Gizmo(_) => KilogramQuantity::validate(quantity).map(Self::Kilogram),
        }
    }

    /// Returns the quantity as a decimal, whichever the variant
    #[must_use]
    pub fn value(&self) -> Decimal {
        match self {
            Self::Unit(unit) => Decimal::from(unit.value()),
            Self::Kilogram(kilogram) => kilogram.value(),
        }
    }

    /// Returns whether this is the `Unit` variant
    #[must_use]
    pub const fn is_unit(&self) -> bool {
        matches!(self, Self::Unit(_))
    }

    /// Returns whether this is the `Kilogram` variant
    #[must_use]
    pub const fn is_kilogram(&self) -> bool {
        matches!(self, Self::Kilogram(_))
    }
}
