//! Money types
//!
//! Defines `Price` and `BillingAmount`. Both round derived values to two
//! decimal places with half-up rounding before re-validating, which is the
//! billing policy for this system.

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

use super::constrained_type;
use super::error::{ValidationError, join_messages};

/// Decimal places used for monetary amounts
const MONEY_SCALE: u32 = 2;

fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

// =============================================================================
// Price
// =============================================================================

/// A unit or line price between 0.00 and 1000.00.
///
/// # Examples
///
/// ```
/// use order_taking::simple_types::Price;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let price = Price::validate(Decimal::from_str("99.99").unwrap()).unwrap();
/// assert_eq!(price.value(), Decimal::from_str("99.99").unwrap());
///
/// assert!(Price::validate(Decimal::from_str("-0.01").unwrap()).is_err());
/// assert!(Price::validate(Decimal::from_str("1000.01").unwrap()).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Price(Decimal);

impl Price {
    /// The smallest allowed price
    fn min_value() -> Decimal {
        Decimal::from_str("0.00").expect("Valid decimal literal")
    }

    /// The largest allowed price
    fn max_value() -> Decimal {
        Decimal::from_str("1000.00").expect("Valid decimal literal")
    }

    /// Validates a price.
    ///
    /// # Errors
    ///
    /// Returns a range error when the value lies outside 0.00 to 1000.00.
    pub fn validate(value: Decimal) -> Result<Self, Vec<ValidationError>> {
        constrained_type::check_decimal_range(Self::min_value(), Self::max_value(), value)
            .map(|()| Self(value))
            .map_err(|error| vec![error])
    }

    /// Creates a `Price` from a value already known to be valid.
    ///
    /// # Panics
    ///
    /// Panics when the value lies outside the range.
    #[must_use]
    pub fn create(value: Decimal) -> Self {
        Self::validate(value).unwrap_or_else(|errors| {
            panic!(
                "Not expecting Price to be invalid: {}",
                join_messages(&errors)
            )
        })
    }

    /// Multiplies this price by a quantity, rounding the result to two
    /// decimal places half-up and re-validating it against the price range.
    ///
    /// # Errors
    ///
    /// Returns a range error when the rounded product exceeds 1000.00.
    ///
    /// # Examples
    ///
    /// ```
    /// use order_taking::simple_types::Price;
    /// use rust_decimal::Decimal;
    /// use std::str::FromStr;
    ///
    /// let unit_price = Price::create(Decimal::from_str("1.12").unwrap());
    /// let line_price = unit_price
    ///     .multiply(Decimal::from_str("10.55").unwrap())
    ///     .unwrap();
    /// // 1.12 * 10.55 = 11.816, rounded half-up to 11.82
    /// assert_eq!(line_price.value(), Decimal::from_str("11.82").unwrap());
    /// ```
    pub fn multiply(&self, quantity: Decimal) -> Result<Self, Vec<ValidationError>> {
        Self::validate(round_money(self.0 * quantity))
    }

    /// Returns the inner decimal
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.0
    }
}

// =============================================================================
// BillingAmount
// =============================================================================

/// A billing total between 0.00 and 10000.00.
///
/// # Examples
///
/// ```
/// use order_taking::simple_types::BillingAmount;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let amount = BillingAmount::validate(Decimal::from_str("471.86").unwrap()).unwrap();
/// assert_eq!(amount.value(), Decimal::from_str("471.86").unwrap());
///
/// assert!(BillingAmount::validate(Decimal::from_str("10000.01").unwrap()).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BillingAmount(Decimal);

impl BillingAmount {
    /// The smallest allowed billing total
    fn min_value() -> Decimal {
        Decimal::from_str("0.00").expect("Valid decimal literal")
    }

    /// The largest allowed billing total
    fn max_value() -> Decimal {
        Decimal::from_str("10000.00").expect("Valid decimal literal")
    }

    /// Validates a billing amount.
    ///
    /// # Errors
    ///
    /// Returns a range error when the value lies outside 0.00 to 10000.00.
    pub fn validate(value: Decimal) -> Result<Self, Vec<ValidationError>> {
        constrained_type::check_decimal_range(Self::min_value(), Self::max_value(), value)
            .map(|()| Self(value))
            .map_err(|error| vec![error])
    }

    /// Creates a `BillingAmount` from a value already known to be valid.
    ///
    /// # Panics
    ///
    /// Panics when the value lies outside the range.
    #[must_use]
    pub fn create(value: Decimal) -> Self {
        Self::validate(value).unwrap_or_else(|errors| {
            panic!(
                "Not expecting BillingAmount to be invalid: {}",
                join_messages(&errors)
            )
        })
    }

    /// Sums line prices into a billing total, rounding the sum to two decimal
    /// places half-up and validating it against the billing range.
    ///
    /// # Errors
    ///
    /// Returns a range error when the rounded sum exceeds 10000.00.
    pub fn sum_prices(prices: &[Price]) -> Result<Self, Vec<ValidationError>> {
        let total: Decimal = prices.iter().map(Price::value).sum();
        Self::validate(round_money(total))
    }

    /// Returns the inner decimal
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn decimal(value: &str) -> Decimal {
        Decimal::from_str(value).expect("Valid decimal literal")
    }

    mod price_tests {
        use super::*;

        #[rstest]
        #[case("0.00")]
        #[case("1.12")]
        #[case("1000.00")]
        fn test_validate_accepts(#[case] value: &str) {
            assert_eq!(Price::validate(decimal(value)).unwrap().value(), decimal(value));
        }

        #[rstest]
        #[case("-0.01")]
        #[case("1000.01")]
        fn test_validate_rejects(#[case] value: &str) {
            let errors = Price::validate(decimal(value)).unwrap_err();

            assert_eq!(
                errors[0].message,
                format!("The <{value}> should be between <0.00> and <1000.00>")
            );
        }

        #[rstest]
        fn test_multiply_rounds_half_up() {
            let unit_price = Price::create(decimal("1.12"));
            // 1.12 * 10.55 = 11.816 -> 11.82
            let line_price = unit_price.multiply(decimal("10.55")).unwrap();

            assert_eq!(line_price.value(), decimal("11.82"));
        }

        #[rstest]
        fn test_multiply_whole_units() {
            let unit_price = Price::create(decimal("3.71"));
            let line_price = unit_price.multiply(Decimal::from(124)).unwrap();

            assert_eq!(line_price.value(), decimal("460.04"));
        }

        #[rstest]
        fn test_multiply_rejects_overflowing_result() {
            let unit_price = Price::create(decimal("999.99"));
            let errors = unit_price.multiply(Decimal::from(2)).unwrap_err();

            assert_eq!(
                errors[0].message,
                "The <1999.98> should be between <0.00> and <1000.00>"
            );
        }

        #[rstest]
        fn test_create_round_trip() {
            let created = Price::create(decimal("1.12"));

            assert_eq!(Price::validate(created.value()).unwrap(), created);
        }

        #[rstest]
        #[should_panic(expected = "Not expecting Price to be invalid")]
        fn test_create_panics_on_invalid() {
            let _ = Price::create(decimal("-1"));
        }
    }

    mod billing_amount_tests {
        use super::*;

        #[rstest]
        #[case("0.00")]
        #[case("471.86")]
        #[case("10000.00")]
        fn test_validate_accepts(#[case] value: &str) {
            assert!(BillingAmount::validate(decimal(value)).is_ok());
        }

        #[rstest]
        #[case("-0.01")]
        #[case("10000.01")]
        fn test_validate_rejects(#[case] value: &str) {
            let errors = BillingAmount::validate(decimal(value)).unwrap_err();

            assert_eq!(
                errors[0].message,
                format!("The <{value}> should be between <0.00> and <10000.00>")
            );
        }

        #[rstest]
        fn test_sum_prices() {
            let prices = vec![
                Price::create(decimal("11.82")),
                Price::create(decimal("460.04")),
            ];

            let amount = BillingAmount::sum_prices(&prices).unwrap();

            assert_eq!(amount.value(), decimal("471.86"));
        }

        #[rstest]
        fn test_sum_prices_empty_is_zero() {
            let amount = BillingAmount::sum_prices(&[]).unwrap();

            assert_eq!(amount.value(), decimal("0"));
        }

        #[rstest]
        fn test_sum_prices_rejects_overflowing_total() {
            let prices = vec![Price::create(decimal("1000.00")); 11];

            let errors = BillingAmount::sum_prices(&prices).unwrap_err();

            assert_eq!(
                errors[0].message,
                "The <11000.00> should be between <0.00> and <10000.00>"
            );
        }

        #[rstest]
        fn test_create_round_trip() {
            let created = BillingAmount::create(decimal("471.86"));

            assert_eq!(BillingAmount::validate(created.value()).unwrap(), created);
        }
    }
}
