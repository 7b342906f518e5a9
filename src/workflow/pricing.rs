//! Pricing module
//!
//! Converts a [`ValidatedOrder`] to a [`PricedOrder`].
//!
//! Unlike validation, pricing stops at the first failure. By the time an
//! order reaches this stage every product code is known to exist, so a
//! pricing failure means a computed amount fell outside its range.
//!
//! # Functions
//!
//! - [`to_priced_order_line`] - Attaches the line price to an order line
//! - [`price_order`] - Main pricing function

use crate::simple_types::{BillingAmount, Price, join_messages};
use crate::workflow::dependencies::GetProductPrice;
use crate::workflow::error_types::{PlaceOrderError, PricingError};
use crate::workflow::priced_types::{PricedOrder, PricedOrderLine};
use crate::workflow::validated_types::{ValidatedOrder, ValidatedOrderLine};

// =============================================================================
// to_priced_order_line
// =============================================================================

/// Prices one order line as unit price times quantity.
///
/// The result is rounded to cents before the range check.
///
/// # Errors
///
/// Returns a [`PricingError`] when the line price falls outside the
/// allowed range.
///
/// # Examples
///
/// ```
/// use order_taking::simple_types::{
///     OrderLineId, OrderQuantity, Price, ProductCode, UnitQuantity,
/// };
/// use order_taking::workflow::{ValidatedOrderLine, pricing::to_priced_order_line};
/// use rust_decimal::Decimal;
///
/// let validated_line = ValidatedOrderLine::new(
///     OrderLineId::create("LN2".to_string()),
///     ProductCode::create("W1344".to_string()),
///     OrderQuantity::Unit(UnitQuantity::create(124)),
/// );
/// let get_price = |_: &ProductCode| Price::create(Decimal::new(371, 2));
///
/// let priced_line = to_priced_order_line(&get_price, &validated_line).unwrap();
/// assert_eq!(priced_line.line_price().value(), Decimal::new(46004, 2));
/// ```
pub fn to_priced_order_line<GetPrice>(
    get_product_price: &GetPrice,
    validated_order_line: &ValidatedOrderLine,
) -> Result<PricedOrderLine, PricingError>
where
    GetPrice: GetProductPrice + ?Sized,
{
    let unit_price = get_product_price.price(validated_order_line.product_code());

    let line_price = unit_price
        .multiply(validated_order_line.quantity().value())
        .map_err(|errors| PricingError::new(join_messages(&errors)))?;

    Ok(PricedOrderLine::new(
        validated_order_line.order_line_id().clone(),
        validated_order_line.product_code().clone(),
        *validated_order_line.quantity(),
        line_price,
    ))
}

// =============================================================================
// price_order
// =============================================================================

/// Prices a validated order and computes the amount to bill.
///
/// Lines are priced in order and the first failure wins. The billing
/// amount is the rounded sum of all line prices; its failure message is
/// prefixed with `amountToBill: `.
///
/// # Errors
///
/// Returns [`PlaceOrderError::Pricing`] when a line price or the billing
/// amount falls outside its range.
pub fn price_order<GetPrice>(
    get_product_price: &GetPrice,
    validated_order: &ValidatedOrder,
) -> Result<PricedOrder, PlaceOrderError>
where
    GetPrice: GetProductPrice + ?Sized,
{
    let priced_lines: Result<Vec<PricedOrderLine>, PricingError> = validated_order
        .lines()
        .iter()
        .map(|line| to_priced_order_line(get_product_price, line))
        .collect();
    let lines = priced_lines.map_err(PlaceOrderError::Pricing)?;

    let line_prices: Vec<Price> = lines.iter().map(PricedOrderLine::line_price).collect();
    let amount_to_bill = BillingAmount::sum_prices(&line_prices).map_err(|errors| {
        PlaceOrderError::Pricing(PricingError::new(format!(
            "amountToBill: {}",
            join_messages(&errors)
        )))
    })?;

    Ok(PricedOrder::new(
        validated_order.order_id().clone(),
        validated_order.customer_info().clone(),
        validated_order.shipping_address().clone(),
        validated_order.billing_address().clone(),
        amount_to_bill,
        lines,
    ))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compound_types::{Address, City, CustomerInfo, PersonalName};
    use crate::simple_types::{
        EmailAddress, OrderId, OrderLineId, OrderQuantity, ProductCode, String50, ZipCode,
    };
    use rstest::rstest;
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use std::sync::atomic::{AtomicUsize, Ordering};

    // =========================================================================
    // Fixture helpers
    // =========================================================================

    fn create_line(line_id: &str, product_code: &str, quantity: &str) -> ValidatedOrderLine {
        let product_code = ProductCode::create(product_code.to_string());
        let quantity =
            OrderQuantity::validate(&product_code, Decimal::from_str(quantity).unwrap()).unwrap();
        ValidatedOrderLine::new(
            OrderLineId::create(line_id.to_string()),
            product_code,
            quantity,
        )
    }

    fn create_address(zip_code: &str) -> Address {
        Address::new(
            String50::create("Some Street".to_string()),
            None,
            None,
            None,
            City::new(String50::create("Los Angeles".to_string())),
            ZipCode::create(zip_code.to_string()),
        )
    }

    fn create_validated_order(lines: Vec<ValidatedOrderLine>) -> ValidatedOrder {
        ValidatedOrder::new(
            OrderId::create("ORD1".to_string()),
            CustomerInfo::new(
                PersonalName::new(
                    String50::create("John".to_string()),
                    String50::create("Doe".to_string()),
                ),
                EmailAddress::create("john@doe.com".to_string()),
            ),
            create_address("12456"),
            create_address("72456"),
            lines,
        )
    }

    fn price(value: &str) -> Price {
        Price::create(Decimal::from_str(value).unwrap())
    }

    fn catalog_prices() -> impl GetProductPrice {
        |product_code: &ProductCode| match product_code.value() {
            "G134" => price("1.12"),
            _ => price("3.71"),
        }
    }

    // =========================================================================
    // to_priced_order_line tests
    // =========================================================================

    mod to_priced_order_line_tests {
        use super::*;

        #[rstest]
        #[case("LN1", "G134", "10.55", "1.12", "11.82")]
        #[case("LN2", "W1344", "124", "3.71", "460.04")]
        fn test_line_price_calculation(
            #[case] line_id: &str,
            #[case] product_code: &str,
            #[case] quantity: &str,
            #[case] unit_price: &str,
            #[case] expected: &str,
        ) {
            let validated_line = create_line(line_id, product_code, quantity);
            let unit_price = price(unit_price);
            let get_price = move |_: &ProductCode| unit_price;

            let priced_line = to_priced_order_line(&get_price, &validated_line).unwrap();

            assert_eq!(priced_line.order_line_id().value(), line_id);
            assert_eq!(
                priced_line.line_price().value(),
                Decimal::from_str(expected).unwrap()
            );
        }

        #[rstest]
        fn test_line_price_at_upper_bound() {
            let validated_line = create_line("LN1", "W1344", "10");
            let get_price = |_: &ProductCode| price("100.00");

            let priced_line = to_priced_order_line(&get_price, &validated_line).unwrap();

            assert_eq!(
                priced_line.line_price().value(),
                Decimal::from_str("1000.00").unwrap()
            );
        }

        #[rstest]
        fn test_line_price_out_of_range() {
            let validated_line = create_line("LN1", "W1344", "11");
            let get_price = |_: &ProductCode| price("100.00");

            let error = to_priced_order_line(&get_price, &validated_line).unwrap_err();

            assert_eq!(
                error.message(),
                "The <1100.00> should be between <0.00> and <1000.00>"
            );
        }
    }

    // =========================================================================
    // price_order tests
    // =========================================================================

    mod price_order_tests {
        use super::*;

        #[rstest]
        fn test_prices_order_and_sums_lines() {
            let order = create_validated_order(vec![
                create_line("LN1", "G134", "10.55"),
                create_line("LN2", "W1344", "124"),
            ]);
            let get_price = catalog_prices();

            let priced_order = price_order(&get_price, &order).unwrap();

            assert_eq!(priced_order.lines().len(), 2);
            assert_eq!(
                priced_order.lines()[0].line_price().value(),
                Decimal::from_str("11.82").unwrap()
            );
            assert_eq!(
                priced_order.lines()[1].line_price().value(),
                Decimal::from_str("460.04").unwrap()
            );
            assert_eq!(
                priced_order.amount_to_bill().value(),
                Decimal::from_str("471.86").unwrap()
            );
        }

        #[rstest]
        fn test_preserves_order_fields() {
            let order = create_validated_order(vec![create_line("LN1", "G134", "10.55")]);
            let get_price = catalog_prices();

            let priced_order = price_order(&get_price, &order).unwrap();

            assert_eq!(priced_order.order_id(), order.order_id());
            assert_eq!(priced_order.customer_info(), order.customer_info());
            assert_eq!(priced_order.shipping_address(), order.shipping_address());
            assert_eq!(priced_order.billing_address(), order.billing_address());
        }

        #[rstest]
        fn test_empty_order_bills_zero() {
            let order = create_validated_order(vec![]);
            let get_price = catalog_prices();

            let priced_order = price_order(&get_price, &order).unwrap();

            assert!(priced_order.lines().is_empty());
            assert_eq!(priced_order.amount_to_bill().value(), Decimal::ZERO);
        }

        #[rstest]
        fn test_stops_at_first_failing_line() {
            let order = create_validated_order(vec![
                create_line("LN1", "W1344", "11"),
                create_line("LN2", "W1345", "1"),
            ]);
            let calls = AtomicUsize::new(0);
            let get_price = |_: &ProductCode| {
                calls.fetch_add(1, Ordering::SeqCst);
                price("100.00")
            };

            let error = price_order(&get_price, &order).unwrap_err();

            assert!(error.is_pricing());
            assert_eq!(calls.load(Ordering::SeqCst), 1);
        }

        #[rstest]
        fn test_billing_amount_out_of_range() {
            let lines = (0..11)
                .map(|index| create_line(&format!("LN{index}"), "W1344", "10"))
                .collect();
            let order = create_validated_order(lines);
            let get_price = |_: &ProductCode| price("100.00");

            let error = price_order(&get_price, &order).unwrap_err();

            let PlaceOrderError::Pricing(pricing_error) = error else {
                panic!("expected a pricing failure");
            };
            assert_eq!(
                pricing_error.message(),
                "amountToBill: The <11000.00> should be between <0.00> and <10000.00>"
            );
        }
    }
}
