//! Order validation
//!
//! Converts an [`UnvalidatedOrder`] into a [`ValidatedOrder`].
//!
//! Validation never stops at the first problem. Every component is
//! checked and all findings are accumulated with the property path they
//! belong to, so one response can report `customerInfo.emailAddress` and
//! `lines[1].quantity` together. Only a failure of the remote address
//! service itself aborts the run.
//!
//! # Functions
//!
//! - [`to_customer_info`] - Customer details
//! - [`to_checked_address`] - Remote address existence check
//! - [`to_address`] - Address fields
//! - [`to_product_code`] - Product code format and catalog lookup
//! - [`to_validated_order_line`] - A single order line
//! - [`validate_order`] - The whole order

use crate::compound_types::{Address, City, CustomerInfo, PersonalName};
use crate::simple_types::{
    EmailAddress, OrderId, OrderLineId, OrderQuantity, ProductCode, Property,
    PropertyValidationError, String50, ValidationError, ZipCode, assign_all, collect_all, distinct,
    prepend_all, zip2, zip3, zip5, zip6,
};
use crate::workflow::dependencies::{CheckAddressExists, CheckProductCodeExists};
use crate::workflow::error_types::{CheckAddressFailure, PlaceOrderError, RemoteServiceError};
use crate::workflow::unvalidated_types::{
    UnvalidatedAddress, UnvalidatedCustomerInfo, UnvalidatedOrder, UnvalidatedOrderLine,
};
use crate::workflow::validated_types::{CheckedAddress, ValidatedOrder, ValidatedOrderLine};

// =============================================================================
// to_customer_info
// =============================================================================

/// Validates customer details, collecting errors from every field.
///
/// Error paths are `firstName`, `lastName`, and `emailAddress`.
///
/// # Errors
///
/// Returns all field errors together when any field is invalid.
///
/// # Examples
///
/// ```
/// use order_taking::workflow::{UnvalidatedCustomerInfo, validation::to_customer_info};
///
/// let unvalidated = UnvalidatedCustomerInfo::new(
///     "John".to_string(),
///     "Doe".to_string(),
///     "john@doe.com".to_string(),
/// );
/// let customer_info = to_customer_info(&unvalidated).unwrap();
/// assert_eq!(customer_info.name().first_name().value(), "John");
/// ```
pub fn to_customer_info(
    unvalidated: &UnvalidatedCustomerInfo,
) -> Result<CustomerInfo, Vec<PropertyValidationError>> {
    let first_name = String50::validate(unvalidated.first_name().to_string())
        .map_err(|errors| assign_all(&Property::new("firstName"), errors));
    let last_name = String50::validate(unvalidated.last_name().to_string())
        .map_err(|errors| assign_all(&Property::new("lastName"), errors));
    let email_address = EmailAddress::validate(unvalidated.email_address().to_string())
        .map_err(|errors| assign_all(&Property::new("emailAddress"), errors));

    zip3(first_name, last_name, email_address).map(|(first_name, last_name, email_address)| {
        CustomerInfo::new(PersonalName::new(first_name, last_name), email_address)
    })
}

// =============================================================================
// to_checked_address
// =============================================================================

/// Asks the remote service whether the address exists.
///
/// The outer `Result` carries a failure of the service itself, which
/// aborts validation. The inner `Result` carries the service's verdict
/// about the address, which is accumulated like any other finding.
///
/// # Errors
///
/// Returns the [`RemoteServiceError`] when the service could not be
/// consulted at all.
pub async fn to_checked_address<CheckAddress>(
    check_address_exists: &CheckAddress,
    address: &UnvalidatedAddress,
) -> Result<Result<CheckedAddress, Vec<ValidationError>>, RemoteServiceError>
where
    CheckAddress: CheckAddressExists + ?Sized,
{
    match check_address_exists.check(address).await {
        Ok(checked) => Ok(Ok(checked)),
        Err(CheckAddressFailure::Remote(error)) => Err(error),
        Err(verdict) => Ok(Err(vec![ValidationError::new(verdict.to_string())])),
    }
}

// =============================================================================
// to_address
// =============================================================================

/// Validates the fields of an address the service has confirmed.
///
/// Error paths are `addressLine1` through `addressLine4`, `city`, and
/// `zipCode`.
///
/// # Errors
///
/// Returns all field errors together when any field is invalid.
pub fn to_address(
    checked_address: &CheckedAddress,
) -> Result<Address, Vec<PropertyValidationError>> {
    let unvalidated = checked_address.value();

    let address_line1 = String50::validate(unvalidated.address_line1().to_string())
        .map_err(|errors| assign_all(&Property::new("addressLine1"), errors));
    let address_line2 = String50::validate_option(unvalidated.address_line2().map(str::to_string))
        .map_err(|errors| assign_all(&Property::new("addressLine2"), errors));
    let address_line3 = String50::validate_option(unvalidated.address_line3().map(str::to_string))
        .map_err(|errors| assign_all(&Property::new("addressLine3"), errors));
    let address_line4 = String50::validate_option(unvalidated.address_line4().map(str::to_string))
        .map_err(|errors| assign_all(&Property::new("addressLine4"), errors));
    let city = City::validate(unvalidated.city().to_string())
        .map_err(|errors| assign_all(&Property::new("city"), errors));
    let zip_code = ZipCode::validate(unvalidated.zip_code().to_string())
        .map_err(|errors| assign_all(&Property::new("zipCode"), errors));

    zip6(
        address_line1,
        address_line2,
        address_line3,
        address_line4,
        city,
        zip_code,
    )
    .map(
        |(address_line1, address_line2, address_line3, address_line4, city, zip_code)| {
            Address::new(
                address_line1,
                address_line2,
                address_line3,
                address_line4,
                city,
                zip_code,
            )
        },
    )
}

// =============================================================================
// validate_address
// =============================================================================

/// Runs the existence check and field validation for one address,
/// reporting every finding on the given property.
async fn validate_address<CheckAddress>(
    check_address_exists: &CheckAddress,
    property: &Property,
    address: &UnvalidatedAddress,
) -> Result<Result<Address, Vec<PropertyValidationError>>, RemoteServiceError>
where
    CheckAddress: CheckAddressExists + ?Sized,
{
    let validated = match to_checked_address(check_address_exists, address).await? {
        Ok(checked) => to_address(&checked).map_err(|errors| prepend_all(property, errors)),
        Err(errors) => Err(assign_all(property, errors)),
    };
    Ok(validated)
}

// =============================================================================
// to_product_code
// =============================================================================

/// Validates a product code's format, then looks it up in the catalog.
///
/// The catalog is only consulted for a well-formed code.
///
/// # Errors
///
/// Returns the format errors, or a single error when the code is
/// well-formed but unknown.
///
/// # Examples
///
/// ```
/// use order_taking::simple_types::ProductCode;
/// use order_taking::workflow::validation::to_product_code;
///
/// let check_product = |_: &ProductCode| true;
/// let product_code = to_product_code(&check_product, "W1234").unwrap();
/// assert!(product_code.is_widget());
///
/// let check_product = |_: &ProductCode| false;
/// let errors = to_product_code(&check_product, "W1234").unwrap_err();
/// assert_eq!(errors[0].message, "The product code <W1234> does not exist");
/// ```
pub fn to_product_code<CheckProduct>(
    check_product_code_exists: &CheckProduct,
    product_code: &str,
) -> Result<ProductCode, Vec<ValidationError>>
where
    CheckProduct: CheckProductCodeExists + ?Sized,
{
    let product_code = ProductCode::validate(product_code.to_string())?;

    if check_product_code_exists.check(&product_code) {
        Ok(product_code)
    } else {
        Err(vec![ValidationError::new(format!(
            "The product code <{}> does not exist",
            product_code.value()
        ))])
    }
}

// =============================================================================
// to_validated_order_line
// =============================================================================

/// Validates one order line.
///
/// The line id is checked independently. The quantity can only be
/// interpreted once the product code is known, so quantity errors are
/// reported only for lines with a valid product code.
///
/// Error paths are `orderLineId`, `productCode`, and `quantity`.
///
/// # Errors
///
/// Returns the accumulated findings, deduplicated within the line.
pub fn to_validated_order_line<CheckProduct>(
    check_product_code_exists: &CheckProduct,
    unvalidated: &UnvalidatedOrderLine,
) -> Result<ValidatedOrderLine, Vec<PropertyValidationError>>
where
    CheckProduct: CheckProductCodeExists + ?Sized,
{
    let order_line_id = OrderLineId::validate(unvalidated.order_line_id().to_string())
        .map_err(|errors| assign_all(&Property::new("orderLineId"), errors));

    let product_and_quantity = to_product_code(check_product_code_exists, unvalidated.product_code())
        .map_err(|errors| assign_all(&Property::new("productCode"), errors))
        .and_then(|product_code| {
            OrderQuantity::validate(&product_code, unvalidated.quantity())
                .map_err(|errors| assign_all(&Property::new("quantity"), errors))
                .map(|quantity| (product_code, quantity))
        });

    zip2(order_line_id, product_and_quantity)
        .map(|(order_line_id, (product_code, quantity))| {
            ValidatedOrderLine::new(order_line_id, product_code, quantity)
        })
        .map_err(distinct)
}

// =============================================================================
// validate_order
// =============================================================================

/// Validates a whole order, accumulating findings from every component.
///
/// Components are reported under their property paths: `orderId`,
/// `customerInfo.*`, `shippingAddress.*`, `billingAddress.*`, and
/// `lines[i].*` with the zero-based line index. Duplicate findings are
/// removed, first occurrence kept.
///
/// # Errors
///
/// - [`PlaceOrderError::Validation`] with all findings when the order
///   is invalid
/// - [`PlaceOrderError::RemoteService`] when the address service itself
///   fails
pub async fn validate_order<CheckProduct, CheckAddress>(
    check_product_code_exists: &CheckProduct,
    check_address_exists: &CheckAddress,
    unvalidated_order: &UnvalidatedOrder,
) -> Result<ValidatedOrder, PlaceOrderError>
where
    CheckProduct: CheckProductCodeExists + ?Sized,
    CheckAddress: CheckAddressExists + ?Sized,
{
    let order_id = OrderId::validate(unvalidated_order.order_id().to_string())
        .map_err(|errors| assign_all(&Property::new("orderId"), errors));

    let customer_info = to_customer_info(unvalidated_order.customer_info())
        .map_err(|errors| prepend_all(&Property::new("customerInfo"), errors));

    let shipping_address = validate_address(
        check_address_exists,
        &Property::new("shippingAddress"),
        unvalidated_order.shipping_address(),
    )
    .await?;

    let billing_address = validate_address(
        check_address_exists,
        &Property::new("billingAddress"),
        unvalidated_order.billing_address(),
    )
    .await?;

    let lines = collect_all(unvalidated_order.lines().iter().enumerate().map(
        |(index, line)| {
            to_validated_order_line(check_product_code_exists, line)
                .map_err(|errors| prepend_all(&Property::indexed("lines", index), errors))
        },
    ));

    zip5(order_id, customer_info, shipping_address, billing_address, lines)
        .map(
            |(order_id, customer_info, shipping_address, billing_address, lines)| {
                ValidatedOrder::new(
                    order_id,
                    customer_info,
                    shipping_address,
                    billing_address,
                    lines,
                )
            },
        )
        .map_err(|errors| PlaceOrderError::Validation(distinct(errors)))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use rstest::rstest;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    // =========================================================================
    // Mock helpers
    // =========================================================================

    fn always_exists_product() -> impl CheckProductCodeExists {
        |_: &ProductCode| true
    }

    fn never_exists_product() -> impl CheckProductCodeExists {
        |_: &ProductCode| false
    }

    struct AlwaysValidAddress;

    #[async_trait]
    impl CheckAddressExists for AlwaysValidAddress {
        async fn check(
            &self,
            address: &UnvalidatedAddress,
        ) -> Result<CheckedAddress, CheckAddressFailure> {
            Ok(CheckedAddress::new(address.clone()))
        }
    }

    struct FailingAddress(CheckAddressFailure);

    #[async_trait]
    impl CheckAddressExists for FailingAddress {
        async fn check(
            &self,
            _address: &UnvalidatedAddress,
        ) -> Result<CheckedAddress, CheckAddressFailure> {
            Err(self.0.clone())
        }
    }

    // =========================================================================
    // Fixture helpers
    // =========================================================================

    fn create_valid_customer_info() -> UnvalidatedCustomerInfo {
        UnvalidatedCustomerInfo::new(
            "John".to_string(),
            "Doe".to_string(),
            "john@doe.com".to_string(),
        )
    }

    fn create_valid_address() -> UnvalidatedAddress {
        UnvalidatedAddress::new(
            "Some Street".to_string(),
            None,
            None,
            None,
            "Los Angeles".to_string(),
            "12456".to_string(),
        )
    }

    fn create_valid_lines() -> Vec<UnvalidatedOrderLine> {
        vec![
            UnvalidatedOrderLine::new(
                "LN1".to_string(),
                "G134".to_string(),
                Decimal::from_str("10.55").unwrap(),
            ),
            UnvalidatedOrderLine::new("LN2".to_string(), "W1344".to_string(), Decimal::from(124)),
        ]
    }

    fn create_valid_order() -> UnvalidatedOrder {
        UnvalidatedOrder::new(
            "ORD1".to_string(),
            create_valid_customer_info(),
            create_valid_address(),
            create_valid_address(),
            create_valid_lines(),
        )
    }

    fn messages(errors: &[PropertyValidationError]) -> Vec<String> {
        errors.iter().map(ToString::to_string).collect()
    }

    // =========================================================================
    // to_customer_info tests
    // =========================================================================

    #[rstest]
    fn test_to_customer_info_valid() {
        let result = to_customer_info(&create_valid_customer_info());

        let customer_info = result.unwrap();
        assert_eq!(customer_info.name().first_name().value(), "John");
        assert_eq!(customer_info.name().last_name().value(), "Doe");
        assert_eq!(customer_info.email_address().value(), "john@doe.com");
    }

    #[rstest]
    fn test_to_customer_info_accumulates_field_errors() {
        let unvalidated = UnvalidatedCustomerInfo::new(
            String::new(),
            "Doe".to_string(),
            "not-an-email".to_string(),
        );

        let errors = to_customer_info(&unvalidated).unwrap_err();

        assert_eq!(
            messages(&errors),
            vec![
                "firstName: The length of <> should be between <1> and <50>",
                "emailAddress: 'not-an-email' must match the pattern '^.+@.+$'",
            ]
        );
    }

    // =========================================================================
    // to_checked_address tests
    // =========================================================================

    #[rstest]
    #[tokio::test]
    async fn test_to_checked_address_success() {
        let address = create_valid_address();

        let result = to_checked_address(&AlwaysValidAddress, &address).await;

        assert_eq!(result, Ok(Ok(CheckedAddress::new(address))));
    }

    #[rstest]
    #[case(CheckAddressFailure::NotFound, "Address not found")]
    #[case(CheckAddressFailure::InvalidFormat, "Address has bad format")]
    #[tokio::test]
    async fn test_to_checked_address_verdicts(
        #[case] failure: CheckAddressFailure,
        #[case] expected: &str,
    ) {
        let checker = FailingAddress(failure);

        let result = to_checked_address(&checker, &create_valid_address()).await;

        assert_eq!(result, Ok(Err(vec![ValidationError::new(expected)])));
    }

    #[rstest]
    #[tokio::test]
    async fn test_to_checked_address_remote_failure() {
        use crate::workflow::error_types::ServiceInfo;

        let remote = RemoteServiceError::new(
            ServiceInfo::new(
                "AddressCheckService".to_string(),
                "https://addresses.example.com/check".to_string(),
            ),
            "Connection timeout".to_string(),
        );
        let checker = FailingAddress(CheckAddressFailure::Remote(remote.clone()));

        let result = to_checked_address(&checker, &create_valid_address()).await;

        assert_eq!(result, Err(remote));
    }

    // =========================================================================
    // to_address tests
    // =========================================================================

    #[rstest]
    fn test_to_address_valid_all_fields() {
        let unvalidated = UnvalidatedAddress::new(
            "Some Street".to_string(),
            Some("Apt 4".to_string()),
            None,
            None,
            "Los Angeles".to_string(),
            "12456".to_string(),
        );

        let address = to_address(&CheckedAddress::new(unvalidated)).unwrap();

        assert_eq!(address.address_line1().value(), "Some Street");
        assert_eq!(address.address_line2().map(String50::value), Some("Apt 4"));
        assert!(address.address_line3().is_none());
        assert_eq!(address.city().value(), "Los Angeles");
        assert_eq!(address.zip_code().value(), "12456");
    }

    #[rstest]
    fn test_to_address_accumulates_field_errors() {
        let unvalidated = UnvalidatedAddress::new(
            "Some Street".to_string(),
            Some("a".repeat(51)),
            None,
            None,
            "Los Angeles".to_string(),
            "124".to_string(),
        );

        let errors = to_address(&CheckedAddress::new(unvalidated)).unwrap_err();

        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].path()[0].name(), "addressLine2");
        assert_eq!(
            errors[1].to_string(),
            "zipCode: '124' must match the pattern '^\\d{5}$'"
        );
    }

    // =========================================================================
    // to_product_code tests
    // =========================================================================

    #[rstest]
    fn test_to_product_code_widget_exists() {
        let check_product = always_exists_product();

        let product_code = to_product_code(&check_product, "W1234").unwrap();

        assert!(product_code.is_widget());
    }

    #[rstest]
    fn test_to_product_code_gizmo_exists() {
        let check_product = always_exists_product();

        let product_code = to_product_code(&check_product, "G123").unwrap();

        assert!(product_code.is_gizmo());
    }

    #[rstest]
    fn test_to_product_code_invalid_format() {
        let check_product = always_exists_product();

        let errors = to_product_code(&check_product, "W12").unwrap_err();

        assert_eq!(
            errors,
            vec![ValidationError::new(
                "'W12' must match the pattern '^W\\d{4}$'"
            )]
        );
    }

    #[rstest]
    fn test_to_product_code_unknown_prefix() {
        let check_product = always_exists_product();

        let errors = to_product_code(&check_product, "X999").unwrap_err();

        assert_eq!(
            errors,
            vec![ValidationError::new(
                "The product code <X999> should start with 'W' or 'G'"
            )]
        );
    }

    #[rstest]
    fn test_to_product_code_not_exists() {
        let check_product = never_exists_product();

        let errors = to_product_code(&check_product, "W9999").unwrap_err();

        assert_eq!(
            errors,
            vec![ValidationError::new(
                "The product code <W9999> does not exist"
            )]
        );
    }

    // =========================================================================
    // to_validated_order_line tests
    // =========================================================================

    #[rstest]
    fn test_to_validated_order_line_widget() {
        let line =
            UnvalidatedOrderLine::new("LN2".to_string(), "W1344".to_string(), Decimal::from(124));
        let check_product = always_exists_product();

        let validated = to_validated_order_line(&check_product, &line).unwrap();

        assert_eq!(validated.order_line_id().value(), "LN2");
        assert!(validated.product_code().is_widget());
        assert!(validated.quantity().is_unit());
    }

    #[rstest]
    fn test_to_validated_order_line_gizmo() {
        let line = UnvalidatedOrderLine::new(
            "LN1".to_string(),
            "G134".to_string(),
            Decimal::from_str("10.55").unwrap(),
        );
        let check_product = always_exists_product();

        let validated = to_validated_order_line(&check_product, &line).unwrap();

        assert!(validated.product_code().is_gizmo());
        assert!(validated.quantity().is_kilogram());
    }

    #[rstest]
    fn test_to_validated_order_line_skips_quantity_when_code_invalid() {
        let line = UnvalidatedOrderLine::new(String::new(), "X9".to_string(), Decimal::ZERO);
        let check_product = always_exists_product();

        let errors = to_validated_order_line(&check_product, &line).unwrap_err();

        assert_eq!(
            messages(&errors),
            vec![
                "orderLineId: '' must match the pattern '^[A-Z0-9]{1,10}$'",
                "productCode: The product code <X9> should start with 'W' or 'G'",
            ]
        );
    }

    #[rstest]
    fn test_to_validated_order_line_reports_quantity_when_code_valid() {
        let line =
            UnvalidatedOrderLine::new("LN1".to_string(), "W1344".to_string(), Decimal::ZERO);
        let check_product = always_exists_product();

        let errors = to_validated_order_line(&check_product, &line).unwrap_err();

        assert_eq!(
            messages(&errors),
            vec!["quantity: The <0> should be between <1> and <1000>"]
        );
    }

    #[rstest]
    fn test_to_validated_order_line_non_integer_widget_quantity() {
        let line = UnvalidatedOrderLine::new(
            "LN1".to_string(),
            "W1344".to_string(),
            Decimal::from_str("12400.55").unwrap(),
        );
        let check_product = always_exists_product();

        let errors = to_validated_order_line(&check_product, &line).unwrap_err();

        assert_eq!(
            messages(&errors),
            vec!["quantity: The <12400.55> should be an integer"]
        );
    }

    // =========================================================================
    // validate_order tests
    // =========================================================================

    #[rstest]
    #[tokio::test]
    async fn test_validate_order_success() {
        let check_product = always_exists_product();

        let validated = validate_order(&check_product, &AlwaysValidAddress, &create_valid_order())
            .await
            .unwrap();

        assert_eq!(validated.order_id().value(), "ORD1");
        assert_eq!(
            validated.customer_info().name().first_name().value(),
            "John"
        );
        assert_eq!(validated.shipping_address().city().value(), "Los Angeles");
        assert_eq!(validated.billing_address().zip_code().value(), "12456");
        assert_eq!(validated.lines().len(), 2);
    }

    #[rstest]
    #[tokio::test]
    async fn test_validate_order_empty_lines() {
        let order = UnvalidatedOrder::new(
            "ORD1".to_string(),
            create_valid_customer_info(),
            create_valid_address(),
            create_valid_address(),
            vec![],
        );
        let check_product = always_exists_product();

        let validated = validate_order(&check_product, &AlwaysValidAddress, &order)
            .await
            .unwrap();

        assert!(validated.lines().is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn test_validate_order_accumulates_across_components() {
        let order = UnvalidatedOrder::new(
            "ord-1!".to_string(),
            UnvalidatedCustomerInfo::new(
                String::new(),
                "Doe".to_string(),
                "john@doe.com".to_string(),
            ),
            create_valid_address(),
            create_valid_address(),
            vec![UnvalidatedOrderLine::new(
                "LN1".to_string(),
                "W1344".to_string(),
                Decimal::ZERO,
            )],
        );
        let check_product = always_exists_product();

        let error = validate_order(&check_product, &AlwaysValidAddress, &order)
            .await
            .unwrap_err();

        let PlaceOrderError::Validation(errors) = error else {
            panic!("expected a validation failure");
        };
        assert_eq!(
            messages(&errors),
            vec![
                "orderId: 'ord-1!' must match the pattern '^[A-Z0-9]{1,10}$'",
                "customerInfo.firstName: The length of <> should be between <1> and <50>",
                "lines[0].quantity: The <0> should be between <1> and <1000>",
            ]
        );
    }

    #[rstest]
    #[tokio::test]
    async fn test_validate_order_reports_address_verdict_on_property() {
        let checker = FailingAddress(CheckAddressFailure::NotFound);
        let check_product = always_exists_product();

        let error = validate_order(&check_product, &checker, &create_valid_order())
            .await
            .unwrap_err();

        let PlaceOrderError::Validation(errors) = error else {
            panic!("expected a validation failure");
        };
        assert_eq!(
            messages(&errors),
            vec![
                "shippingAddress: Address not found",
                "billingAddress: Address not found",
            ]
        );
    }

    #[rstest]
    #[tokio::test]
    async fn test_validate_order_indexes_line_errors() {
        let order = UnvalidatedOrder::new(
            "ORD1".to_string(),
            create_valid_customer_info(),
            create_valid_address(),
            create_valid_address(),
            vec![
                UnvalidatedOrderLine::new(
                    "LN1".to_string(),
                    "G134".to_string(),
                    Decimal::from_str("10.55").unwrap(),
                ),
                UnvalidatedOrderLine::new(
                    "LN2".to_string(),
                    "W1344".to_string(),
                    Decimal::from_str("12400.55").unwrap(),
                ),
            ],
        );
        let check_product = always_exists_product();

        let error = validate_order(&check_product, &AlwaysValidAddress, &order)
            .await
            .unwrap_err();

        let PlaceOrderError::Validation(errors) = error else {
            panic!("expected a validation failure");
        };
        assert_eq!(
            messages(&errors),
            vec!["lines[1].quantity: The <12400.55> should be an integer"]
        );
    }

    #[rstest]
    #[tokio::test]
    async fn test_validate_order_remote_failure_aborts() {
        use crate::workflow::error_types::ServiceInfo;

        let remote = RemoteServiceError::new(
            ServiceInfo::new(
                "AddressCheckService".to_string(),
                "https://addresses.example.com/check".to_string(),
            ),
            "Connection timeout".to_string(),
        );
        let checker = FailingAddress(CheckAddressFailure::Remote(remote));
        let check_product = always_exists_product();

        let error = validate_order(&check_product, &checker, &create_valid_order())
            .await
            .unwrap_err();

        assert!(error.is_remote_service());
    }

    #[rstest]
    #[tokio::test]
    async fn test_validate_order_product_not_exists() {
        let check_product = never_exists_product();

        let error = validate_order(&check_product, &AlwaysValidAddress, &create_valid_order())
            .await
            .unwrap_err();

        let PlaceOrderError::Validation(errors) = error else {
            panic!("expected a validation failure");
        };
        assert_eq!(
            messages(&errors),
            vec![
                "lines[0].productCode: The product code <G134> does not exist",
                "lines[1].productCode: The product code <W1344> does not exist",
            ]
        );
    }
}
