//! Output DTOs
//!
//! Defines the DTO types used to serialize API responses.
//!
//! # Type list
//!
//! - [`PricedOrderLineDto`] - Priced order line DTO
//! - [`OrderPlacedDto`] - Order placed event DTO
//! - [`BillableOrderPlacedDto`] - Billable order placed event DTO
//! - [`OrderAcknowledgmentSentDto`] - Acknowledgment sent event DTO
//! - [`PlaceOrderEventDto`] - Workflow output event DTO

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::dto::{AddressDto, CustomerInfoDto};
use crate::workflow::{
    BillableOrderPlaced, OrderAcknowledgmentSent, OrderPlaced, PlaceOrderEvent, PricedOrderLine,
};

// =============================================================================
// PricedOrderLineDto
// =============================================================================

/// Priced order line DTO
///
/// A type for serializing a priced order line.
/// Decimal amounts are serialized as strings to preserve precision.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricedOrderLineDto {
    /// Order line ID
    pub order_line_id: String,
    /// Product code
    pub product_code: String,
    /// Quantity (string format)
    #[serde(with = "rust_decimal::serde::str")]
    pub quantity: Decimal,
    /// Line price (string format)
    #[serde(with = "rust_decimal::serde::str")]
    pub line_price: Decimal,
}

impl PricedOrderLineDto {
    /// Creates a `PricedOrderLineDto` from the domain `PricedOrderLine`
    #[must_use]
    pub fn from_domain(line: &PricedOrderLine) -> Self {
        Self {
            order_line_id: line.order_line_id().value().to_string(),
            product_code: line.product_code().value().to_string(),
            quantity: line.quantity().value(),
            line_price: line.line_price().value(),
        }
    }
}

// =============================================================================
// OrderPlacedDto
// =============================================================================

/// Order placed event DTO
///
/// A type for serializing the priced order carried by the order placed event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPlacedDto {
    /// Order ID
    pub order_id: String,
    /// Customer info
    pub customer_info: CustomerInfoDto,
    /// Shipping address
    pub shipping_address: AddressDto,
    /// Billing address
    pub billing_address: AddressDto,
    /// Billing amount (string format)
    #[serde(with = "rust_decimal::serde::str")]
    pub amount_to_bill: Decimal,
    /// Priced order lines
    pub lines: Vec<PricedOrderLineDto>,
}

impl OrderPlacedDto {
    /// Creates an `OrderPlacedDto` from the domain `OrderPlaced`
    #[must_use]
    pub fn from_domain(event: &OrderPlaced) -> Self {
        Self {
            order_id: event.order_id().value().to_string(),
            customer_info: CustomerInfoDto::from_customer_info(event.customer_info()),
            shipping_address: AddressDto::from_address(event.shipping_address()),
            billing_address: AddressDto::from_address(event.billing_address()),
            amount_to_bill: event.amount_to_bill().value(),
            lines: event
                .lines()
                .iter()
                .map(PricedOrderLineDto::from_domain)
                .collect(),
        }
    }
}

// =============================================================================
// BillableOrderPlacedDto
// =============================================================================

/// Billable order placed event DTO
///
/// A type for serializing a billing event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillableOrderPlacedDto {
    /// Order ID
    pub order_id: String,
    /// Billing address
    pub billing_address: AddressDto,
    /// Billing amount (string format)
    #[serde(with = "rust_decimal::serde::str")]
    pub amount_to_bill: Decimal,
}

impl BillableOrderPlacedDto {
    /// Creates a `BillableOrderPlacedDto` from the domain `BillableOrderPlaced`
    #[must_use]
    pub fn from_domain(event: &BillableOrderPlaced) -> Self {
        Self {
            order_id: event.order_id().value().to_string(),
            billing_address: AddressDto::from_address(event.billing_address()),
            amount_to_bill: event.amount_to_bill().value(),
        }
    }
}

// =============================================================================
// OrderAcknowledgmentSentDto
// =============================================================================

/// Acknowledgment sent event DTO
///
/// A type for serializing an acknowledgment sent event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderAcknowledgmentSentDto {
    /// Order ID
    pub order_id: String,
    /// Recipient email address
    pub email_address: String,
}

impl OrderAcknowledgmentSentDto {
    /// Creates an `OrderAcknowledgmentSentDto` from the domain `OrderAcknowledgmentSent`
    #[must_use]
    pub fn from_domain(event: &OrderAcknowledgmentSent) -> Self {
        Self {
            order_id: event.order_id().value().to_string(),
            email_address: event.email_address().value().to_string(),
        }
    }
}

// =============================================================================
// PlaceOrderEventDto
// =============================================================================

/// Place-order workflow output event DTO
///
/// A type for serializing events upon workflow completion.
/// Adjacently tagged format discriminated by the `type` field.
///
/// # Examples
///
/// ```
/// use order_taking::dto::{OrderAcknowledgmentSentDto, PlaceOrderEventDto};
///
/// let dto = PlaceOrderEventDto::AcknowledgmentSent(OrderAcknowledgmentSentDto {
///     order_id: "ORD1".to_string(),
///     email_address: "john@doe.com".to_string(),
/// });
///
/// let json = serde_json::to_string(&dto).unwrap();
/// assert!(json.contains("\"type\":\"AcknowledgmentSent\""));
/// assert!(json.contains("\"orderId\":\"ORD1\""));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum PlaceOrderEventDto {
    /// Acknowledgment sent event
    AcknowledgmentSent(OrderAcknowledgmentSentDto),
    /// Order placed event
    OrderPlaced(OrderPlacedDto),
    /// Billable order placed event
    BillableOrderPlaced(BillableOrderPlacedDto),
}

impl PlaceOrderEventDto {
    /// Creates a `PlaceOrderEventDto` from the domain `PlaceOrderEvent`
    #[must_use]
    pub fn from_domain(event: &PlaceOrderEvent) -> Self {
        match event {
            PlaceOrderEvent::AcknowledgmentSent(e) => {
                Self::AcknowledgmentSent(OrderAcknowledgmentSentDto::from_domain(e))
            }
            PlaceOrderEvent::OrderPlaced(e) => Self::OrderPlaced(OrderPlacedDto::from_domain(e)),
            PlaceOrderEvent::BillableOrderPlaced(e) => {
                Self::BillableOrderPlaced(BillableOrderPlacedDto::from_domain(e))
            }
        }
    }

    /// Creates a DTO list from a list of domain events
    #[must_use]
    pub fn from_domain_list(events: &[PlaceOrderEvent]) -> Vec<Self> {
        events.iter().map(Self::from_domain).collect()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compound_types::{Address, City, CustomerInfo, PersonalName};
    use crate::simple_types::{
        BillingAmount, EmailAddress, OrderId, OrderLineId, OrderQuantity, Price, ProductCode,
        String50, ZipCode,
    };
    use crate::workflow::PricedOrder;
    use rstest::rstest;
    use std::str::FromStr;

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

    fn create_priced_order() -> PricedOrder {
        let product_code = ProductCode::create("W1344".to_string());
        let quantity = OrderQuantity::validate(&product_code, Decimal::from(124)).unwrap();

        PricedOrder::new(
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
            BillingAmount::create(Decimal::from_str("460.04").unwrap()),
            vec![PricedOrderLine::new(
                OrderLineId::create("LN2".to_string()),
                product_code,
                quantity,
                Price::create(Decimal::from_str("460.04").unwrap()),
            )],
        )
    }

    mod order_placed_dto_tests {
        use super::*;

        #[rstest]
        fn test_from_domain_maps_every_field() {
            let dto = OrderPlacedDto::from_domain(&create_priced_order());

            assert_eq!(dto.order_id, "ORD1");
            assert_eq!(dto.customer_info.first_name, "John");
            assert_eq!(dto.shipping_address.zip_code, "12456");
            assert_eq!(dto.billing_address.zip_code, "72456");
            assert_eq!(dto.amount_to_bill, Decimal::from_str("460.04").unwrap());
            assert_eq!(dto.lines[0].product_code, "W1344");
        }

        #[rstest]
        fn test_serializes_decimals_as_strings() {
            let dto = OrderPlacedDto::from_domain(&create_priced_order());

            let json = serde_json::to_string(&dto).unwrap();

            assert!(json.contains("\"amountToBill\":\"460.04\""));
            assert!(json.contains("\"linePrice\":\"460.04\""));
            assert!(json.contains("\"quantity\":\"124\""));
        }
    }

    mod place_order_event_dto_tests {
        use super::*;

        #[rstest]
        fn test_from_domain_list_keeps_event_order() {
            let priced_order = create_priced_order();
            let events = vec![
                PlaceOrderEvent::OrderPlaced(priced_order.clone()),
                PlaceOrderEvent::BillableOrderPlaced(BillableOrderPlaced::new(
                    priced_order.order_id().clone(),
                    priced_order.billing_address().clone(),
                    priced_order.amount_to_bill(),
                )),
            ];

            let dtos = PlaceOrderEventDto::from_domain_list(&events);

            assert_eq!(dtos.len(), 2);
            assert!(matches!(dtos[0], PlaceOrderEventDto::OrderPlaced(_)));
            assert!(matches!(dtos[1], PlaceOrderEventDto::BillableOrderPlaced(_)));
        }

        #[rstest]
        fn test_billable_event_serialization_shape() {
            let priced_order = create_priced_order();
            let event = PlaceOrderEvent::BillableOrderPlaced(BillableOrderPlaced::new(
                priced_order.order_id().clone(),
                priced_order.billing_address().clone(),
                priced_order.amount_to_bill(),
            ));

            let json = serde_json::to_string(&PlaceOrderEventDto::from_domain(&event)).unwrap();

            assert!(json.contains("\"type\":\"BillableOrderPlaced\""));
            assert!(json.contains("\"data\":{"));
            assert!(json.contains("\"amountToBill\":\"460.04\""));
        }
    }
}
