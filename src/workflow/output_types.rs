//! Workflow output events
//!
//! Events emitted by a successful place-order run, intended for
//! downstream consumers such as billing and shipping.
//!
//! # Types
//!
//! - [`OrderAcknowledgmentSent`] - An acknowledgment went out to the customer
//! - [`OrderPlaced`] - The full priced order, for shipping
//! - [`BillableOrderPlaced`] - Billing details, only when money is owed
//! - [`PlaceOrderEvent`] - The union of all emitted events

use crate::compound_types::Address;
use crate::simple_types::{BillingAmount, EmailAddress, OrderId};
use crate::workflow::priced_types::PricedOrder;

// =============================================================================
// OrderAcknowledgmentSent
// =============================================================================

/// Records that an acknowledgment letter was sent for an order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderAcknowledgmentSent {
    order_id: OrderId,
    email_address: EmailAddress,
}

impl OrderAcknowledgmentSent {
    /// Builds the event from the order id and the recipient
    #[must_use]
    pub const fn new(order_id: OrderId, email_address: EmailAddress) -> Self {
        Self {
            order_id,
            email_address,
        }
    }

    /// Returns the order id
    #[must_use]
    pub const fn order_id(&self) -> &OrderId {
        &self.order_id
    }

    /// Returns the recipient address
    #[must_use]
    pub const fn email_address(&self) -> &EmailAddress {
        &self.email_address
    }
}

// =============================================================================
// OrderPlaced
// =============================================================================

/// The order-placed event is the priced order itself.
pub type OrderPlaced = PricedOrder;

// =============================================================================
// BillableOrderPlaced
// =============================================================================

/// Billing details for an order with a positive amount to bill.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BillableOrderPlaced {
    order_id: OrderId,
    billing_address: Address,
    amount_to_bill: BillingAmount,
}

impl BillableOrderPlaced {
    /// Builds the event from the order id, billing address, and amount
    #[must_use]
    pub const fn new(
        order_id: OrderId,
        billing_address: Address,
        amount_to_bill: BillingAmount,
    ) -> Self {
        Self {
            order_id,
            billing_address,
            amount_to_bill,
        }
    }

    /// Returns the order id
    #[must_use]
    pub const fn order_id(&self) -> &OrderId {
        &self.order_id
    }

    /// Returns the billing address
    #[must_use]
    pub const fn billing_address(&self) -> &Address {
        &self.billing_address
    }

    /// Returns the amount to bill
    #[must_use]
    pub const fn amount_to_bill(&self) -> BillingAmount {
        self.amount_to_bill
    }
}

// =============================================================================
// PlaceOrderEvent
// =============================================================================

/// One event emitted by a successful place-order run.
///
/// A run emits at most one event of each variant, in the order
/// acknowledgment, order placed, billable order placed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlaceOrderEvent {
    /// An acknowledgment letter went out
    AcknowledgmentSent(OrderAcknowledgmentSent),
    /// The order was placed; carries the full priced order
    OrderPlaced(OrderPlaced),
    /// The order has a positive amount to bill
    BillableOrderPlaced(BillableOrderPlaced),
}

impl PlaceOrderEvent {
    /// Returns `true` for an acknowledgment-sent event
    #[must_use]
    pub const fn is_acknowledgment_sent(&self) -> bool {
        matches!(self, Self::AcknowledgmentSent(_))
    }

    /// Returns `true` for an order-placed event
    #[must_use]
    pub const fn is_order_placed(&self) -> bool {
        matches!(self, Self::OrderPlaced(_))
    }

    /// Returns `true` for a billable-order-placed event
    #[must_use]
    pub const fn is_billable_order_placed(&self) -> bool {
        matches!(self, Self::BillableOrderPlaced(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compound_types::City;
    use crate::simple_types::String50;
    use crate::simple_types::ZipCode;
    use rstest::rstest;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn sample_billing_address() -> Address {
        Address::new(
            String50::create("Some Street".to_string()),
            None,
            None,
            None,
            City::new(String50::create("Los Angeles".to_string())),
            ZipCode::create("72456".to_string()),
        )
    }

    fn acknowledgment_sent() -> PlaceOrderEvent {
        PlaceOrderEvent::AcknowledgmentSent(OrderAcknowledgmentSent::new(
            OrderId::create("ORD1".to_string()),
            EmailAddress::create("john@doe.com".to_string()),
        ))
    }

    fn billable_order_placed() -> PlaceOrderEvent {
        PlaceOrderEvent::BillableOrderPlaced(BillableOrderPlaced::new(
            OrderId::create("ORD1".to_string()),
            sample_billing_address(),
            BillingAmount::create(Decimal::from_str("471.86").unwrap()),
        ))
    }

    #[rstest]
    fn test_acknowledgment_sent_getters() {
        let event = OrderAcknowledgmentSent::new(
            OrderId::create("ORD1".to_string()),
            EmailAddress::create("john@doe.com".to_string()),
        );

        assert_eq!(event.order_id().value(), "ORD1");
        assert_eq!(event.email_address().value(), "john@doe.com");
    }

    #[rstest]
    fn test_billable_order_placed_getters() {
        let event = BillableOrderPlaced::new(
            OrderId::create("ORD1".to_string()),
            sample_billing_address(),
            BillingAmount::create(Decimal::from_str("471.86").unwrap()),
        );

        assert_eq!(event.order_id().value(), "ORD1");
        assert_eq!(event.billing_address().zip_code().value(), "72456");
        assert_eq!(
            event.amount_to_bill().value(),
            Decimal::from_str("471.86").unwrap()
        );
    }

    #[rstest]
    fn test_event_predicates() {
        assert!(acknowledgment_sent().is_acknowledgment_sent());
        assert!(!acknowledgment_sent().is_order_placed());
        assert!(billable_order_placed().is_billable_order_placed());
        assert!(!billable_order_placed().is_acknowledgment_sent());
    }
}
