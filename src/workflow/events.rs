//! Event creation
//!
//! Builds the [`PlaceOrderEvent`] list a successful workflow run emits.
//! All functions here are pure.
//!
//! # Functions
//!
//! - [`create_billing_event`] - Billing event, only when money is owed
//! - [`create_events`] - The full event list

use rust_decimal::Decimal;

use crate::workflow::output_types::{
    BillableOrderPlaced, OrderAcknowledgmentSent, PlaceOrderEvent,
};
use crate::workflow::priced_types::PricedOrder;

// =============================================================================
// create_billing_event
// =============================================================================

/// Builds the billing event when the order has a positive amount to bill.
///
/// Nothing is owed for a zero amount, so no event is produced.
#[must_use]
pub fn create_billing_event(priced_order: &PricedOrder) -> Option<BillableOrderPlaced> {
    if priced_order.amount_to_bill().value() > Decimal::ZERO {
        Some(BillableOrderPlaced::new(
            priced_order.order_id().clone(),
            priced_order.billing_address().clone(),
            priced_order.amount_to_bill(),
        ))
    } else {
        None
    }
}

// =============================================================================
// create_events
// =============================================================================

/// Assembles the events of a successful run.
///
/// Event order:
/// 1. `AcknowledgmentSent` when the letter went out
/// 2. `OrderPlaced` always
/// 3. `BillableOrderPlaced` when the amount to bill is positive
#[must_use]
pub fn create_events(
    priced_order: &PricedOrder,
    acknowledgment_event: Option<OrderAcknowledgmentSent>,
) -> Vec<PlaceOrderEvent> {
    let mut events = Vec::with_capacity(3);

    if let Some(acknowledgment) = acknowledgment_event {
        events.push(PlaceOrderEvent::AcknowledgmentSent(acknowledgment));
    }

    events.push(PlaceOrderEvent::OrderPlaced(priced_order.clone()));

    if let Some(billing) = create_billing_event(priced_order) {
        events.push(PlaceOrderEvent::BillableOrderPlaced(billing));
    }

    events
}

// =============================================================================
// Tests
// =============================================================================
