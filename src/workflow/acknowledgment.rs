//! Order acknowledgment
//!
//! Renders the acknowledgment letter for a priced order and hands it to
//! the sending service. Sending is best effort: a letter that does not
//! go out never fails the workflow, it only means no acknowledgment
//! event is emitted.

use crate::workflow::acknowledgment_types::{OrderAcknowledgment, SendResult};
use crate::workflow::dependencies::{CreateAcknowledgmentLetter, SendOrderAcknowledgment};
use crate::workflow::output_types::OrderAcknowledgmentSent;
use crate::workflow::priced_types::PricedOrder;

// =============================================================================
// acknowledge_order
// =============================================================================

/// Sends the acknowledgment letter for a priced order.
///
/// Returns the event to emit when the letter went out, `None` otherwise.
#[must_use]
pub fn acknowledge_order<CreateLetter, SendAcknowledgment>(
    create_acknowledgment_letter: &CreateLetter,
    send_order_acknowledgment: &SendAcknowledgment,
    priced_order: &PricedOrder,
) -> Option<OrderAcknowledgmentSent>
where
    CreateLetter: CreateAcknowledgmentLetter + ?Sized,
    SendAcknowledgment: SendOrderAcknowledgment + ?Sized,
{
    let letter = create_acknowledgment_letter.create(priced_order);
    let acknowledgment = OrderAcknowledgment::new(
        priced_order.customer_info().email_address().clone(),
        letter,
    );

    match send_order_acknowledgment.send(&acknowledgment) {
        SendResult::Sent => Some(OrderAcknowledgmentSent::new(
            priced_order.order_id().clone(),
            acknowledgment.email_address().clone(),
        )),
        SendResult::NotSent => None,
    }
}

// =============================================================================
// Tests
// =============================================================================
