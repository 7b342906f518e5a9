//! Place-order workflow
//!
//! Ties the stages together: validate, price, acknowledge, emit events.
//!
//! The workflow owns its collaborators behind trait objects, so callers
//! construct it once with real or test implementations and run any
//! number of orders through it.
//!
//! # Stage errors
//!
//! - Validation reports every finding at once as
//!   [`PlaceOrderError::Validation`]
//! - Pricing stops at the first failure as [`PlaceOrderError::Pricing`]
//! - A failing remote collaborator aborts the run as
//!   [`PlaceOrderError::RemoteService`]
//! - Acknowledgment never fails the run; an unsent letter only drops
//!   the acknowledgment event

use std::sync::Arc;

use crate::workflow::acknowledgment::acknowledge_order;
use crate::workflow::dependencies::{
    CheckAddressExists, CheckProductCodeExists, CreateAcknowledgmentLetter, GetProductPrice,
    SendOrderAcknowledgment,
};
use crate::workflow::error_types::PlaceOrderError;
use crate::workflow::events::create_events;
use crate::workflow::output_types::PlaceOrderEvent;
use crate::workflow::pricing::price_order;
use crate::workflow::unvalidated_types::UnvalidatedOrder;
use crate::workflow::validation::validate_order;

// =============================================================================
// PlaceOrderWorkflow
// =============================================================================

/// The place-order workflow with its collaborators injected.
#[derive(Clone)]
pub struct PlaceOrderWorkflow {
    check_product_code_exists: Arc<dyn CheckProductCodeExists>,
    check_address_exists: Arc<dyn CheckAddressExists>,
    get_product_price: Arc<dyn GetProductPrice>,
    create_acknowledgment_letter: Arc<dyn CreateAcknowledgmentLetter>,
    send_order_acknowledgment: Arc<dyn SendOrderAcknowledgment>,
}

impl PlaceOrderWorkflow {
    /// Builds the workflow from its collaborators
    #[must_use]
    pub fn new(
        check_product_code_exists: Arc<dyn CheckProductCodeExists>,
        check_address_exists: Arc<dyn CheckAddressExists>,
        get_product_price: Arc<dyn GetProductPrice>,
        create_acknowledgment_letter: Arc<dyn CreateAcknowledgmentLetter>,
        send_order_acknowledgment: Arc<dyn SendOrderAcknowledgment>,
    ) -> Self {
        Self {
            check_product_code_exists,
            check_address_exists,
            get_product_price,
            create_acknowledgment_letter,
            send_order_acknowledgment,
        }
    }

    /// Runs the workflow for one order.
    ///
    /// On success, returns the events to publish, in the order
    /// acknowledgment, order placed, billable order placed.
    ///
    /// # Errors
    ///
    /// Returns a [`PlaceOrderError`] describing the failing stage.
    pub async fn place_order(
        &self,
        unvalidated_order: &UnvalidatedOrder,
    ) -> Result<Vec<PlaceOrderEvent>, PlaceOrderError> {
        let validated_order = validate_order(
            self.check_product_code_exists.as_ref(),
            self.check_address_exists.as_ref(),
            unvalidated_order,
        )
        .await?;

        let priced_order = price_order(self.get_product_price.as_ref(), &validated_order)?;

        let acknowledgment = acknowledge_order(
            self.create_acknowledgment_letter.as_ref(),
            self.send_order_acknowledgment.as_ref(),
            &priced_order,
        );

        let events = create_events(&priced_order, acknowledgment);
        tracing::info!(
            order_id = priced_order.order_id().value(),
            events = events.len(),
            "order placed"
        );
        Ok(events)
    }
}

// =============================================================================
// Tests
// =============================================================================
