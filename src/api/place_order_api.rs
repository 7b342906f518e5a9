//! Place-order API
//!
//! HTTP endpoint logic for the place-order workflow, independent of the
//! web framework.
//!
//! # Processing Flow
//!
//! 1. Deserialize the request body into [`OrderFormDto`]
//! 2. Convert the DTO to an `UnvalidatedOrder`
//! 3. Run the place-order workflow
//! 4. Store the priced order carried by the order placed event
//! 5. Serialize the events (200) or the error (400/502)

use std::sync::Arc;

use crate::api::dependencies::{
    PassThroughAddressCheck, ProductCatalog, create_acknowledgment_letter, send_acknowledgment,
};
use crate::api::store::{InMemoryOrderStore, OrderStore};
use crate::api::types::{HttpRequest, HttpResponse};
use crate::dto::{OrderFormDto, PlaceOrderErrorDto, PlaceOrderEventDto};
use crate::workflow::{PlaceOrderError, PlaceOrderEvent, PlaceOrderWorkflow};

// =============================================================================
// PlaceOrderApi
// =============================================================================

/// The place-order endpoint with its workflow and store injected
pub struct PlaceOrderApi {
    workflow: PlaceOrderWorkflow,
    order_store: Arc<dyn OrderStore>,
}

impl PlaceOrderApi {
    /// Builds the endpoint from a workflow and an order store
    #[must_use]
    pub fn new(workflow: PlaceOrderWorkflow, order_store: Arc<dyn OrderStore>) -> Self {
        Self {
            workflow,
            order_store,
        }
    }

    /// Builds the endpoint with the live dependencies
    ///
    /// Wires the demo product catalog, the pass-through address check,
    /// the HTML letter builder, the always-successful sender and an
    /// empty in-memory store.
    #[must_use]
    pub fn with_default_dependencies() -> Self {
        let catalog = Arc::new(ProductCatalog::with_default_products());
        let workflow = PlaceOrderWorkflow::new(
            catalog.clone(),
            Arc::new(PassThroughAddressCheck),
            catalog,
            Arc::new(create_acknowledgment_letter),
            Arc::new(send_acknowledgment),
        );
        Self::new(workflow, Arc::new(InMemoryOrderStore::new()))
    }

    /// Handles one place-order request
    ///
    /// # Status codes
    ///
    /// - 200 with the event list on success
    /// - 400 for undecodable JSON, validation errors and pricing errors
    /// - 502 when a remote collaborator fails
    pub async fn place_order(&self, request: &HttpRequest) -> HttpResponse {
        let order_form_dto: OrderFormDto = match serde_json::from_str(request.body()) {
            Ok(dto) => dto,
            Err(error) => {
                return create_json_parse_error_response(&error);
            }
        };

        let unvalidated_order = order_form_dto.to_unvalidated_order();

        match self.workflow.place_order(&unvalidated_order).await {
            Ok(events) => {
                self.store_placed_order(&events);
                create_success_response(&events)
            }
            Err(error) => {
                tracing::warn!(%error, "place order failed");
                create_error_response(&error)
            }
        }
    }

    fn store_placed_order(&self, events: &[PlaceOrderEvent]) {
        let placed = events.iter().find_map(|event| match event {
            PlaceOrderEvent::OrderPlaced(order) => Some(order),
            _ => None,
        });
        if let Some(order) = placed {
            self.order_store.store_order(order.clone());
        }
    }
}

/// Creates a success response
fn create_success_response(events: &[PlaceOrderEvent]) -> HttpResponse {
    let event_dtos = PlaceOrderEventDto::from_domain_list(events);
    serde_json::to_string(&event_dtos).map_or_else(
        |_| {
            HttpResponse::internal_server_error(
                r#"{"type":"SerializationError","message":"Failed to serialize response"}"#
                    .to_string(),
            )
        },
        HttpResponse::ok,
    )
}

/// Creates an error response
fn create_error_response(error: &PlaceOrderError) -> HttpResponse {
    let error_dto = PlaceOrderErrorDto::from_domain(error);
    let status_code = determine_error_status_code(error);
    serde_json::to_string(&error_dto).map_or_else(
        |_| {
            HttpResponse::internal_server_error(
                r#"{"type":"SerializationError","message":"Failed to serialize error"}"#
                    .to_string(),
            )
        },
        |json| HttpResponse::new(status_code, json),
    )
}

/// Creates a JSON parse error response
fn create_json_parse_error_response(error: &serde_json::Error) -> HttpResponse {
    let error_message = format!(
        r#"{{"type":"JsonParseError","message":"{}"}}"#,
        escape_json_string(&error.to_string())
    );
    HttpResponse::bad_request(error_message)
}

/// Determines the status code based on the error type
const fn determine_error_status_code(error: &PlaceOrderError) -> u16 {
    match error {
        PlaceOrderError::Validation(_) | PlaceOrderError::Pricing(_) => 400,
        PlaceOrderError::RemoteService(_) => 502,
    }
}

/// Escapes a string for JSON embedding
fn escape_json_string(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

// =============================================================================
// Tests
// =============================================================================
