//! Workflow type definition module
//!
//! Defines the types and stages of the place-order workflow.
//! Expresses state transitions via types, preventing invalid states at the type level.
//!
//! # State Transition Diagram
//!
//! ```text
//! UnvalidatedOrder -> ValidatedOrder -> PricedOrder -> PlaceOrderEvent[]
//! ```
//!
//! # Module Structure
//!
//! - [`error_types`] - Error types (validation, pricing, remote service)
//! - [`dependencies`] - Collaborator traits injected into the workflow
//! - [`unvalidated_types`] - Unvalidated input types
//! - [`validated_types`] - Validated types
//! - [`priced_types`] - Priced types
//! - [`acknowledgment_types`] - Acknowledgment email types
//! - [`output_types`] - Output event types
//! - [`validation`] - Validation stage
//! - [`pricing`] - Pricing stage
//! - [`acknowledgment`] - Acknowledgment stage
//! - [`events`] - Event generation functions
//! - [`place_order`] - Workflow orchestration

pub mod acknowledgment;
pub mod acknowledgment_types;
pub mod dependencies;
pub mod error_types;
pub mod events;
pub mod output_types;
pub mod place_order;
pub mod priced_types;
pub mod pricing;
pub mod unvalidated_types;
pub mod validated_types;
pub mod validation;

// =============================================================================
// Type re-exports
// =============================================================================

pub use acknowledgment::acknowledge_order;
pub use acknowledgment_types::{HtmlString, OrderAcknowledgment, SendResult};
pub use dependencies::{
    CheckAddressExists, CheckProductCodeExists, CreateAcknowledgmentLetter, GetProductPrice,
    SendOrderAcknowledgment,
};
pub use error_types::{
    CheckAddressFailure, PlaceOrderError, PricingError, RemoteServiceError, ServiceInfo,
};
pub use events::{create_billing_event, create_events};
pub use output_types::{
    BillableOrderPlaced, OrderAcknowledgmentSent, OrderPlaced, PlaceOrderEvent,
};
pub use place_order::PlaceOrderWorkflow;
pub use priced_types::{PricedOrder, PricedOrderLine};
pub use pricing::price_order;
pub use unvalidated_types::{
    UnvalidatedAddress, UnvalidatedCustomerInfo, UnvalidatedOrder, UnvalidatedOrderLine,
};
pub use validated_types::{CheckedAddress, ValidatedOrder, ValidatedOrderLine};
pub use validation::validate_order;
