//! API module
//!
//! Defines the functions and types serving as the HTTP entry point.
//!
//! # Module Structure
//!
//! - [`types`] - HTTP request/response types
//! - [`dependencies`] - Live collaborator implementations
//! - [`store`] - Order storage
//! - [`place_order_api`] - Place-order endpoint
//! - [`axum_handler`] - Handler for the axum framework
//!
//! # Design Principles
//!
//! - The endpoint works on framework-independent request/response types
//! - Collaborators are injected through the workflow (for testability)
//! - DTO-to-domain conversions are pure functions

pub mod axum_handler;
pub mod dependencies;
pub mod place_order_api;
pub mod store;
pub mod types;

// Re-exports
pub use dependencies::{
    PassThroughAddressCheck, ProductCatalog, create_acknowledgment_letter, send_acknowledgment,
};
pub use place_order_api::PlaceOrderApi;
pub use store::{InMemoryOrderStore, OrderStore};
pub use types::{HttpRequest, HttpResponse};
