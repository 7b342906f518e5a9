//! Constrained value types
//!
//! Every primitive business value in the domain is wrapped in a type that can
//! only be constructed through validation. `validate` returns all failed
//! checks; `create` panics and is reserved for input already known valid,
//! such as test fixtures.
//!
//! # Module Structure
//!
//! - [`constrained_type`] - Shared check helpers
//! - [`error`] - Validation error and property path types
//! - [`validation`] - Accumulating combination of validated fields
//! - [`string_types`] - `String50`, `EmailAddress`, `ZipCode`
//! - [`identifier_types`] - `OrderId`, `OrderLineId`
//! - [`product_types`] - `WidgetCode`, `GizmoCode`, `ProductCode`
//! - [`quantity_types`] - `UnitQuantity`, `KilogramQuantity`, `OrderQuantity`
//! - [`price_types`] - `Price`, `BillingAmount`

pub mod constrained_type;
pub mod error;
pub mod identifier_types;
pub mod price_types;
pub mod product_types;
pub mod quantity_types;
pub mod string_types;
pub mod validation;

// =============================================================================
// Type re-exports
// =============================================================================

pub use error::{Property, PropertyValidationError, ValidationError, join_messages};
pub use identifier_types::{OrderId, OrderLineId};
pub use price_types::{BillingAmount, Price};
pub use product_types::{GizmoCode, ProductCode, WidgetCode};
pub use quantity_types::{KilogramQuantity, OrderQuantity, UnitQuantity};
pub use string_types::{EmailAddress, String50, ZipCode};
pub use validation::{
    assign_all, collect_all, distinct, prepend_all, zip2, zip3, zip4, zip5, zip6,
};
