//! DTO (Data Transfer Object) module
//!
//! Defines the serializable types used at the API boundary and the
//! conversion functions between them and the domain types.
//!
//! # Module Structure
//!
//! - [`input`] - Input DTOs (`OrderFormDto` and friends)
//! - [`output`] - Output DTOs (`PlaceOrderEventDto` and friends)
//! - [`error`] - Error DTOs (`PlaceOrderErrorDto`)
//!
//! # Design principles
//!
//! - Every DTO implements `Serialize` and `Deserialize`
//! - Conversions to and from domain types are pure functions
//! - Field names serialize in camelCase
//! - Decimals serialize as strings to preserve precision

pub mod error;
pub mod input;
pub mod output;

// Re-exports
pub use error::{PlaceOrderErrorDto, PropertyValidationErrorDto};
pub use input::{AddressDto, CustomerInfoDto, OrderFormDto, OrderFormLineDto};
pub use output::{
    BillableOrderPlacedDto, OrderAcknowledgmentSentDto, OrderPlacedDto, PlaceOrderEventDto,
    PricedOrderLineDto,
};
