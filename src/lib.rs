//! # Order Taking
//!
//! An order-taking service built around a typed place-order workflow.
//!
//! ## Overview
//!
//! Orders arrive as raw, untrusted data and move through validation,
//! pricing and acknowledgment into a list of events. Every constraint
//! lives in a dedicated type, so an order that reaches the later stages
//! has already proven itself.
//!
//! ## Module Structure
//!
//! - `simple_types`: Constrained primitive types (`String50`, `EmailAddress`, `OrderId`, etc.)
//! - `compound_types`: Compound types (`PersonalName`, `CustomerInfo`, `Address`)
//! - `workflow`: The place-order workflow (state transitions expressed via types)
//! - `dto`: Serializable types at the API boundary
//! - `api`: HTTP entry point, live dependencies and order storage

#![forbid(unsafe_code)]

pub mod api;
pub mod compound_types;
pub mod dto;
pub mod simple_types;
pub mod workflow;
