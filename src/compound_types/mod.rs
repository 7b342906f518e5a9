//! Compound domain types
//!
//! Records assembled from validated constrained types. These are plain
//! immutable data; the path-tagged validation that produces them lives in
//! `workflow::validation`.
//!
//! # Module Structure
//!
//! - [`personal_name`] - `PersonalName`
//! - [`customer_info`] - `CustomerInfo`
//! - [`address`] - `City`, `Address`

pub mod address;
pub mod customer_info;
pub mod personal_name;

// =============================================================================
// Type re-exports
// =============================================================================

pub use address::{Address, City};
pub use customer_info::CustomerInfo;
pub use personal_name::PersonalName;
