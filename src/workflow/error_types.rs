//! Workflow error types
//!
//! Failures the place-order workflow can report, grouped by stage.
//!
//! # Types
//!
//! - [`PricingError`] - Pricing stage failure
//! - [`ServiceInfo`] - Identity of a remote collaborator
//! - [`RemoteServiceError`] - A remote collaborator could not be reached
//! - [`CheckAddressFailure`] - Outcome of a failed address check
//! - [`PlaceOrderError`] - The union of all workflow failures

use thiserror::Error;

use crate::simple_types::PropertyValidationError;

// =============================================================================
// PricingError
// =============================================================================

/// A failure raised while pricing an order.
///
/// # Examples
///
/// ```
/// use order_taking::workflow::PricingError;
///
/// let error = PricingError::new("The <11000.00> should be between <0.00> and <10000.00>");
/// assert!(error.message().contains("11000.00"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("Pricing error: {message}")]
pub struct PricingError {
    message: String,
}

impl PricingError {
    /// Creates a pricing error with the given message
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the error message
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

// =============================================================================
// ServiceInfo
// =============================================================================

/// Identifies the remote collaborator a failure originated from.
///
/// # Examples
///
/// ```
/// use order_taking::workflow::ServiceInfo;
///
/// let service = ServiceInfo::new(
///     "AddressCheckService".to_string(),
///     "https://addresses.example.com/check".to_string(),
/// );
/// assert_eq!(service.name(), "AddressCheckService");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ServiceInfo {
    name: String,
    endpoint: String,
}

impl ServiceInfo {
    /// Creates service information from a name and endpoint
    #[must_use]
    pub const fn new(name: String, endpoint: String) -> Self {
        Self { name, endpoint }
    }

    /// Returns the service name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the service endpoint
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

// =============================================================================
// RemoteServiceError
// =============================================================================

/// A remote collaborator failed in a way the workflow cannot recover from.
///
/// # Examples
///
/// ```
/// use order_taking::workflow::{RemoteServiceError, ServiceInfo};
///
/// let service = ServiceInfo::new(
///     "AddressCheckService".to_string(),
///     "https://addresses.example.com/check".to_string(),
/// );
/// let error = RemoteServiceError::new(service, "Connection timeout".to_string());
/// assert_eq!(error.exception_message(), "Connection timeout");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("Remote service error: {}: {}", self.service.name(), self.exception_message)]
pub struct RemoteServiceError {
    service: ServiceInfo,
    exception_message: String,
}

impl RemoteServiceError {
    /// Creates a remote service error from the failing service and a message
    #[must_use]
    pub const fn new(service: ServiceInfo, exception_message: String) -> Self {
        Self {
            service,
            exception_message,
        }
    }

    /// Returns the failing service
    #[must_use]
    pub const fn service(&self) -> &ServiceInfo {
        &self.service
    }

    /// Returns the underlying failure message
    #[must_use]
    pub fn exception_message(&self) -> &str {
        &self.exception_message
    }
}

// =============================================================================
// CheckAddressFailure
// =============================================================================

/// Outcome of an address check that did not confirm the address.
///
/// `NotFound` and `InvalidFormat` are verdicts about the submitted
/// address and turn into validation errors on the address property.
/// `Remote` means the service itself failed and aborts the workflow.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CheckAddressFailure {
    /// The service could not find the address
    #[error("Address not found")]
    NotFound,

    /// The service rejected the address as malformed
    #[error("Address has bad format")]
    InvalidFormat,

    /// The service itself failed
    #[error(transparent)]
    Remote(#[from] RemoteServiceError),
}

impl CheckAddressFailure {
    /// Returns `true` when the address was not found
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    /// Returns `true` when the address was malformed
    #[must_use]
    pub const fn is_invalid_format(&self) -> bool {
        matches!(self, Self::InvalidFormat)
    }

    /// Returns `true` when the service itself failed
    #[must_use]
    pub const fn is_remote(&self) -> bool {
        matches!(self, Self::Remote(_))
    }
}

// =============================================================================
// PlaceOrderError
// =============================================================================

fn join_path_errors(errors: &[PropertyValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// The union of all failures the place-order workflow can report.
///
/// Validation carries every accumulated error; the other stages fail on
/// the first problem they meet.
///
/// # Examples
///
/// ```
/// use order_taking::workflow::{PlaceOrderError, PricingError};
///
/// let error: PlaceOrderError = PricingError::new("no price for W9999").into();
/// assert!(error.is_pricing());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PlaceOrderError {
    /// The order failed validation; all findings are reported together
    #[error("Validation error: {}", join_path_errors(.0))]
    Validation(Vec<PropertyValidationError>),

    /// Pricing failed
    #[error(transparent)]
    Pricing(PricingError),

    /// A remote collaborator failed
    #[error(transparent)]
    RemoteService(RemoteServiceError),
}

impl PlaceOrderError {
    /// Wraps accumulated validation errors
    #[must_use]
    pub const fn validation(errors: Vec<PropertyValidationError>) -> Self {
        Self::Validation(errors)
    }

    /// Wraps a pricing error
    #[must_use]
    pub const fn pricing(error: PricingError) -> Self {
        Self::Pricing(error)
    }

    /// Wraps a remote service error
    #[must_use]
    pub const fn remote_service(error: RemoteServiceError) -> Self {
        Self::RemoteService(error)
    }

    /// Returns `true` for a validation failure
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns `true` for a pricing failure
    #[must_use]
    pub const fn is_pricing(&self) -> bool {
        matches!(self, Self::Pricing(_))
    }

    /// Returns `true` for a remote service failure
    #[must_use]
    pub const fn is_remote_service(&self) -> bool {
        matches!(self, Self::RemoteService(_))
    }
}

impl From<Vec<PropertyValidationError>> for PlaceOrderError {
    fn from(errors: Vec<PropertyValidationError>) -> Self {
        Self::Validation(errors)
    }
}

impl From<PricingError> for PlaceOrderError {
    fn from(error: PricingError) -> Self {
        Self::Pricing(error)
    }
}

impl From<RemoteServiceError> for PlaceOrderError {
    fn from(error: RemoteServiceError) -> Self {
        Self::RemoteService(error)
    }
}

// =============================================================================
// Tests
// =============================================================================
