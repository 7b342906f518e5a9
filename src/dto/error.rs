//! Error DTOs
//!
//! Defines types for serializing API response errors.
//!
//! # Type list
//!
//! - [`PropertyValidationErrorDto`] - One validation finding with its path
//! - [`PlaceOrderErrorDto`] - Workflow error DTO

use serde::{Deserialize, Serialize};

use crate::simple_types::PropertyValidationError;
use crate::workflow::{PlaceOrderError, PricingError, RemoteServiceError};

// =============================================================================
// PropertyValidationErrorDto
// =============================================================================

/// One validation finding, addressed by its property path
///
/// The path joins the property segments with dots, list elements carry
/// their index ("lines[2].quantity").
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyValidationErrorDto {
    /// Property path ("customerInfo.firstName")
    pub path: String,
    /// Error message
    pub message: String,
}

impl PropertyValidationErrorDto {
    /// Creates a `PropertyValidationErrorDto` from the domain error
    #[must_use]
    pub fn from_domain(error: &PropertyValidationError) -> Self {
        Self {
            path: error.path_string(),
            message: error.message().to_string(),
        }
    }
}

// =============================================================================
// PlaceOrderErrorDto
// =============================================================================

/// Place-order workflow error DTO
///
/// A type for serializing errors that occurred in the workflow.
/// Internally tagged format discriminated by the `type` field.
///
/// # Examples
///
/// ```
/// use order_taking::dto::PlaceOrderErrorDto;
/// use order_taking::workflow::{PlaceOrderError, PricingError};
///
/// let error = PlaceOrderError::Pricing(PricingError::new("Product not found"));
/// let dto = PlaceOrderErrorDto::from_domain(&error);
///
/// match dto {
///     PlaceOrderErrorDto::Pricing { message } => {
///         assert_eq!(message, "Product not found");
///     }
///     _ => panic!("Expected Pricing error"),
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlaceOrderErrorDto {
    /// Validation errors, all findings at once
    Validation {
        /// The accumulated findings in declaration order
        errors: Vec<PropertyValidationErrorDto>,
    },
    /// Pricing error
    Pricing {
        /// Error message
        message: String,
    },
    /// Remote service error
    RemoteService {
        /// Service name
        #[serde(rename = "serviceName")]
        service_name: String,
        /// Service endpoint
        #[serde(rename = "serviceEndpoint")]
        service_endpoint: String,
        /// Error message
        message: String,
    },
}

impl PlaceOrderErrorDto {
    /// Creates a `PlaceOrderErrorDto` from the domain `PlaceOrderError`
    ///
    /// Converts to DTO as a pure function.
    ///
    /// # Examples
    ///
    /// ```
    /// use order_taking::dto::PlaceOrderErrorDto;
    /// use order_taking::workflow::{PlaceOrderError, PricingError};
    ///
    /// let error = PlaceOrderError::Pricing(PricingError::new("Product not found"));
    /// let dto = PlaceOrderErrorDto::from_domain(&error);
    ///
    /// let json = serde_json::to_string(&dto).unwrap();
    /// assert!(json.contains("\"type\":\"Pricing\""));
    /// ```
    #[must_use]
    pub fn from_domain(error: &PlaceOrderError) -> Self {
        match error {
            PlaceOrderError::Validation(errors) => Self::from_validation_errors(errors),
            PlaceOrderError::Pricing(e) => Self::from_pricing_error(e),
            PlaceOrderError::RemoteService(e) => Self::from_remote_service_error(e),
        }
    }

    fn from_validation_errors(errors: &[PropertyValidationError]) -> Self {
        Self::Validation {
            errors: errors
                .iter()
                .map(PropertyValidationErrorDto::from_domain)
                .collect(),
        }
    }

    fn from_pricing_error(error: &PricingError) -> Self {
        Self::Pricing {
            message: error.message().to_string(),
        }
    }

    fn from_remote_service_error(error: &RemoteServiceError) -> Self {
        Self::RemoteService {
            service_name: error.service().name().to_string(),
            service_endpoint: error.service().endpoint().to_string(),
            message: error.exception_message().to_string(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
