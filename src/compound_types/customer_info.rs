//! Customer information
//!
//! Defines `CustomerInfo`, the validated customer details of an order.

use crate::simple_types::EmailAddress;

use super::personal_name::PersonalName;

/// Validated customer details: a name and an email address.
///
/// # Examples
///
/// ```
/// use order_taking::compound_types::{CustomerInfo, PersonalName};
/// use order_taking::simple_types::{EmailAddress, String50};
///
/// let info = CustomerInfo::new(
///     PersonalName::new(
///         String50::create("John".to_string()),
///         String50::create("Doe".to_string()),
///     ),
///     EmailAddress::create("john@doe.com".to_string()),
/// );
/// assert_eq!(info.email_address().value(), "john@doe.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CustomerInfo {
    name: PersonalName,
    email_address: EmailAddress,
}

impl CustomerInfo {
    /// Builds a `CustomerInfo` from validated parts
    #[must_use]
    pub const fn new(name: PersonalName, email_address: EmailAddress) -> Self {
        Self {
            name,
            email_address,
        }
    }

    /// Returns the customer's name
    #[must_use]
    pub const fn name(&self) -> &PersonalName {
        &self.name
    }

    /// Returns the customer's email address
    #[must_use]
    pub const fn email_address(&self) -> &EmailAddress {
        &self.email_address
    }
}
