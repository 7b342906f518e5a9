//! Address types
//!
//! Defines `City` and `Address`, the validated postal address of an order.

use crate::simple_types::{String50, ValidationError, ZipCode};

// =============================================================================
// City
// =============================================================================

/// A city name, 1 to 50 characters.
///
/// # Examples
///
/// ```
/// use order_taking::compound_types::City;
///
/// let city = City::validate("Los Angeles".to_string()).unwrap();
/// assert_eq!(city.value(), "Los Angeles");
///
/// assert!(City::validate(String::new()).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct City(String50);

impl City {
    /// Validates a city name.
    ///
    /// # Errors
    ///
    /// Returns a length error when the name is empty or longer than 50
    /// characters.
    pub fn validate(value: String) -> Result<Self, Vec<ValidationError>> {
        String50::validate(value).map(Self)
    }

    /// Builds a `City` from an already validated name
    #[must_use]
    pub const fn new(value: String50) -> Self {
        Self(value)
    }

    /// Returns the city name
    #[must_use]
    pub fn value(&self) -> &str {
        self.0.value()
    }
}

// =============================================================================
// Address
// =============================================================================

/// A validated postal address.
///
/// The first address line is required; lines two to four are optional. Every
/// present line is bounded to 50 characters, and the zip code to five digits.
///
/// # Examples
///
/// ```
/// use order_taking::compound_types::{Address, City};
/// use order_taking::simple_types::{String50, ZipCode};
///
/// let address = Address::new(
///     String50::create("Some Street".to_string()),
///     None,
///     None,
///     None,
///     City::validate("Los Angeles".to_string()).unwrap(),
///     ZipCode::create("12456".to_string()),
/// );
/// assert_eq!(address.city().value(), "Los Angeles");
/// assert!(address.address_line2().is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Address {
    address_line1: String50,
    address_line2: Option<String50>,
    address_line3: Option<String50>,
    address_line4: Option<String50>,
    city: City,
    zip_code: ZipCode,
}

impl Address {
    /// Builds an `Address` from validated parts
    #[must_use]
    pub const fn new(
        address_line1: String50,
        address_line2: Option<String50>,
        address_line3: Option<String50>,
        address_line4: Option<String50>,
        city: City,
        zip_code: ZipCode,
    ) -> Self {
        Self {
            address_line1,
            address_line2,
            address_line3,
            address_line4,
            city,
            zip_code,
        }
    }

    /// Returns the required first address line
    #[must_use]
    pub const fn address_line1(&self) -> &String50 {
        &self.address_line1
    }

    /// Returns the optional second address line
    #[must_use]
    pub const fn address_line2(&self) -> Option<&String50> {
        self.address_line2.as_ref()
    }

    /// Returns the optional third address line
    #[must_use]
    pub const fn address_line3(&self) -> Option<&String50> {
        self.address_line3.as_ref()
    }

    /// Returns the optional fourth address line
    #[must_use]
    pub const fn address_line4(&self) -> Option<&String50> {
        self.address_line4.as_ref()
    }

    /// Returns the city
    #[must_use]
    pub const fn city(&self) -> &City {
        &self.city
    }

    /// Returns the zip code
    #[must_use]
    pub const fn zip_code(&self) -> &ZipCode {
        &self.zip_code
    }
}
