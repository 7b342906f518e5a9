//! Constrained string types
//!
//! Defines `String50`, `EmailAddress`, and `ZipCode`.

use regex::Regex;
use std::sync::LazyLock;

use super::constrained_type;
use super::error::{ValidationError, join_messages};

// =============================================================================
// String50
// =============================================================================

/// A string of 1 to 50 characters.
///
/// Used for names, address lines, and cities.
///
/// # Examples
///
/// ```
/// use order_taking::simple_types::String50;
///
/// let name = String50::validate("John".to_string()).unwrap();
/// assert_eq!(name.value(), "John");
///
/// assert!(String50::validate(String::new()).is_err());
/// assert!(String50::validate("x".repeat(51)).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct String50(String);

/// Length bounds for `String50`
const STRING50_MIN_LENGTH: usize = 1;
const STRING50_MAX_LENGTH: usize = 50;

impl String50 {
    /// Validates a string of 1 to 50 characters.
    ///
    /// # Errors
    ///
    /// Returns a length error when the string is empty or longer than 50
    /// characters.
    pub fn validate(value: String) -> Result<Self, Vec<ValidationError>> {
        constrained_type::check_string_length(STRING50_MIN_LENGTH, STRING50_MAX_LENGTH, &value)
            .map(|()| Self(value))
            .map_err(|error| vec![error])
    }

    /// Validates an optional string: absent is valid, present must have 1 to
    /// 50 characters.
    ///
    /// # Errors
    ///
    /// Returns a length error when a present value falls outside the bounds.
    pub fn validate_option(value: Option<String>) -> Result<Option<Self>, Vec<ValidationError>> {
        constrained_type::check_optional_string_length(
            STRING50_MIN_LENGTH,
            STRING50_MAX_LENGTH,
            value.as_deref(),
        )
        .map(|()| value.map(Self))
        .map_err(|error| vec![error])
    }

    /// Creates a `String50` from a value already known to be valid.
    ///
    /// # Panics
    ///
    /// Panics when the value violates the length bounds.
    #[must_use]
    pub fn create(value: String) -> Self {
        Self::validate(value).unwrap_or_else(|errors| {
            panic!(
                "Not expecting String50 to be invalid: {}",
                join_messages(&errors)
            )
        })
    }

    /// Returns the inner string
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// EmailAddress
// =============================================================================

/// Regex pattern for `EmailAddress`
static EMAIL_ADDRESS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^.+@.+$").expect("Invalid email address regex pattern"));

/// An email address.
///
/// Constrained to contain an `@` with text on both sides; no further
/// structure is enforced.
///
/// # Examples
///
/// ```
/// use order_taking::simple_types::EmailAddress;
///
/// let email = EmailAddress::validate("john@doe.com".to_string()).unwrap();
/// assert_eq!(email.value(), "john@doe.com");
///
/// assert!(EmailAddress::validate("john.doe.com".to_string()).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validates an email address.
    ///
    /// # Errors
    ///
    /// Returns a pattern error embedding the offending value when the string
    /// does not match `.+@.+`.
    pub fn validate(value: String) -> Result<Self, Vec<ValidationError>> {
        constrained_type::check_pattern(&EMAIL_ADDRESS_PATTERN, &value)
            .map(|()| Self(value))
            .map_err(|error| vec![error])
    }

    /// Creates an `EmailAddress` from a value already known to be valid.
    ///
    /// # Panics
    ///
    /// Panics when the value does not match the email pattern.
    #[must_use]
    pub fn create(value: String) -> Self {
        Self::validate(value).unwrap_or_else(|errors| {
            panic!(
                "Not expecting EmailAddress to be invalid: {}",
                join_messages(&errors)
            )
        })
    }

    /// Returns the inner string
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// ZipCode
// =============================================================================

/// Regex pattern for `ZipCode`
static ZIP_CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{5}$").expect("Invalid zip code regex pattern"));

/// A US zip code of exactly five digits.
///
/// # Examples
///
/// ```
/// use order_taking::simple_types::ZipCode;
///
/// let zip = ZipCode::validate("12345".to_string()).unwrap();
/// assert_eq!(zip.value(), "12345");
///
/// assert!(ZipCode::validate("1234".to_string()).is_err());
/// assert!(ZipCode::validate("12a45".to_string()).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ZipCode(String);

impl ZipCode {
    /// Validates a five digit zip code.
    ///
    /// # Errors
    ///
    /// Returns a pattern error embedding the offending value when the string
    /// is not exactly five digits.
    pub fn validate(value: String) -> Result<Self, Vec<ValidationError>> {
        constrained_type::check_pattern(&ZIP_CODE_PATTERN, &value)
            .map(|()| Self(value))
            .map_err(|error| vec![error])
    }

    /// Creates a `ZipCode` from a value already known to be valid.
    ///
    /// # Panics
    ///
    /// Panics when the value is not exactly five digits.
    #[must_use]
    pub fn create(value: String) -> Self {
        Self::validate(value).unwrap_or_else(|errors| {
            panic!(
                "Not expecting ZipCode to be invalid: {}",
                join_messages(&errors)
            )
        })
    }

    /// Returns the inner string
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}
