//! Personal name
//!
//! Defines `PersonalName`, a validated first and last name pair.

use crate::simple_types::String50;

/// A customer's name, both parts validated to 1 to 50 characters.
///
/// # Examples
///
/// ```
/// use order_taking::compound_types::PersonalName;
/// use order_taking::simple_types::String50;
///
/// let name = PersonalName::new(
///     String50::create("John".to_string()),
///     String50::create("Doe".to_string()),
/// );
/// assert_eq!(name.first_name().value(), "John");
/// assert_eq!(name.last_name().value(), "Doe");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PersonalName {
    first_name: String50,
    last_name: String50,
}

impl PersonalName {
    /// Builds a `PersonalName` from validated parts
    #[must_use]
    pub const fn new(first_name: String50, last_name: String50) -> Self {
        Self {
            first_name,
            last_name,
        }
    }

    /// Returns the first name
    #[must_use]
    pub const fn first_name(&self) -> &String50 {
        &self.first_name
    }

    /// Returns the last name
    #[must_use]
    pub const fn last_name(&self) -> &String50 {
        &self.last_name
    }
}
