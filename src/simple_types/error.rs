//! Validation error types
//!
//! Defines the error values produced by constrained-type validation and the
//! property-path machinery used to report where in a nested structure a
//! failure occurred.
//!
//! # Types
//!
//! - [`ValidationError`] - A single failed check, message only
//! - [`Property`] - One segment of a property path
//! - [`PropertyValidationError`] - A failed check tagged with its path

use thiserror::Error;

// =============================================================================
// ValidationError
// =============================================================================

/// A single validation failure.
///
/// Produced by the check helpers in `constrained_type` and by the `validate`
/// constructors of every constrained type. The message embeds the offending
/// value and the rule it violated; it is not yet tied to any field. Use
/// [`ValidationError::assign`] to attach the field once it is known.
///
/// # Examples
///
/// ```
/// use order_taking::simple_types::ValidationError;
///
/// let error = ValidationError::new("The <0> should be between <1> and <1000>");
/// assert_eq!(error.to_string(), "The <0> should be between <1> and <1000>");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Description of the failed check
    pub message: String,
}

impl ValidationError {
    /// Creates a new `ValidationError`
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Attaches the property this failure belongs to, producing a
    /// [`PropertyValidationError`] whose path consists of that single segment.
    ///
    /// # Examples
    ///
    /// ```
    /// use order_taking::simple_types::{Property, ValidationError};
    ///
    /// let error = ValidationError::new("'x' must match the pattern '^\\d{5}$'");
    /// let assigned = error.assign(Property::new("zipCode"));
    /// assert_eq!(assigned.to_string(), "zipCode: 'x' must match the pattern '^\\d{5}$'");
    /// ```
    #[must_use]
    pub fn assign(self, property: Property) -> PropertyValidationError {
        PropertyValidationError {
            path: vec![property],
            message: self.message,
        }
    }
}

/// Joins the messages of several errors into one string, comma separated.
///
/// Used where a list of field-level failures must collapse into a single
/// message, e.g. when a pricing re-validation fails.
#[must_use]
pub fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|error| error.message.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

// =============================================================================
// Property
// =============================================================================

/// One segment of a property path: a field name such as `zipCode`, or an
/// indexed field such as `lines[0]`.
///
/// # Examples
///
/// ```
/// use order_taking::simple_types::Property;
///
/// assert_eq!(Property::new("orderId").name(), "orderId");
/// assert_eq!(Property::indexed("lines", 2).name(), "lines[2]");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Property(String);

impl Property {
    /// Creates a path segment from a field name
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Creates an indexed path segment, `name[index]`
    #[must_use]
    pub fn indexed(name: &str, index: usize) -> Self {
        Self(format!("{name}[{index}]"))
    }

    /// Returns the segment text
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// PropertyValidationError
// =============================================================================

/// A validation failure located by a property path.
///
/// The path is an ordered, never-empty sequence of [`Property`] segments from
/// the outermost structure down to the failing field. It starts as a single
/// segment (see [`ValidationError::assign`]) and grows outward-first via
/// [`PropertyValidationError::prepend`] as the error bubbles up through
/// enclosing structures, e.g. `zipCode` becomes `shippingAddress.zipCode`.
///
/// # Examples
///
/// ```
/// use order_taking::simple_types::{Property, PropertyValidationError};
///
/// let error = PropertyValidationError::new(Property::new("zipCode"), "bad zip")
///     .prepend(Property::new("shippingAddress"));
/// assert_eq!(error.path_string(), "shippingAddress.zipCode");
/// assert_eq!(error.to_string(), "shippingAddress.zipCode: bad zip");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
#[error("{}: {}", self.path_string(), self.message)]
pub struct PropertyValidationError {
    path: Vec<Property>,
    message: String,
}

impl PropertyValidationError {
    /// Creates an error located at a single-segment path
    #[must_use]
    pub fn new(property: Property, message: impl Into<String>) -> Self {
        Self {
            path: vec![property],
            message: message.into(),
        }
    }

    /// Extends the path by prepending an enclosing field name
    #[must_use]
    pub fn prepend(mut self, property: Property) -> Self {
        self.path.insert(0, property);
        self
    }

    /// Returns the path segments, outermost first
    #[must_use]
    pub fn path(&self) -> &[Property] {
        &self.path
    }

    /// Returns the failure message
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Renders the path with `.` between segments, e.g. `lines[0].quantity`
    #[must_use]
    pub fn path_string(&self) -> String {
        self.path
            .iter()
            .map(Property::name)
            .collect::<Vec<_>>()
            .join(".")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    mod validation_error_tests {
        use super::*;

        #[rstest]
        fn test_new_and_display() {
            let error = ValidationError::new("The <1001> should be between <1> and <1000>");

            assert_eq!(error.message, "The <1001> should be between <1> and <1000>");
            assert_eq!(error.to_string(), "The <1001> should be between <1> and <1000>");
        }

        #[rstest]
        fn test_error_trait() {
            let error = ValidationError::new("broken");

            let _: &dyn std::error::Error = &error;
        }

        #[rstest]
        fn test_assign_produces_single_segment_path() {
            let assigned = ValidationError::new("broken").assign(Property::new("orderId"));

            assert_eq!(assigned.path(), &[Property::new("orderId")]);
            assert_eq!(assigned.message(), "broken");
        }

        #[rstest]
        fn test_join_messages() {
            let errors = vec![ValidationError::new("first"), ValidationError::new("second")];

            assert_eq!(join_messages(&errors), "first, second");
        }
    }

    mod property_tests {
        use super::*;

        #[rstest]
        #[case("orderId", "orderId")]
        #[case("zipCode", "zipCode")]
        fn test_new(#[case] name: &str, #[case] expected: &str) {
            assert_eq!(Property::new(name).name(), expected);
        }

        #[rstest]
        #[case(0, "lines[0]")]
        #[case(12, "lines[12]")]
        fn test_indexed(#[case] index: usize, #[case] expected: &str) {
            assert_eq!(Property::indexed("lines", index).name(), expected);
        }
    }

    mod property_validation_error_tests {
        use super::*;

        #[rstest]
        fn test_single_segment_path_string() {
            let error = PropertyValidationError::new(Property::new("city"), "too long");

            assert_eq!(error.path_string(), "city");
            assert_eq!(error.to_string(), "city: too long");
        }

        #[rstest]
        fn test_prepend_extends_path_outward() {
            let error = PropertyValidationError::new(Property::new("zipCode"), "bad zip")
                .prepend(Property::new("billingAddress"));

            assert_eq!(error.path_string(), "billingAddress.zipCode");
        }

        #[rstest]
        fn test_prepend_indexed_segment() {
            let error = PropertyValidationError::new(Property::new("quantity"), "out of range")
                .prepend(Property::indexed("lines", 3));

            assert_eq!(error.path_string(), "lines[3].quantity");
        }

        #[rstest]
        fn test_equality_by_path_and_message() {
            let first = PropertyValidationError::new(Property::new("city"), "too long");
            let second = PropertyValidationError::new(Property::new("city"), "too long");
            let third = PropertyValidationError::new(Property::new("city"), "empty");

            assert_eq!(first, second);
            assert_ne!(first, third);
        }
    }
}
