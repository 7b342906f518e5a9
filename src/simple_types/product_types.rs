//! Product code types
//!
//! Defines `WidgetCode`, `GizmoCode`, and the `ProductCode` union that
//! dispatches between them by prefix.

use regex::Regex;
use std::sync::LazyLock;

use super::constrained_type;
use super::error::{ValidationError, join_messages};

// =============================================================================
// WidgetCode
// =============================================================================

/// Regex pattern for `WidgetCode`
static WIDGET_CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^W\d{4}$").expect("Invalid widget code regex pattern"));

/// A widget product code: `W` followed by four digits.
///
/// # Examples
///
/// ```
/// use order_taking::simple_types::WidgetCode;
///
/// let code = WidgetCode::validate("W1234".to_string()).unwrap();
/// assert_eq!(code.value(), "W1234");
///
/// assert!(WidgetCode::validate("W123".to_string()).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct WidgetCode(String);

impl WidgetCode {
    /// Validates a widget code.
    ///
    /// # Errors
    ///
    /// Returns a pattern error when the value is not `W` plus four digits.
    pub fn validate(value: String) -> Result<Self, Vec<ValidationError>> {
        constrained_type::check_pattern(&WIDGET_CODE_PATTERN, &value)
            .map(|()| Self(value))
            .map_err(|error| vec![error])
    }

    /// Creates a `WidgetCode` from a value already known to be valid.
    ///
    /// # Panics
    ///
    /// Panics when the value violates the widget code pattern.
    #[must_use]
    pub fn create(value: String) -> Self {
        Self::validate(value).unwrap_or_else(|errors| {
            panic!(
                "Not expecting WidgetCode to be invalid: {}",
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
// GizmoCode
// =============================================================================

/// Regex pattern for `GizmoCode`
static GIZMO_CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^G\d{3}$").expect("Invalid gizmo code regex pattern"));

/// A gizmo product code: `G` followed by three digits.
///
/// # Examples
///
/// ```
/// use order_taking::simple_types::GizmoCode;
///
/// let code = GizmoCode::validate("G123".to_string()).unwrap();
/// assert_eq!(code.value(), "G123");
///
/// assert!(GizmoCode::validate("G1234".to_string()).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GizmoCode(String);

impl GizmoCode {
    /// Validates a gizmo code.
    ///
    /// # Errors
    ///
    /// Returns a pattern error when the value is not `G` plus three digits.
    pub fn validate(value: String) -> Result<Self, Vec<ValidationError>> {
        constrained_type::check_pattern(&GIZMO_CODE_PATTERN, &value)
            .map(|()| Self(value))
            .map_err(|error| vec![error])
    }

    /// Creates a `GizmoCode` from a value already known to be valid.
    ///
    /// # Panics
    ///
    /// Panics when the value violates the gizmo code pattern.
    #[must_use]
    pub fn create(value: String) -> Self {
        Self::validate(value).unwrap_or_else(|errors| {
            panic!(
                "Not expecting GizmoCode to be invalid: {}",
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
// ProductCode
// =============================================================================

/// A product code: either a widget or a gizmo.
///
/// Parsing dispatches on the first character: `W` validates as a
/// [`WidgetCode`], `G` as a [`GizmoCode`], and anything else, including the
/// empty string, is a single validation error naming the whole input.
///
/// # Examples
///
/// ```
/// use order_taking::simple_types::ProductCode;
///
/// let widget = ProductCode::validate("W1234".to_string()).unwrap();
/// assert!(widget.is_widget());
/// assert_eq!(widget.value(), "W1234");
///
/// let gizmo = ProductCode::validate("G123".to_string()).unwrap();
/// assert!(gizmo.is_gizmo());
///
/// assert!(ProductCode::validate("X999".to_string()).is_err());
/// assert!(ProductCode::validate(String::new()).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ProductCode {
    /// A widget, identified by a `W` prefixed code
    Widget(WidgetCode),
    /// A gizmo, identified by a `G` prefixed code
    Gizmo(GizmoCode),
}

impl ProductCode {
    /// Validates a product code, dispatching on its prefix.
    ///
    /// # Errors
    ///
    /// Returns the underlying widget or gizmo pattern error for a recognized
    /// prefix, or a single error naming the whole input for an unknown
    /// prefix.
    pub fn validate(value: String) -> Result<Self, Vec<ValidationError>> {
        if value.starts_with('W') {
            WidgetCode::validate(value).map(Self::Widget)
        } else if value.starts_with('G') {
            GizmoCode::validate(value).map(Self::Gizmo)
        } else {
            Err(vec![ValidationError::new(format!(
                "The product code <{value}> should start with 'W' or 'G'"
            ))])
        }
    }

    /// Creates a `ProductCode` from a value already known to be valid.
    ///
    /// # Panics
    ///
    /// Panics when the value is not a valid widget or gizmo code.
    #[must_use]
    pub fn create(value: String) -> Self {
        Self::validate(value).unwrap_or_else(|errors| {
            panic!(
                "Not expecting ProductCode to be invalid: {}",
                join_messages(&errors)
            )
        })
    }

    /// Returns the code string of either variant
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::Widget(code) => code.value(),
            Self::Gizmo(code) => code.value(),
        }
    }

    /// Returns whether this is the `Widget` variant
    #[must_use]
    pub const fn is_widget(&self) -> bool {
        matches!(self, Self::Widget(_))
    }

    /// Returns whether this is the `Gizmo` variant
    #[must_use]
    pub const fn is_gizmo(&self) -> bool {
        matches!(self, Self::Gizmo(_))
    }
}
