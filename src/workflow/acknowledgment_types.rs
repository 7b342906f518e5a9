//! Acknowledgment types
//!
//! Types used by the acknowledgment step: the letter content, the
//! acknowledgment addressed to the customer, and the outcome reported by
//! the sending service.
//!
//! # Types
//!
//! - [`HtmlString`] - Acknowledgment letter content
//! - [`OrderAcknowledgment`] - A letter addressed to a customer
//! - [`SendResult`] - Outcome of a send attempt

use crate::simple_types::EmailAddress;

// =============================================================================
// HtmlString
// =============================================================================

/// HTML content of an acknowledgment letter.
///
/// # Examples
///
/// ```
/// use order_taking::workflow::HtmlString;
///
/// let letter = HtmlString::new("<h1>Thank you</h1>".to_string());
/// assert_eq!(letter.value(), "<h1>Thank you</h1>");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct HtmlString(String);

impl HtmlString {
    /// Wraps letter content produced by the letter service
    #[must_use]
    pub const fn new(value: String) -> Self {
        Self(value)
    }

    /// Returns the letter content
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// OrderAcknowledgment
// =============================================================================

/// An acknowledgment letter addressed to the customer who placed the order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderAcknowledgment {
    email_address: EmailAddress,
    letter: HtmlString,
}

impl OrderAcknowledgment {
    /// Builds an acknowledgment from the recipient and the letter
    #[must_use]
    pub const fn new(email_address: EmailAddress, letter: HtmlString) -> Self {
        Self {
            email_address,
            letter,
        }
    }

    /// Returns the recipient address
    #[must_use]
    pub const fn email_address(&self) -> &EmailAddress {
        &self.email_address
    }

    /// Returns the letter content
    #[must_use]
    pub const fn letter(&self) -> &HtmlString {
        &self.letter
    }
}

// =============================================================================
// SendResult
// =============================================================================

/// Outcome reported by the acknowledgment sending service.
///
/// A `NotSent` outcome is not an error; the workflow records that no
/// acknowledgment went out and carries on.
///
/// # Examples
///
/// ```
/// use order_taking::workflow::SendResult;
///
/// assert!(SendResult::Sent.is_sent());
/// assert!(SendResult::NotSent.is_not_sent());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SendResult {
    /// The letter was delivered to the sending service
    Sent,
    /// The sending service declined or failed to deliver the letter
    NotSent,
}

impl SendResult {
    /// Returns `true` when the letter was sent
    #[must_use]
    pub const fn is_sent(&self) -> bool {
        matches!(self, Self::Sent)
    }

    /// Returns `true` when the letter was not sent
    #[must_use]
    pub const fn is_not_sent(&self) -> bool {
        matches!(self, Self::NotSent)
    }
}
