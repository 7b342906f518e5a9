//! Workflow collaborators
//!
//! Traits for the external services the workflow depends on. The
//! workflow only ever talks to these seams, so tests and the API layer
//! can swap in whatever implementation they need.
//!
//! Plain closures satisfy the synchronous traits through blanket
//! implementations. The address check talks to a remote service and is
//! the one asynchronous collaborator.
//!
//! # Traits
//!
//! - [`CheckProductCodeExists`] - Product catalog lookup
//! - [`CheckAddressExists`] - Remote address verification
//! - [`GetProductPrice`] - Price catalog lookup
//! - [`CreateAcknowledgmentLetter`] - Letter rendering
//! - [`SendOrderAcknowledgment`] - Letter delivery

use async_trait::async_trait;

use crate::simple_types::{Price, ProductCode};
use crate::workflow::acknowledgment_types::{HtmlString, OrderAcknowledgment, SendResult};
use crate::workflow::error_types::CheckAddressFailure;
use crate::workflow::priced_types::PricedOrder;
use crate::workflow::unvalidated_types::UnvalidatedAddress;
use crate::workflow::validated_types::CheckedAddress;

// =============================================================================
// CheckProductCodeExists
// =============================================================================

/// Answers whether a well-formed product code is in the catalog.
pub trait CheckProductCodeExists: Send + Sync {
    /// Returns `true` when the product code exists
    fn check(&self, product_code: &ProductCode) -> bool;
}

impl<F> CheckProductCodeExists for F
where
    F: Fn(&ProductCode) -> bool + Send + Sync,
{
    fn check(&self, product_code: &ProductCode) -> bool {
        self(product_code)
    }
}

// =============================================================================
// CheckAddressExists
// =============================================================================

/// Asks the remote address service to confirm an address exists.
///
/// `NotFound` and `InvalidFormat` verdicts become validation errors on
/// the address; a `Remote` failure aborts the workflow.
#[async_trait]
pub trait CheckAddressExists: Send + Sync {
    /// Checks the address, returning it wrapped as confirmed on success
    async fn check(
        &self,
        address: &UnvalidatedAddress,
    ) -> Result<CheckedAddress, CheckAddressFailure>;
}

// =============================================================================
// GetProductPrice
// =============================================================================

/// Looks up the unit price of a product known to exist.
pub trait GetProductPrice: Send + Sync {
    /// Returns the unit price of the product
    fn price(&self, product_code: &ProductCode) -> Price;
}

impl<F> GetProductPrice for F
where
    F: Fn(&ProductCode) -> Price + Send + Sync,
{
    fn price(&self, product_code: &ProductCode) -> Price {
        self(product_code)
    }
}

// =============================================================================
// CreateAcknowledgmentLetter
// =============================================================================

/// Renders the acknowledgment letter for a priced order.
pub trait CreateAcknowledgmentLetter: Send + Sync {
    /// Produces the letter content
    fn create(&self, order: &PricedOrder) -> HtmlString;
}

impl<F> CreateAcknowledgmentLetter for F
where
    F: Fn(&PricedOrder) -> HtmlString + Send + Sync,
{
    fn create(&self, order: &PricedOrder) -> HtmlString {
        self(order)
    }
}

// =============================================================================
// SendOrderAcknowledgment
// =============================================================================

/// Delivers an acknowledgment letter and reports the outcome.
pub trait SendOrderAcknowledgment: Send + Sync {
    /// Attempts delivery and reports whether the letter went out
    fn send(&self, acknowledgment: &OrderAcknowledgment) -> SendResult;
}

impl<F> SendOrderAcknowledgment for F
where
    F: Fn(&OrderAcknowledgment) -> SendResult + Send + Sync,
{
    fn send(&self, acknowledgment: &OrderAcknowledgment) -> SendResult {
        self(acknowledgment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simple_types::EmailAddress;
    use rstest::rstest;
    use rust_decimal::Decimal;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FixedAddressCheck(Result<(), CheckAddressFailure>);

    #[async_trait]
    impl CheckAddressExists for FixedAddressCheck {
        async fn check(
            &self,
            address: &UnvalidatedAddress,
        ) -> Result<CheckedAddress, CheckAddressFailure> {
            self.0
                .clone()
                .map(|()| CheckedAddress::new(address.clone()))
        }
    }

    fn sample_address() -> UnvalidatedAddress {
        UnvalidatedAddress::new(
            "Some Street".to_string(),
            None,
            None,
            None,
            "Los Angeles".to_string(),
            "12456".to_string(),
        )
    }

    #[rstest]
    fn test_closures_satisfy_sync_collaborators() {
        let calls = AtomicUsize::new(0);
        let check_product = |_: &ProductCode| {
            calls.fetch_add(1, Ordering::SeqCst);
            true
        };
        let get_price = |_: &ProductCode| Price::create(Decimal::from(100));
        let send = |_: &OrderAcknowledgment| SendResult::Sent;

        let code = ProductCode::create("W1234".to_string());
        assert!(CheckProductCodeExists::check(&check_product, &code));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(get_price.price(&code).value(), Decimal::from(100));

        let acknowledgment = OrderAcknowledgment::new(
            EmailAddress::create("john@doe.com".to_string()),
            HtmlString::new("<p>Thanks</p>".to_string()),
        );
        assert!(send.send(&acknowledgment).is_sent());
    }

    #[rstest]
    #[tokio::test]
    async fn test_address_check_wraps_confirmed_address() {
        let checker = FixedAddressCheck(Ok(()));

        let checked = checker.check(&sample_address()).await.unwrap();

        assert_eq!(checked.value(), &sample_address());
    }

    #[rstest]
    #[tokio::test]
    async fn test_address_check_reports_verdict() {
        let checker = FixedAddressCheck(Err(CheckAddressFailure::NotFound));

        let failure = checker.check(&sample_address()).await.unwrap_err();

        assert!(failure.is_not_found());
    }
}
