//! Live dependencies
//!
//! Provides the collaborator implementations injected into the
//! place-order workflow by the server. A real deployment would replace
//! these with integrations against external services.
//!
//! # Type and function list
//!
//! - [`ProductCatalog`] - In-memory product catalog (existence and prices)
//! - [`PassThroughAddressCheck`] - Address checker accepting every address
//! - [`create_acknowledgment_letter`] - HTML letter builder
//! - [`send_acknowledgment`] - Acknowledgment sender, always succeeds

use std::collections::HashMap;
use std::str::FromStr;

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::simple_types::{Price, ProductCode};
use crate::workflow::acknowledgment_types::{HtmlString, OrderAcknowledgment, SendResult};
use crate::workflow::dependencies::{CheckAddressExists, CheckProductCodeExists, GetProductPrice};
use crate::workflow::error_types::CheckAddressFailure;
use crate::workflow::priced_types::PricedOrder;
use crate::workflow::unvalidated_types::UnvalidatedAddress;
use crate::workflow::validated_types::CheckedAddress;

// =============================================================================
// ProductCatalog
// =============================================================================

/// In-memory product catalog
///
/// Backs both the existence check and the price lookup of the workflow.
/// Codes outside the catalog price at a flat rate per product kind.
///
/// # Examples
///
/// ```
/// use order_taking::api::ProductCatalog;
/// use order_taking::simple_types::ProductCode;
/// use order_taking::workflow::dependencies::{CheckProductCodeExists, GetProductPrice};
///
/// let catalog = ProductCatalog::with_default_products();
/// let product_code = ProductCode::create("W1234".to_string());
///
/// assert!(catalog.check(&product_code));
/// assert_eq!(catalog.price(&product_code).value(), 100.into());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ProductCatalog {
    prices: HashMap<String, Price>,
}

impl ProductCatalog {
    /// Creates an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self {
            prices: HashMap::new(),
        }
    }

    /// Creates a catalog seeded with the demo products
    ///
    /// # Panics
    ///
    /// Panics when a seeded price literal fails to parse, which would be
    /// a bug in the seed data.
    #[must_use]
    pub fn with_default_products() -> Self {
        let mut catalog = Self::new();
        for (code, price) in [
            ("W1234", "100.00"),
            ("W1344", "3.71"),
            ("G123", "50.00"),
            ("G134", "1.12"),
        ] {
            catalog.insert(
                ProductCode::create(code.to_string()),
                Price::create(Decimal::from_str(price).expect("Valid decimal literal")),
            );
        }
        catalog
    }

    /// Adds or replaces a product and its price
    pub fn insert(&mut self, product_code: ProductCode, price: Price) {
        self.prices.insert(product_code.value().to_string(), price);
    }

    fn fallback_price(product_code: &ProductCode) -> Price {
        match product_code {
            ProductCode::Widget(_) => Price::create(Decimal::from(100)),
            ProductCode::Gizmo(_) => Price::create(Decimal::from(50)),
        }
    }
}

impl CheckProductCodeExists for ProductCatalog {
    fn check(&self, product_code: &ProductCode) -> bool {
        self.prices.contains_key(product_code.value())
    }
}

impl GetProductPrice for ProductCatalog {
    fn price(&self, product_code: &ProductCode) -> Price {
        self.prices
            .get(product_code.value())
            .copied()
            .unwrap_or_else(|| Self::fallback_price(product_code))
    }
}

// =============================================================================
// PassThroughAddressCheck
// =============================================================================

/// Address checker that accepts every address
///
/// A real implementation would call the remote address service and map
/// its verdicts and transport failures onto [`CheckAddressFailure`].
#[derive(Clone, Copy, Debug, Default)]
pub struct PassThroughAddressCheck;

#[async_trait]
impl CheckAddressExists for PassThroughAddressCheck {
    async fn check(
        &self,
        address: &UnvalidatedAddress,
    ) -> Result<CheckedAddress, CheckAddressFailure> {
        Ok(CheckedAddress::new(address.clone()))
    }
}

// =============================================================================
// create_acknowledgment_letter
// =============================================================================

/// Builds the acknowledgment letter for a priced order
///
/// # Examples
///
/// ```
/// use order_taking::api::create_acknowledgment_letter;
/// # use order_taking::compound_types::{Address, City, CustomerInfo, PersonalName};
/// # use order_taking::simple_types::{BillingAmount, EmailAddress, OrderId, String50, ZipCode};
/// # use order_taking::workflow::PricedOrder;
/// # use rust_decimal::Decimal;
/// # let address = Address::new(
/// #     String50::create("Some Street".to_string()),
/// #     None,
/// #     None,
/// #     None,
/// #     City::new(String50::create("Los Angeles".to_string())),
/// #     ZipCode::create("12456".to_string()),
/// # );
/// # let priced_order = PricedOrder::new(
/// #     OrderId::create("ORD1".to_string()),
/// #     CustomerInfo::new(
/// #         PersonalName::new(
/// #             String50::create("John".to_string()),
/// #             String50::create("Doe".to_string()),
/// #         ),
/// #         EmailAddress::create("john@doe.com".to_string()),
/// #     ),
/// #     address.clone(),
/// #     address,
/// #     BillingAmount::create(Decimal::ZERO),
/// #     vec![],
/// # );
/// let letter = create_acknowledgment_letter(&priced_order);
/// assert!(letter.value().contains("ORD1"));
/// ```
#[must_use]
pub fn create_acknowledgment_letter(priced_order: &PricedOrder) -> HtmlString {
    let order_id = priced_order.order_id().value();
    let amount = priced_order.amount_to_bill().value();
    HtmlString::new(format!(
        "<h1>Order Confirmation</h1><p>Your order {order_id} for {amount} has been received.</p>"
    ))
}

// =============================================================================
// send_acknowledgment
// =============================================================================

/// Sends the acknowledgment letter
///
/// This implementation only logs the send and reports success.
#[must_use]
pub fn send_acknowledgment(acknowledgment: &OrderAcknowledgment) -> SendResult {
    tracing::info!(
        recipient = acknowledgment.email_address().value(),
        "sending order acknowledgment"
    );
    SendResult::Sent
}

// =============================================================================
// Tests
// =============================================================================
