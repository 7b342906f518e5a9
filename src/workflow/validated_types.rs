//! Validated order types
//!
//! Output of the validation step: every field has been converted to its
//! constrained domain type, so holding a value of these types is proof
//! that the order passed validation.
//!
//! # Types
//!
//! - [`CheckedAddress`] - An address confirmed to exist by the address service
//! - [`ValidatedOrderLine`] - An order line with constrained fields
//! - [`ValidatedOrder`] - A fully validated order

use crate::compound_types::{Address, CustomerInfo};
use crate::simple_types::{OrderId, OrderLineId, OrderQuantity, ProductCode};
use crate::workflow::unvalidated_types::UnvalidatedAddress;

// =============================================================================
// CheckedAddress
// =============================================================================

/// An address the remote address service has confirmed to exist.
///
/// The content is still raw; field-level validation happens afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckedAddress(UnvalidatedAddress);

impl CheckedAddress {
    /// Wraps an address that passed the existence check
    #[must_use]
    pub const fn new(address: UnvalidatedAddress) -> Self {
        Self(address)
    }

    /// Returns the checked address content
    #[must_use]
    pub const fn value(&self) -> &UnvalidatedAddress {
        &self.0
    }

    /// Consumes the wrapper and returns the address content
    #[must_use]
    pub fn into_inner(self) -> UnvalidatedAddress {
        self.0
    }
}

// =============================================================================
// ValidatedOrderLine
// =============================================================================

/// An order line whose id, product code, and quantity all passed validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatedOrderLine {
    order_line_id: OrderLineId,
    product_code: ProductCode,
    quantity: OrderQuantity,
}

impl ValidatedOrderLine {
    /// Builds a validated line from already-constrained parts
    #[must_use]
    pub const fn new(
        order_line_id: OrderLineId,
        product_code: ProductCode,
        quantity: OrderQuantity,
    ) -> Self {
        Self {
            order_line_id,
            product_code,
            quantity,
        }
    }

    /// Returns the order line id
    #[must_use]
    pub const fn order_line_id(&self) -> &OrderLineId {
        &self.order_line_id
    }

    /// Returns the product code
    #[must_use]
    pub const fn product_code(&self) -> &ProductCode {
        &self.product_code
    }

    /// Returns the order quantity
    #[must_use]
    pub const fn quantity(&self) -> &OrderQuantity {
        &self.quantity
    }
}

// =============================================================================
// ValidatedOrder
// =============================================================================

/// A fully validated order, ready for pricing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatedOrder {
    order_id: OrderId,
    customer_info: CustomerInfo,
    shipping_address: Address,
    billing_address: Address,
    lines: Vec<ValidatedOrderLine>,
}

impl ValidatedOrder {
    /// Builds a validated order from already-constrained parts
    #[must_use]
    pub const fn new(
        order_id: OrderId,
        customer_info: CustomerInfo,
        shipping_address: Address,
        billing_address: Address,
        lines: Vec<ValidatedOrderLine>,
    ) -> Self {
        Self {
            order_id,
            customer_info,
            shipping_address,
            billing_address,
            lines,
        }
    }

    /// Returns the order id
    #[must_use]
    pub const fn order_id(&self) -> &OrderId {
        &self.order_id
    }

    /// Returns the customer details
    #[must_use]
    pub const fn customer_info(&self) -> &CustomerInfo {
        &self.customer_info
    }

    /// Returns the shipping address
    #[must_use]
    pub const fn shipping_address(&self) -> &Address {
        &self.shipping_address
    }

    /// Returns the billing address
    #[must_use]
    pub const fn billing_address(&self) -> &Address {
        &self.billing_address
    }

    /// Returns the validated order lines
    #[must_use]
    pub fn lines(&self) -> &[ValidatedOrderLine] {
        &self.lines
    }
}
