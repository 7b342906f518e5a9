//! Priced order types
//!
//! Output of the pricing step: each line carries its computed line price
//! and the order carries the total amount to bill.
//!
//! # Types
//!
//! - [`PricedOrderLine`] - A validated line with its line price
//! - [`PricedOrder`] - A fully priced order

use crate::compound_types::{Address, CustomerInfo};
use crate::simple_types::{BillingAmount, OrderId, OrderLineId, OrderQuantity, Price, ProductCode};

// =============================================================================
// PricedOrderLine
// =============================================================================

/// An order line extended with its computed line price.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PricedOrderLine {
    order_line_id: OrderLineId,
    product_code: ProductCode,
    quantity: OrderQuantity,
    line_price: Price,
}

impl PricedOrderLine {
    /// Builds a priced line from a validated line's parts and its price
    #[must_use]
    pub const fn new(
        order_line_id: OrderLineId,
        product_code: ProductCode,
        quantity: OrderQuantity,
        line_price: Price,
    ) -> Self {
        Self {
            order_line_id,
            product_code,
            quantity,
            line_price,
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

    /// Returns the computed line price
    #[must_use]
    pub const fn line_price(&self) -> Price {
        self.line_price
    }
}

// =============================================================================
// PricedOrder
// =============================================================================

/// A fully priced order with the total amount to bill.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PricedOrder {
    order_id: OrderId,
    customer_info: CustomerInfo,
    shipping_address: Address,
    billing_address: Address,
    amount_to_bill: BillingAmount,
    lines: Vec<PricedOrderLine>,
}

impl PricedOrder {
    /// Builds a priced order from a validated order's parts, the billing
    /// total, and the priced lines
    #[must_use]
    pub const fn new(
        order_id: OrderId,
        customer_info: CustomerInfo,
        shipping_address: Address,
        billing_address: Address,
        amount_to_bill: BillingAmount,
        lines: Vec<PricedOrderLine>,
    ) -> Self {
        Self {
            order_id,
            customer_info,
            shipping_address,
            billing_address,
            amount_to_bill,
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

    /// Returns the total amount to bill
    #[must_use]
    pub const fn amount_to_bill(&self) -> BillingAmount {
        self.amount_to_bill
    }

    /// Returns the priced order lines
    #[must_use]
    pub fn lines(&self) -> &[PricedOrderLine] {
        &self.lines
    }
}
