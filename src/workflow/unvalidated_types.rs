//! Unvalidated input types
//!
//! Raw order data exactly as submitted: strings and decimals with no
//! guarantees. These types deliberately carry no validation logic; the
//! conversion to validated types is a separate workflow step.
//!
//! # Types
//!
//! - [`UnvalidatedCustomerInfo`] - Raw customer details
//! - [`UnvalidatedAddress`] - Raw address
//! - [`UnvalidatedOrderLine`] - Raw order line
//! - [`UnvalidatedOrder`] - Raw order, the workflow input

use rust_decimal::Decimal;

// =============================================================================
// UnvalidatedCustomerInfo
// =============================================================================

/// Raw customer details as submitted.
///
/// # Examples
///
/// ```
/// use order_taking::workflow::UnvalidatedCustomerInfo;
///
/// let info = UnvalidatedCustomerInfo::new(
///     "John".to_string(),
///     "Doe".to_string(),
///     "john@doe.com".to_string(),
/// );
/// assert_eq!(info.first_name(), "John");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnvalidatedCustomerInfo {
    first_name: String,
    last_name: String,
    email_address: String,
}

impl UnvalidatedCustomerInfo {
    /// Builds raw customer details; nothing is checked here
    #[must_use]
    pub const fn new(first_name: String, last_name: String, email_address: String) -> Self {
        Self {
            first_name,
            last_name,
            email_address,
        }
    }

    /// Returns the raw first name
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Returns the raw last name
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Returns the raw email address
    #[must_use]
    pub fn email_address(&self) -> &str {
        &self.email_address
    }
}

// =============================================================================
// UnvalidatedAddress
// =============================================================================

/// Raw address as submitted. Only the first line is required.
///
/// # Examples
///
/// ```
/// use order_taking::workflow::UnvalidatedAddress;
///
/// let address = UnvalidatedAddress::new(
///     "Some Street".to_string(),
///     Some("Apt 4".to_string()),
///     None,
///     None,
///     "Los Angeles".to_string(),
///     "12456".to_string(),
/// );
/// assert_eq!(address.city(), "Los Angeles");
/// assert_eq!(address.address_line3(), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnvalidatedAddress {
    address_line1: String,
    address_line2: Option<String>,
    address_line3: Option<String>,
    address_line4: Option<String>,
    city: String,
    zip_code: String,
}

impl UnvalidatedAddress {
    /// Builds a raw address; nothing is checked here
    #[must_use]
    pub const fn new(
        address_line1: String,
        address_line2: Option<String>,
        address_line3: Option<String>,
        address_line4: Option<String>,
        city: String,
        zip_code: String,
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

    /// Returns the raw first address line
    #[must_use]
    pub fn address_line1(&self) -> &str {
        &self.address_line1
    }

    /// Returns the raw second address line, if submitted
    #[must_use]
    pub fn address_line2(&self) -> Option<&str> {
        self.address_line2.as_deref()
    }

    /// Returns the raw third address line, if submitted
    #[must_use]
    pub fn address_line3(&self) -> Option<&str> {
        self.address_line3.as_deref()
    }

    /// Returns the raw fourth address line, if submitted
    #[must_use]
    pub fn address_line4(&self) -> Option<&str> {
        self.address_line4.as_deref()
    }

    /// Returns the raw city
    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    /// Returns the raw zip code
    #[must_use]
    pub fn zip_code(&self) -> &str {
        &self.zip_code
    }
}

// =============================================================================
// UnvalidatedOrderLine
// =============================================================================

/// A raw order line: id, product code, and quantity as submitted.
///
/// The quantity is a bare decimal; whether it must be whole units or a
/// weight depends on the product code and is decided during validation.
///
/// # Examples
///
/// ```
/// use order_taking::workflow::UnvalidatedOrderLine;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let line = UnvalidatedOrderLine::new(
///     "LN1".to_string(),
///     "G134".to_string(),
///     Decimal::from_str("10.55").unwrap(),
/// );
/// assert_eq!(line.product_code(), "G134");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnvalidatedOrderLine {
    order_line_id: String,
    product_code: String,
    quantity: Decimal,
}

impl UnvalidatedOrderLine {
    /// Builds a raw order line; nothing is checked here
    #[must_use]
    pub const fn new(order_line_id: String, product_code: String, quantity: Decimal) -> Self {
        Self {
            order_line_id,
            product_code,
            quantity,
        }
    }

    /// Returns the raw order line id
    #[must_use]
    pub fn order_line_id(&self) -> &str {
        &self.order_line_id
    }

    /// Returns the raw product code
    #[must_use]
    pub fn product_code(&self) -> &str {
        &self.product_code
    }

    /// Returns the raw quantity
    #[must_use]
    pub const fn quantity(&self) -> Decimal {
        self.quantity
    }
}

// =============================================================================
// UnvalidatedOrder
// =============================================================================

/// A raw order, the input of the place-order workflow.
///
/// # Examples
///
/// ```
/// use order_taking::workflow::{
///     UnvalidatedAddress, UnvalidatedCustomerInfo, UnvalidatedOrder, UnvalidatedOrderLine,
/// };
/// use rust_decimal::Decimal;
///
/// let customer_info = UnvalidatedCustomerInfo::new(
///     "John".to_string(),
///     "Doe".to_string(),
///     "john@doe.com".to_string(),
/// );
/// let address = UnvalidatedAddress::new(
///     "Some Street".to_string(),
///     None,
///     None,
///     None,
///     "Los Angeles".to_string(),
///     "12456".to_string(),
/// );
/// let lines = vec![UnvalidatedOrderLine::new(
///     "LN1".to_string(),
///     "W1234".to_string(),
///     Decimal::from(10),
/// )];
///
/// let order = UnvalidatedOrder::new(
///     "ORD1".to_string(),
///     customer_info,
///     address.clone(),
///     address,
///     lines,
/// );
/// assert_eq!(order.order_id(), "ORD1");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnvalidatedOrder {
    order_id: String,
    customer_info: UnvalidatedCustomerInfo,
    shipping_address: UnvalidatedAddress,
    billing_address: UnvalidatedAddress,
    lines: Vec<UnvalidatedOrderLine>,
}

impl UnvalidatedOrder {
    /// Builds a raw order; nothing is checked here
    #[must_use]
    pub const fn new(
        order_id: String,
        customer_info: UnvalidatedCustomerInfo,
        shipping_address: UnvalidatedAddress,
        billing_address: UnvalidatedAddress,
        lines: Vec<UnvalidatedOrderLine>,
    ) -> Self {
        Self {
            order_id,
            customer_info,
            shipping_address,
            billing_address,
            lines,
        }
    }

    /// Returns the raw order id
    #[must_use]
    pub fn order_id(&self) -> &str {
        &self.order_id
    }

    /// Returns the raw customer details
    #[must_use]
    pub const fn customer_info(&self) -> &UnvalidatedCustomerInfo {
        &self.customer_info
    }

    /// Returns the raw shipping address
    #[must_use]
    pub const fn shipping_address(&self) -> &UnvalidatedAddress {
        &self.shipping_address
    }

    /// Returns the raw billing address
    #[must_use]
    pub const fn billing_address(&self) -> &UnvalidatedAddress {
        &self.billing_address
    }

    /// Returns the raw order lines
    #[must_use]
    pub fn lines(&self) -> &[UnvalidatedOrderLine] {
        &self.lines
    }
}
