//! Input DTOs
//!
//! Defines the DTO types used to deserialize API requests.
//!
//! # Type list
//!
//! - [`CustomerInfoDto`] - Customer info DTO
//! - [`AddressDto`] - Address DTO
//! - [`OrderFormLineDto`] - Order line DTO
//! - [`OrderFormDto`] - Order form DTO

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::compound_types::{Address, CustomerInfo};
use crate::workflow::{
    UnvalidatedAddress, UnvalidatedCustomerInfo, UnvalidatedOrder, UnvalidatedOrderLine,
};

// =============================================================================
// CustomerInfoDto
// =============================================================================

/// Customer info DTO
///
/// A type for deserializing the customer info received from the API.
///
/// # Examples
///
/// ```
/// use order_taking::dto::CustomerInfoDto;
///
/// let json = r#"{
///     "firstName": "John",
///     "lastName": "Doe",
///     "emailAddress": "john@doe.com"
/// }"#;
///
/// let dto: CustomerInfoDto = serde_json::from_str(json).unwrap();
/// assert_eq!(dto.first_name, "John");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInfoDto {
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Email address
    pub email_address: String,
}

impl CustomerInfoDto {
    /// Converts to an `UnvalidatedCustomerInfo`
    ///
    /// Converts to the domain type as a pure function. No validation is done.
    ///
    /// # Examples
    ///
    /// ```
    /// use order_taking::dto::CustomerInfoDto;
    ///
    /// let dto = CustomerInfoDto {
    ///     first_name: "John".to_string(),
    ///     last_name: "Doe".to_string(),
    ///     email_address: "john@doe.com".to_string(),
    /// };
    ///
    /// let unvalidated = dto.to_unvalidated_customer_info();
    /// assert_eq!(unvalidated.first_name(), "John");
    /// ```
    #[must_use]
    pub fn to_unvalidated_customer_info(&self) -> UnvalidatedCustomerInfo {
        UnvalidatedCustomerInfo::new(
            self.first_name.clone(),
            self.last_name.clone(),
            self.email_address.clone(),
        )
    }

    /// Creates a `CustomerInfoDto` from the domain `CustomerInfo`
    #[must_use]
    pub fn from_customer_info(customer_info: &CustomerInfo) -> Self {
        Self {
            first_name: customer_info.name().first_name().value().to_string(),
            last_name: customer_info.name().last_name().value().to_string(),
            email_address: customer_info.email_address().value().to_string(),
        }
    }
}

// =============================================================================
// AddressDto
// =============================================================================

/// Address DTO
///
/// A type for deserializing the address received from the API.
/// The optional lines deserialize to `None` when absent or `null`.
///
/// # Examples
///
/// ```
/// use order_taking::dto::AddressDto;
///
/// let json = r#"{
///     "addressLine1": "Some Street",
///     "addressLine2": "Apt 4B",
///     "city": "Los Angeles",
///     "zipCode": "12456"
/// }"#;
///
/// let dto: AddressDto = serde_json::from_str(json).unwrap();
/// assert_eq!(dto.city, "Los Angeles");
/// assert_eq!(dto.address_line3, None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressDto {
    /// Address line 1 (required)
    pub address_line1: String,
    /// Address line 2 (optional)
    pub address_line2: Option<String>,
    /// Address line 3 (optional)
    pub address_line3: Option<String>,
    /// Address line 4 (optional)
    pub address_line4: Option<String>,
    /// City
    pub city: String,
    /// Zip code
    pub zip_code: String,
}

impl AddressDto {
    /// Converts to an `UnvalidatedAddress`
    ///
    /// Converts to the domain type as a pure function. No validation is done.
    ///
    /// # Examples
    ///
    /// ```
    /// use order_taking::dto::AddressDto;
    ///
    /// let dto = AddressDto {
    ///     address_line1: "Some Street".to_string(),
    ///     address_line2: None,
    ///     address_line3: None,
    ///     address_line4: None,
    ///     city: "Los Angeles".to_string(),
    ///     zip_code: "12456".to_string(),
    /// };
    ///
    /// let unvalidated = dto.to_unvalidated_address();
    /// assert_eq!(unvalidated.city(), "Los Angeles");
    /// ```
    #[must_use]
    pub fn to_unvalidated_address(&self) -> UnvalidatedAddress {
        UnvalidatedAddress::new(
            self.address_line1.clone(),
            self.address_line2.clone(),
            self.address_line3.clone(),
            self.address_line4.clone(),
            self.city.clone(),
            self.zip_code.clone(),
        )
    }

    /// Creates an `AddressDto` from the domain `Address`
    #[must_use]
    pub fn from_address(address: &Address) -> Self {
        Self {
            address_line1: address.address_line1().value().to_string(),
            address_line2: address.address_line2().map(|s| s.value().to_string()),
            address_line3: address.address_line3().map(|s| s.value().to_string()),
            address_line4: address.address_line4().map(|s| s.value().to_string()),
            city: address.city().value().to_string(),
            zip_code: address.zip_code().value().to_string(),
        }
    }
}

// =============================================================================
// OrderFormLineDto
// =============================================================================

/// Order line DTO
///
/// A type for deserializing an order line received from the API.
/// The quantity is serialized as a string to preserve precision.
///
/// # Examples
///
/// ```
/// use order_taking::dto::OrderFormLineDto;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let json = r#"{
///     "orderLineId": "LN1",
///     "productCode": "G134",
///     "quantity": "10.55"
/// }"#;
///
/// let dto: OrderFormLineDto = serde_json::from_str(json).unwrap();
/// assert_eq!(dto.product_code, "G134");
/// assert_eq!(dto.quantity, Decimal::from_str("10.55").unwrap());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderFormLineDto {
    /// Order line ID
    pub order_line_id: String,
    /// Product code
    pub product_code: String,
    /// Quantity (string-formatted decimal)
    #[serde(with = "rust_decimal::serde::str")]
    pub quantity: Decimal,
}

impl OrderFormLineDto {
    /// Converts to an `UnvalidatedOrderLine`
    ///
    /// Converts to the domain type as a pure function. No validation is done.
    #[must_use]
    pub fn to_unvalidated_order_line(&self) -> UnvalidatedOrderLine {
        UnvalidatedOrderLine::new(
            self.order_line_id.clone(),
            self.product_code.clone(),
            self.quantity,
        )
    }
}

// =============================================================================
// OrderFormDto
// =============================================================================

/// Order form DTO
///
/// A type for deserializing the whole order received from the API.
/// Used as the input of the place-order workflow.
///
/// # Examples
///
/// ```
/// use order_taking::dto::OrderFormDto;
///
/// let json = r#"{
///     "orderId": "ORD1",
///     "customerInfo": {
///         "firstName": "John",
///         "lastName": "Doe",
///         "emailAddress": "john@doe.com"
///     },
///     "shippingAddress": {
///         "addressLine1": "Some Street",
///         "city": "Los Angeles",
///         "zipCode": "12456"
///     },
///     "billingAddress": {
///         "addressLine1": "Some Street",
///         "city": "Los Angeles",
///         "zipCode": "72456"
///     },
///     "lines": [
///         {"orderLineId": "LN1", "productCode": "G134", "quantity": "10.55"}
///     ]
/// }"#;
///
/// let dto: OrderFormDto = serde_json::from_str(json).unwrap();
/// let unvalidated = dto.to_unvalidated_order();
/// assert_eq!(unvalidated.order_id(), "ORD1");
/// assert_eq!(unvalidated.lines().len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderFormDto {
    /// Order ID
    pub order_id: String,
    /// Customer info
    pub customer_info: CustomerInfoDto,
    /// Shipping address
    pub shipping_address: AddressDto,
    /// Billing address
    pub billing_address: AddressDto,
    /// Order lines
    pub lines: Vec<OrderFormLineDto>,
}

impl OrderFormDto {
    /// Converts to an `UnvalidatedOrder`
    ///
    /// Converts to the domain type as a pure function. No validation is done.
    #[must_use]
    pub fn to_unvalidated_order(&self) -> UnvalidatedOrder {
        let customer_info = self.customer_info.to_unvalidated_customer_info();
        let shipping_address = self.shipping_address.to_unvalidated_address();
        let billing_address = self.billing_address.to_unvalidated_address();
        let lines: Vec<UnvalidatedOrderLine> = self
            .lines
            .iter()
            .map(OrderFormLineDto::to_unvalidated_order_line)
            .collect();

        UnvalidatedOrder::new(
            self.order_id.clone(),
            customer_info,
            shipping_address,
            billing_address,
            lines,
        )
    }
}

// =============================================================================
// Tests
// =============================================================================
