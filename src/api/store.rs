//! Order storage
//!
//! Defines the store the API adapter persists placed orders into.
//! Storage sits outside the workflow itself; the adapter stores the
//! priced order after the order placed event is produced.
//!
//! # Type list
//!
//! - [`OrderStore`] - Storage abstraction
//! - [`InMemoryOrderStore`] - Mutex-guarded map implementation

use std::collections::HashMap;
use std::sync::Mutex;

use crate::simple_types::OrderId;
use crate::workflow::priced_types::PricedOrder;

// =============================================================================
// OrderStore
// =============================================================================

/// Storage for placed orders
///
/// Storing the same order ID twice replaces the stored order.
pub trait OrderStore: Send + Sync {
    /// Looks up a stored order by its ID
    fn find_order(&self, order_id: &OrderId) -> Option<PricedOrder>;

    /// Stores a placed order
    fn store_order(&self, order: PricedOrder);
}

// =============================================================================
// InMemoryOrderStore
// =============================================================================

/// In-memory [`OrderStore`] backed by a mutex-guarded map
///
/// # Examples
///
/// ```
/// use order_taking::api::{InMemoryOrderStore, OrderStore};
///
/// let store = InMemoryOrderStore::new();
/// let order_id = order_taking::simple_types::OrderId::create("ORD1".to_string());
///
/// assert!(store.find_order(&order_id).is_none());
/// ```
#[derive(Debug, Default)]
pub struct InMemoryOrderStore {
    orders: Mutex<HashMap<String, PricedOrder>>,
}

impl InMemoryOrderStore {
    /// Creates an empty store
    #[must_use]
    pub fn new() -> Self {
        Self {
            orders: Mutex::new(HashMap::new()),
        }
    }
}

impl OrderStore for InMemoryOrderStore {
    fn find_order(&self, order_id: &OrderId) -> Option<PricedOrder> {
        let orders = self.orders.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        orders.get(order_id.value()).cloned()
    }

    fn store_order(&self, order: PricedOrder) {
        let mut orders = self.orders.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        orders.insert(order.order_id().value().to_string(), order);
    }
}

// =============================================================================
// Tests
// =============================================================================
