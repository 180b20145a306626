//! Delivery orders.

use serde::{Deserialize, Serialize};

/// One order: food from a restaurant delivered to a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Unique order id.
    pub order_id: u32,
    /// Restaurant preparing the food.
    pub restaurant_id: u32,
    /// Customer receiving it.
    pub customer_id: String,
}

impl Order {
    /// Creates an order.
    pub fn new(order_id: u32, restaurant_id: u32, customer_id: impl Into<String>) -> Self {
        Self {
            order_id,
            restaurant_id,
            customer_id: customer_id.into(),
        }
    }
}
