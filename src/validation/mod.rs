//! Schema and range validation for delivery batches.
//!
//! The routing core trusts its input; run a [`Validator`] first when the
//! batch comes from outside.

mod rules;
mod validator;

use thiserror::Error;

pub use rules::{
    AlgorithmRules, DriverLimitRules, DriverRules, LocationRules, Range, RestaurantRules,
    ValidationRules,
};
pub use validator::Validator;

/// Why a batch was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// `config.algorithm` is not in the allowed list.
    #[error("invalid algorithm selection `{algorithm}`, allowed values: {allowed:?}")]
    AlgorithmNotAllowed {
        /// Requested name.
        algorithm: String,
        /// Accepted names.
        allowed: Vec<String>,
    },

    /// A numeric field is outside its bounds.
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        /// Field description.
        field: String,
        /// Offending value.
        value: f64,
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },

    /// Two restaurants share an id.
    #[error("duplicate restaurant id {0}")]
    DuplicateRestaurant(u32),

    /// Two customers share an id.
    #[error("duplicate customer id `{0}`")]
    DuplicateCustomer(String),

    /// Two orders share an id.
    #[error("duplicate order id {0}")]
    DuplicateOrder(u32),

    /// An order names a restaurant not in the batch.
    #[error("order {order_id} references unknown restaurant {restaurant_id}")]
    UnknownRestaurant {
        /// Order id.
        order_id: u32,
        /// Missing restaurant id.
        restaurant_id: u32,
    },

    /// An order names a customer not in the batch.
    #[error("order {order_id} references unknown customer `{customer_id}`")]
    UnknownCustomer {
        /// Order id.
        order_id: u32,
        /// Missing customer id.
        customer_id: String,
    },

    /// More orders than the driver accepts.
    #[error("{count} orders exceed the driver limit of {max}")]
    TooManyOrders {
        /// Orders in the batch.
        count: usize,
        /// Configured maximum.
        max: u32,
    },
}
