//! The validated batch handed to the planner.

use std::time::Duration;

use serde::Deserialize;

use super::{Customer, Driver, Order, Restaurant};
use crate::error::RoutingError;

/// Limits placed on the driver for a run.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct DriverLimits {
    /// Maximum distance the driver accepts, in km.
    pub max_distance: u32,
    /// Maximum orders in one batch.
    pub max_orders: u32,
}

impl Default for DriverLimits {
    fn default() -> Self {
        Self {
            max_distance: 50,
            max_orders: 5,
        }
    }
}

/// Run configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DeliveryConfig {
    /// Strategy name, e.g. `greedy` or `brute_force`.
    pub algorithm: String,
    /// Driver limits checked by the validator.
    #[serde(default)]
    pub driver_limits: DriverLimits,
    /// Wall-clock cap for exhaustive search, in milliseconds.
    #[serde(default)]
    pub time_limit_ms: Option<u64>,
}

impl DeliveryConfig {
    /// Config selecting `algorithm` with default limits and no time cap.
    pub fn new(algorithm: impl Into<String>) -> Self {
        Self {
            algorithm: algorithm.into(),
            driver_limits: DriverLimits::default(),
            time_limit_ms: None,
        }
    }

    /// Time cap as a [`Duration`].
    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit_ms.map(Duration::from_millis)
    }
}

/// Everything needed to plan one driver's route.
///
/// # Examples
///
/// ```
/// use u_delivery::models::DeliveryInput;
///
/// let json = r#"{
///     "config": { "algorithm": "greedy" },
///     "driver": { "location": { "latitude": 0.0, "longitude": 0.0 }, "avg_speed": 30 },
///     "restaurants": [],
///     "customers": [],
///     "orders": []
/// }"#;
/// let input = DeliveryInput::from_json_str(json).unwrap();
/// assert_eq!(input.config.algorithm, "greedy");
/// assert_eq!(input.driver.avg_speed, 30.0);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DeliveryInput {
    /// Run configuration.
    pub config: DeliveryConfig,
    /// The driver.
    pub driver: Driver,
    /// Restaurants in the batch.
    #[serde(default)]
    pub restaurants: Vec<Restaurant>,
    /// Customers in the batch.
    #[serde(default)]
    pub customers: Vec<Customer>,
    /// Orders to route.
    #[serde(default)]
    pub orders: Vec<Order>,
}

impl DeliveryInput {
    /// Parses a JSON document.
    ///
    /// # Errors
    ///
    /// [`RoutingError::Parse`] on malformed JSON or missing fields.
    pub fn from_json_str(json: &str) -> Result<Self, RoutingError> {
        Ok(serde_json::from_str(json)?)
    }
}
