//! Range and membership rules for delivery input.

use serde::Deserialize;

use crate::error::RoutingError;

/// Inclusive numeric range.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Range {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
}

impl Range {
    /// Creates a range.
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Returns `true` if `value` lies within the bounds. NaN never does.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Allowed algorithm names.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AlgorithmRules {
    /// Names accepted in `config.algorithm`.
    pub allowed_values: Vec<String>,
}

/// Bounds on `config.driver_limits`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct DriverLimitRules {
    /// Bounds on `max_distance`.
    pub max_distance: Range,
    /// Bounds on `max_orders`.
    pub max_orders: Range,
}

/// Bounds on driver attributes.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct DriverRules {
    /// Bounds on average speed, km/h.
    pub avg_speed: Range,
}

/// Bounds on restaurant attributes.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RestaurantRules {
    /// Bounds on average preparation time, minutes.
    pub prep_time: Range,
    /// Bounds on the peak factor.
    pub peak_factor: Range,
}

/// Bounds on coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct LocationRules {
    /// Bounds on latitude.
    pub latitude: Range,
    /// Bounds on longitude.
    pub longitude: Range,
}

/// Everything the [`Validator`](super::Validator) checks against.
///
/// Deserializes from the same JSON layout the rules file uses:
///
/// ```
/// use u_delivery::validation::ValidationRules;
///
/// let rules = ValidationRules::from_json_str(r#"{
///     "algorithm": { "allowed_values": ["greedy"] },
///     "driver_limits": { "max_distance": { "min": 1, "max": 30 },
///                        "max_orders": { "min": 1, "max": 4 } },
///     "driver": { "avg_speed": { "min": 5, "max": 80 } },
///     "restaurant": { "prep_time": { "min": 0, "max": 60 },
///                     "peak_factor": { "min": 1.0, "max": 2.0 } },
///     "location": { "latitude": { "min": -90, "max": 90 },
///                   "longitude": { "min": -180, "max": 180 } }
/// }"#).unwrap();
/// assert_eq!(rules.algorithm.allowed_values, vec!["greedy"]);
/// assert!(rules.driver.avg_speed.contains(40.0));
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ValidationRules {
    /// Algorithm membership.
    pub algorithm: AlgorithmRules,
    /// Driver limit bounds.
    pub driver_limits: DriverLimitRules,
    /// Driver bounds.
    pub driver: DriverRules,
    /// Restaurant bounds.
    pub restaurant: RestaurantRules,
    /// Coordinate bounds.
    pub location: LocationRules,
}

impl ValidationRules {
    /// Parses rules from JSON.
    ///
    /// # Errors
    ///
    /// [`RoutingError::Parse`] on malformed JSON or missing sections.
    pub fn from_json_str(json: &str) -> Result<Self, RoutingError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            algorithm: AlgorithmRules {
                allowed_values: vec!["greedy".to_string(), "brute_force".to_string()],
            },
            driver_limits: DriverLimitRules {
                max_distance: Range::new(1.0, 100.0),
                max_orders: Range::new(1.0, 10.0),
            },
            driver: DriverRules {
                avg_speed: Range::new(5.0, 120.0),
            },
            restaurant: RestaurantRules {
                prep_time: Range::new(0.0, 120.0),
                peak_factor: Range::new(1.0, 3.0),
            },
            location: LocationRules {
                latitude: Range::new(-90.0, 90.0),
                longitude: Range::new(-180.0, 180.0),
            },
        }
    }
}
