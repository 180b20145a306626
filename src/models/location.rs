//! Locations visited by the driver: coordinates, the driver, restaurants, customers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::distance::haversine_km;

/// A point on the globe in decimal degrees.
///
/// # Examples
///
/// ```
/// use u_delivery::models::Coordinate;
///
/// let a = Coordinate::new(0.0, 0.0);
/// let b = Coordinate::new(0.0, 1.0);
/// assert!((a.distance_km(&b) - 111.19).abs() < 0.01);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a coordinate from latitude and longitude.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Great-circle distance to another coordinate, in kilometers.
    pub fn distance_km(&self, other: &Coordinate) -> f64 {
        haversine_km(self, other)
    }
}

/// The single driver serving the batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    /// Where the driver starts.
    pub location: Coordinate,
    /// Average travel speed in km/h.
    pub avg_speed: f64,
}

impl Driver {
    /// Creates a driver at `location` moving at `avg_speed` km/h.
    pub fn new(location: Coordinate, avg_speed: f64) -> Self {
        Self {
            location,
            avg_speed,
        }
    }
}

/// Kitchen timing for a restaurant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Preparation {
    /// Average preparation time in minutes.
    pub avg_time: u32,
    /// Rush-hour multiplier. Validated but not part of the cost model.
    #[serde(default = "default_peak_factor")]
    pub peak_factor: f64,
}

fn default_peak_factor() -> f64 {
    1.0
}

/// A restaurant where orders are picked up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    /// Unique restaurant id.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Restaurant position.
    pub location: Coordinate,
    /// Preparation timing.
    pub preparation: Preparation,
}

impl Restaurant {
    /// Creates a restaurant with a peak factor of 1.
    pub fn new(
        id: u32,
        name: impl Into<String>,
        location: Coordinate,
        avg_prep_minutes: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            location,
            preparation: Preparation {
                avg_time: avg_prep_minutes,
                peak_factor: default_peak_factor(),
            },
        }
    }

    /// Average preparation time in minutes.
    ///
    /// A pickup here never costs less than this.
    pub fn avg_prep_minutes(&self) -> f64 {
        f64::from(self.preparation.avg_time)
    }
}

/// A customer receiving one or more orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Unique customer id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Delivery position.
    pub location: Coordinate,
}

impl Customer {
    /// Creates a customer.
    pub fn new(id: impl Into<String>, name: impl Into<String>, location: Coordinate) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            location,
        }
    }
}

/// Key of a node in the cost graph.
///
/// Restaurant and customer ids live in separate namespaces, so a restaurant
/// `1` and a customer `"1"` are distinct nodes. `Driver` never collides with
/// either.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeKey {
    /// The driver's starting position.
    Driver,
    /// A restaurant by id.
    Restaurant(u32),
    /// A customer by id.
    Customer(String),
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Driver => f.write_str("driver"),
            Self::Restaurant(id) => write!(f, "R{id}"),
            Self::Customer(id) => write!(f, "C{id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_key_display() {
        assert_eq!(NodeKey::Driver.to_string(), "driver");
        assert_eq!(NodeKey::Restaurant(3).to_string(), "R3");
        assert_eq!(NodeKey::Customer("abc".into()).to_string(), "Cabc");
    }

    #[test]
    fn test_node_key_namespaces_distinct() {
        assert_ne!(NodeKey::Restaurant(1), NodeKey::Customer("1".into()));
    }

    #[test]
    fn test_restaurant_prep_minutes() {
        let r = Restaurant::new(1, "Pasta", Coordinate::new(1.0, 2.0), 12);
        assert_eq!(r.avg_prep_minutes(), 12.0);
        assert_eq!(r.preparation.peak_factor, 1.0);
    }

    #[test]
    fn test_restaurant_deserialize_default_peak() {
        let json = r#"{"id":4,"name":"Wok","location":{"latitude":1.5,"longitude":2.5},
            "preparation":{"avg_time":9}}"#;
        let r: Restaurant = serde_json::from_str(json).expect("valid json");
        assert_eq!(r.id, 4);
        assert_eq!(r.preparation.avg_time, 9);
        assert_eq!(r.preparation.peak_factor, 1.0);
    }

    #[test]
    fn test_coordinate_distance_symmetric() {
        let a = Coordinate::new(12.97, 77.59);
        let b = Coordinate::new(12.93, 77.62);
        assert!((a.distance_km(&b) - b.distance_km(&a)).abs() < 1e-12);
    }
}
