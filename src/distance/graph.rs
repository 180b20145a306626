//! Dense travel-time graph over the driver, restaurants, and customers.

use std::collections::HashMap;

use tracing::debug;

use crate::error::RoutingError;
use crate::models::{Coordinate, Customer, Driver, NodeKey, Restaurant};

/// A complete, symmetric table of travel times in minutes.
///
/// Nodes are laid out as driver first, then restaurants, then customers, in
/// input order. Times are stored in a dense row-major matrix and addressed
/// either by node index or by [`NodeKey`]. The graph holds raw travel time
/// only; the restaurant preparation floor is applied by the route evaluator.
///
/// # Examples
///
/// ```
/// use u_delivery::models::{Coordinate, Customer, Driver, NodeKey, Restaurant};
/// use u_delivery::distance::CostGraph;
///
/// let driver = Driver::new(Coordinate::new(0.0, 0.0), 30.0);
/// let restaurants = vec![Restaurant::new(1, "R1", Coordinate::new(0.0, 0.01), 5)];
/// let customers = vec![Customer::new("C1", "Ann", Coordinate::new(0.0, 0.02))];
///
/// let graph = CostGraph::build(&driver, &restaurants, &customers).unwrap();
/// assert_eq!(graph.size(), 3);
/// let t = graph.time(&NodeKey::Driver, &NodeKey::Restaurant(1)).unwrap();
/// assert!((t - 2.2239).abs() < 1e-3);
/// ```
#[derive(Debug, Clone)]
pub struct CostGraph {
    keys: Vec<NodeKey>,
    index: HashMap<NodeKey, usize>,
    minutes: Vec<f64>,
    size: usize,
}

impl CostGraph {
    /// Index of the driver node.
    pub const DRIVER: usize = 0;

    /// Builds the graph from the run's locations and the driver's speed.
    ///
    /// A key that appears twice keeps its first location.
    ///
    /// # Errors
    ///
    /// [`RoutingError::InvalidDriverSpeed`] if the speed is not strictly positive.
    pub fn build(
        driver: &Driver,
        restaurants: &[Restaurant],
        customers: &[Customer],
    ) -> Result<Self, RoutingError> {
        let speed = driver.avg_speed;
        if !(speed > 0.0) {
            return Err(RoutingError::InvalidDriverSpeed { speed });
        }
        let km_per_minute = speed / 60.0;

        let mut keys = Vec::with_capacity(1 + restaurants.len() + customers.len());
        let mut locations: Vec<Coordinate> = Vec::with_capacity(keys.capacity());
        let mut index = HashMap::with_capacity(keys.capacity());

        let nodes = std::iter::once((NodeKey::Driver, driver.location))
            .chain(
                restaurants
                    .iter()
                    .map(|r| (NodeKey::Restaurant(r.id), r.location)),
            )
            .chain(
                customers
                    .iter()
                    .map(|c| (NodeKey::Customer(c.id.clone()), c.location)),
            );
        for (key, location) in nodes {
            if index.contains_key(&key) {
                continue;
            }
            index.insert(key.clone(), keys.len());
            keys.push(key);
            locations.push(location);
        }

        let n = keys.len();
        let mut minutes = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let t = locations[i].distance_km(&locations[j]) / km_per_minute;
                minutes[i * n + j] = t;
                minutes[j * n + i] = t;
            }
        }

        debug!(nodes = n, speed_kmh = speed, "built cost graph");

        Ok(Self {
            keys,
            index,
            minutes,
            size: n,
        })
    }

    /// Travel time in minutes between two node indices.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.minutes[from * self.size + to]
    }

    /// Travel time in minutes between two keys, if both are in the graph.
    pub fn time(&self, from: &NodeKey, to: &NodeKey) -> Option<f64> {
        let i = self.index_of(from)?;
        let j = self.index_of(to)?;
        Some(self.get(i, j))
    }

    /// Node index for a key.
    pub fn index_of(&self, key: &NodeKey) -> Option<usize> {
        self.index.get(key).copied()
    }

    /// Key stored at a node index.
    pub fn key(&self, index: usize) -> Option<&NodeKey> {
        self.keys.get(index)
    }

    /// Number of nodes, driver included.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if `time(a, b)` and `time(b, a)` agree within `tol` for every pair.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }
}
