//! Pickup and dropoff tasks derived from orders.

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use super::{Coordinate, Customer, NodeKey, Order, Restaurant};
use crate::distance::CostGraph;
use crate::error::{ReferenceTarget, RoutingError};

/// Whether a task collects or delivers food.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskKind {
    /// Collect an order at its restaurant.
    Pickup,
    /// Hand an order to its customer.
    Dropoff,
}

#[derive(Debug, Clone, PartialEq)]
enum Stop {
    Restaurant(Restaurant),
    Customer(Customer),
}

/// A single visit the driver has to make.
///
/// Tasks are produced by [`TaskSet::generate`] and never built by hand.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    order_id: u32,
    node: usize,
    stop: Stop,
}

impl Task {
    /// Pickup or dropoff.
    pub fn kind(&self) -> TaskKind {
        match self.stop {
            Stop::Restaurant(_) => TaskKind::Pickup,
            Stop::Customer(_) => TaskKind::Dropoff,
        }
    }

    /// Owning order.
    pub fn order_id(&self) -> u32 {
        self.order_id
    }

    /// Index of the visited node in the [`CostGraph`].
    pub fn node(&self) -> usize {
        self.node
    }

    /// Key of the visited node.
    pub fn key(&self) -> NodeKey {
        match &self.stop {
            Stop::Restaurant(r) => NodeKey::Restaurant(r.id),
            Stop::Customer(c) => NodeKey::Customer(c.id.clone()),
        }
    }

    /// Where the visit happens.
    pub fn location(&self) -> Coordinate {
        match &self.stop {
            Stop::Restaurant(r) => r.location,
            Stop::Customer(c) => c.location,
        }
    }

    /// The restaurant, for pickups.
    pub fn restaurant(&self) -> Option<&Restaurant> {
        match &self.stop {
            Stop::Restaurant(r) => Some(r),
            Stop::Customer(_) => None,
        }
    }

    /// The customer, for dropoffs.
    pub fn customer(&self) -> Option<&Customer> {
        match &self.stop {
            Stop::Customer(c) => Some(c),
            Stop::Restaurant(_) => None,
        }
    }
}

/// All tasks for a batch of orders.
///
/// Order `k` (in input order) owns the pickup at index `2k` and the dropoff
/// at index `2k + 1`. Search strategies rely on this layout to check
/// precedence in constant time.
///
/// # Examples
///
/// ```
/// use u_delivery::models::{Coordinate, Customer, Driver, Order, Restaurant, TaskKind, TaskSet};
/// use u_delivery::distance::CostGraph;
///
/// let driver = Driver::new(Coordinate::new(0.0, 0.0), 30.0);
/// let restaurants = vec![Restaurant::new(1, "R1", Coordinate::new(0.0, 0.01), 5)];
/// let customers = vec![Customer::new("C1", "Ann", Coordinate::new(0.0, 0.02))];
/// let orders = vec![Order::new(1, 1, "C1")];
///
/// let graph = CostGraph::build(&driver, &restaurants, &customers).unwrap();
/// let tasks = TaskSet::generate(&orders, &restaurants, &customers, &graph).unwrap();
/// assert_eq!(tasks.len(), 2);
/// assert_eq!(tasks.get(0).unwrap().kind(), TaskKind::Pickup);
/// assert_eq!(tasks.get(1).unwrap().kind(), TaskKind::Dropoff);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TaskSet {
    tasks: Vec<Task>,
}

impl TaskSet {
    /// Expands every order into its pickup and dropoff task.
    ///
    /// # Errors
    ///
    /// [`RoutingError::DanglingReference`] if an order names a restaurant or
    /// customer that is missing from the batch or from `graph`. The whole
    /// batch fails; no order is dropped.
    pub fn generate(
        orders: &[Order],
        restaurants: &[Restaurant],
        customers: &[Customer],
        graph: &CostGraph,
    ) -> Result<Self, RoutingError> {
        let restaurant_by_id: HashMap<u32, &Restaurant> =
            restaurants.iter().rev().map(|r| (r.id, r)).collect();
        let customer_by_id: HashMap<&str, &Customer> =
            customers.iter().rev().map(|c| (c.id.as_str(), c)).collect();

        let mut tasks = Vec::with_capacity(orders.len() * 2);
        for order in orders {
            let dangling = |target, id: String| RoutingError::DanglingReference {
                order_id: order.order_id,
                target,
                id,
            };

            let restaurant = restaurant_by_id
                .get(&order.restaurant_id)
                .copied()
                .ok_or_else(|| {
                    dangling(ReferenceTarget::Restaurant, order.restaurant_id.to_string())
                })?;
            let customer = customer_by_id
                .get(order.customer_id.as_str())
                .copied()
                .ok_or_else(|| dangling(ReferenceTarget::Customer, order.customer_id.clone()))?;

            let pickup_node = graph
                .index_of(&NodeKey::Restaurant(restaurant.id))
                .ok_or_else(|| dangling(ReferenceTarget::Restaurant, restaurant.id.to_string()))?;
            let dropoff_node = graph
                .index_of(&NodeKey::Customer(customer.id.clone()))
                .ok_or_else(|| dangling(ReferenceTarget::Customer, customer.id.clone()))?;

            tasks.push(Task {
                order_id: order.order_id,
                node: pickup_node,
                stop: Stop::Restaurant(restaurant.clone()),
            });
            tasks.push(Task {
                order_id: order.order_id,
                node: dropoff_node,
                stop: Stop::Customer(customer.clone()),
            });
        }

        debug!(orders = orders.len(), tasks = tasks.len(), "generated tasks");
        Ok(Self { tasks })
    }

    /// Number of tasks (twice the order count).
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` if there are no orders.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Number of orders in the batch.
    pub fn num_orders(&self) -> usize {
        self.tasks.len() / 2
    }

    /// Task at `index`.
    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    /// All tasks in generation order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns `true` if the task at `index` is a pickup.
    pub fn is_pickup(index: usize) -> bool {
        index % 2 == 0
    }

    /// Position of the owning order in the batch.
    pub fn order_slot(index: usize) -> usize {
        index / 2
    }

    /// Index of the pickup that must precede the task at `index`.
    ///
    /// Returns `None` for pickups.
    pub fn pickup_of(index: usize) -> Option<usize> {
        if Self::is_pickup(index) {
            None
        } else {
            Some(index - 1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Driver;

    fn fixture() -> (Vec<Restaurant>, Vec<Customer>, CostGraph) {
        let driver = Driver::new(Coordinate::new(0.0, 0.0), 30.0);
        let restaurants = vec![
            Restaurant::new(1, "Noodles", Coordinate::new(0.0, 0.01), 5),
            Restaurant::new(2, "Tacos", Coordinate::new(0.01, 0.0), 10),
        ];
        let customers = vec![
            Customer::new("a", "Ann", Coordinate::new(0.0, 0.02)),
            Customer::new("b", "Bob", Coordinate::new(0.02, 0.0)),
        ];
        let graph = CostGraph::build(&driver, &restaurants, &customers).expect("valid speed");
        (restaurants, customers, graph)
    }

    #[test]
    fn test_generate_layout() {
        let (restaurants, customers, graph) = fixture();
        let orders = vec![
            Order::new(10, 2, "a"),
            Order::new(11, 1, "b"),
            Order::new(12, 1, "a"),
        ];
        let ts = TaskSet::generate(&orders, &restaurants, &customers, &graph).expect("valid");
        assert_eq!(ts.len(), 6);
        assert_eq!(ts.num_orders(), 3);

        let pickups = ts.tasks().iter().filter(|t| t.kind() == TaskKind::Pickup).count();
        assert_eq!(pickups, 3);

        for (i, t) in ts.tasks().iter().enumerate() {
            assert_eq!(t.order_id(), orders[TaskSet::order_slot(i)].order_id);
            assert_eq!(TaskSet::is_pickup(i), t.kind() == TaskKind::Pickup);
        }

        let first = ts.get(0).expect("pickup");
        assert_eq!(first.key(), NodeKey::Restaurant(2));
        assert_eq!(first.node(), 2);
        assert_eq!(first.restaurant().map(|r| r.name.as_str()), Some("Tacos"));
        assert!(first.customer().is_none());

        let drop = ts.get(1).expect("dropoff");
        assert_eq!(drop.key(), NodeKey::Customer("a".into()));
        assert_eq!(drop.location(), Coordinate::new(0.0, 0.02));
    }

    #[test]
    fn test_pickup_of() {
        assert_eq!(TaskSet::pickup_of(0), None);
        assert_eq!(TaskSet::pickup_of(1), Some(0));
        assert_eq!(TaskSet::pickup_of(5), Some(4));
    }

    #[test]
    fn test_empty_orders() {
        let (restaurants, customers, graph) = fixture();
        let ts = TaskSet::generate(&[], &restaurants, &customers, &graph).expect("valid");
        assert!(ts.is_empty());
        assert_eq!(ts.num_orders(), 0);
    }

    #[test]
    fn test_missing_restaurant() {
        let (restaurants, customers, graph) = fixture();
        let orders = vec![Order::new(1, 1, "a"), Order::new(2, 99, "b")];
        let err = TaskSet::generate(&orders, &restaurants, &customers, &graph).unwrap_err();
        match err {
            RoutingError::DanglingReference {
                order_id,
                target,
                id,
            } => {
                assert_eq!(order_id, 2);
                assert_eq!(target, ReferenceTarget::Restaurant);
                assert_eq!(id, "99");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_customer() {
        let (restaurants, customers, graph) = fixture();
        let orders = vec![Order::new(3, 1, "zed")];
        let err = TaskSet::generate(&orders, &restaurants, &customers, &graph).unwrap_err();
        assert!(matches!(
            err,
            RoutingError::DanglingReference {
                target: ReferenceTarget::Customer,
                ..
            }
        ));
    }

    #[test]
    fn test_customer_absent_from_graph() {
        let (restaurants, customers, _) = fixture();
        let driver = Driver::new(Coordinate::new(0.0, 0.0), 30.0);
        let graph = CostGraph::build(&driver, &restaurants, &customers[..1]).expect("valid speed");
        let orders = vec![Order::new(1, 1, "b")];
        let err = TaskSet::generate(&orders, &restaurants, &customers, &graph).unwrap_err();
        assert!(matches!(err, RoutingError::DanglingReference { .. }));
    }
}
