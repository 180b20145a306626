//! Routes and the per-step view handed to report writers.

use std::collections::HashMap;

use serde::Serialize;

use super::{Coordinate, Task, TaskKind, TaskSet};

/// One step of a route as exposed to report writers.
///
/// Pickups carry restaurant fields, dropoffs carry customer fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteStep {
    /// Pickup or dropoff.
    #[serde(rename = "type")]
    pub kind: TaskKind,
    /// Owning order.
    pub order_id: u32,
    /// Restaurant id, for pickups.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restaurant_id: Option<u32>,
    /// Restaurant name, for pickups.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restaurant_name: Option<String>,
    /// Customer id, for dropoffs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    /// Customer name, for dropoffs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    /// Visited coordinate.
    pub location: Coordinate,
}

impl From<&Task> for RouteStep {
    fn from(task: &Task) -> Self {
        let restaurant = task.restaurant();
        let customer = task.customer();
        Self {
            kind: task.kind(),
            order_id: task.order_id(),
            restaurant_id: restaurant.map(|r| r.id),
            restaurant_name: restaurant.map(|r| r.name.clone()),
            customer_id: customer.map(|c| c.id.clone()),
            customer_name: customer.map(|c| c.name.clone()),
            location: task.location(),
        }
    }
}

/// An ordered sequence of tasks for the single driver.
///
/// The route starts at the driver's position (not stored) and has no return
/// leg. Its cost is not stored; ask a
/// [`RouteEvaluator`](crate::evaluation::RouteEvaluator).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Route {
    tasks: Vec<Task>,
}

impl Route {
    /// Creates an empty route.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a route from task indices into `tasks`.
    ///
    /// Indices outside the set are skipped.
    pub fn from_indices(tasks: &TaskSet, order: &[usize]) -> Self {
        Self {
            tasks: order.iter().filter_map(|&i| tasks.get(i).cloned()).collect(),
        }
    }

    /// Appends a task.
    pub fn push(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Tasks in visiting order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Number of tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` if the route visits nothing.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns `true` if every order is picked up strictly before it is dropped off.
    ///
    /// An order with only one of its two tasks present makes the route invalid.
    pub fn is_precedence_valid(&self) -> bool {
        let mut pickup_at: HashMap<u32, usize> = HashMap::new();
        let mut dropoff_at: HashMap<u32, usize> = HashMap::new();
        for (pos, task) in self.tasks.iter().enumerate() {
            match task.kind() {
                TaskKind::Pickup => pickup_at.insert(task.order_id(), pos),
                TaskKind::Dropoff => dropoff_at.insert(task.order_id(), pos),
            };
        }
        pickup_at.len() == dropoff_at.len()
            && pickup_at
                .iter()
                .all(|(order, p)| dropoff_at.get(order).is_some_and(|d| p < d))
    }

    /// Report view of every step.
    pub fn steps(&self) -> Vec<RouteStep> {
        self.tasks.iter().map(RouteStep::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::CostGraph;
    use crate::models::{Customer, Driver, Order, Restaurant};

    fn task_set() -> TaskSet {
        let driver = Driver::new(Coordinate::new(0.0, 0.0), 30.0);
        let restaurants = vec![Restaurant::new(1, "Noodles", Coordinate::new(0.0, 0.01), 5)];
        let customers = vec![
            Customer::new("a", "Ann", Coordinate::new(0.0, 0.02)),
            Customer::new("b", "Bob", Coordinate::new(0.0, 0.03)),
        ];
        let orders = vec![Order::new(1, 1, "a"), Order::new(2, 1, "b")];
        let graph = CostGraph::build(&driver, &restaurants, &customers).expect("valid speed");
        TaskSet::generate(&orders, &restaurants, &customers, &graph).expect("valid")
    }

    #[test]
    fn test_route_empty() {
        let r = Route::new();
        assert!(r.is_empty());
        assert!(r.is_precedence_valid());
        assert!(r.steps().is_empty());
    }

    #[test]
    fn test_precedence_valid() {
        let ts = task_set();
        assert!(Route::from_indices(&ts, &[0, 1, 2, 3]).is_precedence_valid());
        assert!(Route::from_indices(&ts, &[0, 2, 3, 1]).is_precedence_valid());
    }

    #[test]
    fn test_precedence_violated() {
        let ts = task_set();
        assert!(!Route::from_indices(&ts, &[1, 0, 2, 3]).is_precedence_valid());
        assert!(!Route::from_indices(&ts, &[0, 2, 1]).is_precedence_valid());
    }

    #[test]
    fn test_from_indices_skips_out_of_range() {
        let ts = task_set();
        let r = Route::from_indices(&ts, &[0, 9, 1]);
        assert_eq!(r.len(), 2);
    }

    #[test]
    fn test_steps() {
        let ts = task_set();
        let steps = Route::from_indices(&ts, &[0, 1]).steps();
        assert_eq!(steps[0].kind, TaskKind::Pickup);
        assert_eq!(steps[0].restaurant_id, Some(1));
        assert_eq!(steps[0].restaurant_name.as_deref(), Some("Noodles"));
        assert!(steps[0].customer_id.is_none());
        assert_eq!(steps[1].kind, TaskKind::Dropoff);
        assert_eq!(steps[1].customer_name.as_deref(), Some("Ann"));
        assert_eq!(steps[1].location, Coordinate::new(0.0, 0.02));
    }

    #[test]
    fn test_step_json_shape() {
        let ts = task_set();
        let steps = Route::from_indices(&ts, &[0, 1]).steps();
        let v = serde_json::to_value(&steps).expect("serializable");
        assert_eq!(v[0]["type"], "pickup");
        assert_eq!(v[0]["order_id"], 1);
        assert!(v[0].get("customer_id").is_none());
        assert_eq!(v[1]["type"], "dropoff");
        assert_eq!(v[1]["customer_id"], "a");
        assert_eq!(v[1]["location"]["longitude"], 0.02);
    }
}
