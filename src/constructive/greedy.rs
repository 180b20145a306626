//! Nearest-feasible-task greedy heuristic.
//!
//! # Algorithm
//!
//! Starting from the driver, repeatedly move to the cheapest task that is
//! currently allowed: any pickup, or the dropoff of an order already picked
//! up. A pickup's cost includes waiting for the food. Ties go to the task
//! generated first.
//!
//! # Complexity
//!
//! O(m²) for m = 2n tasks.
//!
//! The result is always a valid route but may be far from optimal, since the
//! heuristic never looks more than one leg ahead.

use tracing::debug;

use crate::distance::CostGraph;
use crate::error::RoutingError;
use crate::evaluation::RouteEvaluator;
use crate::models::{Route, Solution, TaskSet};

/// Builds a route by always taking the cheapest feasible next task.
///
/// The solution is never flagged as proven optimal.
///
/// # Errors
///
/// [`RoutingError::SearchStalled`] if tasks remain but none is feasible,
/// which cannot happen for a [`TaskSet`] built by [`TaskSet::generate`].
///
/// # Examples
///
/// ```
/// use u_delivery::models::{Coordinate, Customer, Driver, Order, Restaurant, TaskSet};
/// use u_delivery::distance::CostGraph;
/// use u_delivery::evaluation::RouteEvaluator;
/// use u_delivery::constructive::greedy;
///
/// let driver = Driver::new(Coordinate::new(0.0, 0.0), 30.0);
/// let restaurants = vec![Restaurant::new(1, "R1", Coordinate::new(0.0, 0.01), 5)];
/// let customers = vec![Customer::new("C1", "Ann", Coordinate::new(0.0, 0.02))];
/// let orders = vec![Order::new(1, 1, "C1")];
/// let graph = CostGraph::build(&driver, &restaurants, &customers).unwrap();
/// let tasks = TaskSet::generate(&orders, &restaurants, &customers, &graph).unwrap();
///
/// let sol = greedy(&tasks, &RouteEvaluator::new(&graph)).unwrap();
/// assert_eq!(sol.route().len(), 2);
/// assert!((sol.total_minutes() - 7.2239).abs() < 1e-3);
/// ```
pub fn greedy(tasks: &TaskSet, evaluator: &RouteEvaluator<'_>) -> Result<Solution, RoutingError> {
    let mut remaining: Vec<usize> = (0..tasks.len()).collect();
    let mut picked_up = vec![false; tasks.num_orders()];
    let mut route = Route::new();
    let mut current = CostGraph::DRIVER;
    let mut total = 0.0;

    while !remaining.is_empty() {
        // Position in `remaining` and effective cost of the cheapest feasible task
        let mut best: Option<(usize, f64)> = None;
        for (pos, &i) in remaining.iter().enumerate() {
            if !TaskSet::is_pickup(i) && !picked_up[TaskSet::order_slot(i)] {
                continue;
            }
            let Some(task) = tasks.get(i) else {
                continue;
            };
            let cost = evaluator.leg_cost(current, task);
            if best.map_or(true, |(_, c)| cost < c) {
                best = Some((pos, cost));
            }
        }

        let Some((pos, cost)) = best else {
            return Err(RoutingError::SearchStalled {
                remaining: remaining.len(),
            });
        };
        let next = remaining.remove(pos);
        let Some(task) = tasks.get(next) else {
            return Err(RoutingError::SearchStalled {
                remaining: remaining.len() + 1,
            });
        };

        if TaskSet::is_pickup(next) {
            picked_up[TaskSet::order_slot(next)] = true;
        }
        total += cost;
        current = task.node();
        route.push(task.clone());
    }

    debug!(tasks = tasks.len(), total_minutes = total, "greedy route built");
    Ok(Solution::new(route, total, false))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Coordinate, Customer, Driver, Order, Restaurant, TaskKind};

    fn build(
        restaurants: &[Restaurant],
        customers: &[Customer],
        orders: &[Order],
    ) -> (CostGraph, TaskSet) {
        let driver = Driver::new(Coordinate::new(0.0, 0.0), 60.0);
        let graph = CostGraph::build(&driver, restaurants, customers).expect("valid speed");
        let tasks = TaskSet::generate(orders, restaurants, customers, &graph).expect("valid");
        (graph, tasks)
    }

    fn visits(sol: &Solution) -> Vec<(u32, TaskKind)> {
        sol.route()
            .tasks()
            .iter()
            .map(|t| (t.order_id(), t.kind()))
            .collect()
    }

    #[test]
    fn test_empty() {
        let (graph, tasks) = build(&[], &[], &[]);
        let sol = greedy(&tasks, &RouteEvaluator::new(&graph)).expect("no tasks");
        assert!(sol.route().is_empty());
        assert_eq!(sol.total_minutes(), 0.0);
        assert!(!sol.is_proven_optimal());
    }

    #[test]
    fn test_line_visits_in_order() {
        let restaurants = vec![Restaurant::new(1, "R", Coordinate::new(0.0, 0.01), 0)];
        let customers = vec![
            Customer::new("a", "Ann", Coordinate::new(0.0, 0.02)),
            Customer::new("b", "Bob", Coordinate::new(0.0, 0.03)),
        ];
        let orders = vec![Order::new(1, 1, "b"), Order::new(2, 1, "a")];
        let (graph, tasks) = build(&restaurants, &customers, &orders);
        let sol = greedy(&tasks, &RouteEvaluator::new(&graph)).expect("feasible");
        // Second pickup at the same restaurant costs 0, then nearest customer first.
        assert_eq!(
            visits(&sol),
            vec![
                (1, TaskKind::Pickup),
                (2, TaskKind::Pickup),
                (2, TaskKind::Dropoff),
                (1, TaskKind::Dropoff),
            ]
        );
    }

    #[test]
    fn test_dropoff_waits_for_pickup() {
        // Customer sits right next to the driver, restaurant far away.
        let restaurants = vec![Restaurant::new(1, "Far", Coordinate::new(0.0, 0.1), 0)];
        let customers = vec![Customer::new("a", "Ann", Coordinate::new(0.0, 0.001))];
        let (graph, tasks) = build(&restaurants, &customers, &[Order::new(1, 1, "a")]);
        let sol = greedy(&tasks, &RouteEvaluator::new(&graph)).expect("feasible");
        assert_eq!(visits(&sol), vec![(1, TaskKind::Pickup), (1, TaskKind::Dropoff)]);
    }

    #[test]
    fn test_prep_time_steers_choice() {
        let restaurants = vec![
            Restaurant::new(1, "Near", Coordinate::new(0.0, 0.01), 30),
            Restaurant::new(2, "Farther", Coordinate::new(0.0, -0.02), 0),
        ];
        let customers = vec![
            Customer::new("a", "Ann", Coordinate::new(0.0, 0.02)),
            Customer::new("b", "Bob", Coordinate::new(0.0, -0.03)),
        ];
        let orders = vec![Order::new(1, 1, "a"), Order::new(2, 2, "b")];
        let (graph, tasks) = build(&restaurants, &customers, &orders);
        let sol = greedy(&tasks, &RouteEvaluator::new(&graph)).expect("feasible");
        assert_eq!(visits(&sol)[0], (2, TaskKind::Pickup));
    }

    #[test]
    fn test_tie_takes_first_generated() {
        // Two restaurants equidistant from the driver, same prep time.
        let restaurants = vec![
            Restaurant::new(1, "West", Coordinate::new(0.0, -0.01), 0),
            Restaurant::new(2, "East", Coordinate::new(0.0, 0.01), 0),
        ];
        let customers = vec![
            Customer::new("a", "Ann", Coordinate::new(0.01, 0.01)),
            Customer::new("b", "Bob", Coordinate::new(0.01, -0.01)),
        ];
        let orders = vec![Order::new(7, 2, "a"), Order::new(8, 1, "b")];
        let (graph, tasks) = build(&restaurants, &customers, &orders);
        let sol = greedy(&tasks, &RouteEvaluator::new(&graph)).expect("feasible");
        assert_eq!(visits(&sol)[0], (7, TaskKind::Pickup));
    }

    #[test]
    fn test_total_matches_evaluator() {
        let restaurants = vec![
            Restaurant::new(1, "A", Coordinate::new(0.01, 0.0), 3),
            Restaurant::new(2, "B", Coordinate::new(0.0, 0.01), 4),
        ];
        let customers = vec![
            Customer::new("a", "Ann", Coordinate::new(0.02, 0.0)),
            Customer::new("b", "Bob", Coordinate::new(0.0, 0.02)),
        ];
        let orders = vec![Order::new(1, 1, "b"), Order::new(2, 2, "a"), Order::new(3, 1, "a")];
        let (graph, tasks) = build(&restaurants, &customers, &orders);
        let eval = RouteEvaluator::new(&graph);
        let sol = greedy(&tasks, &eval).expect("feasible");
        assert_eq!(sol.route().len(), 6);
        assert!(sol.route().is_precedence_valid());
        assert!((sol.total_minutes() - eval.evaluate(sol.route())).abs() < 1e-9);
    }
}
