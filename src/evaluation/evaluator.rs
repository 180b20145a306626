//! Route evaluator applying the restaurant preparation floor.

use crate::distance::CostGraph;
use crate::models::{Route, Task};

/// Scores task sequences against a [`CostGraph`].
///
/// The driver starts at [`CostGraph::DRIVER`]. Each leg costs the travel
/// time to the task's node, except that a pickup never costs less than the
/// restaurant's average preparation time: the driver waits for the food.
/// There is no return leg. Every strategy scores through this type so that
/// their totals are comparable.
///
/// # Examples
///
/// ```
/// use u_delivery::models::{Coordinate, Customer, Driver, Order, Restaurant, Route, TaskSet};
/// use u_delivery::distance::CostGraph;
/// use u_delivery::evaluation::RouteEvaluator;
///
/// let driver = Driver::new(Coordinate::new(0.0, 0.0), 30.0);
/// let restaurants = vec![Restaurant::new(1, "R1", Coordinate::new(0.0, 0.01), 5)];
/// let customers = vec![Customer::new("C1", "Ann", Coordinate::new(0.0, 0.02))];
/// let orders = vec![Order::new(1, 1, "C1")];
/// let graph = CostGraph::build(&driver, &restaurants, &customers).unwrap();
/// let tasks = TaskSet::generate(&orders, &restaurants, &customers, &graph).unwrap();
///
/// let evaluator = RouteEvaluator::new(&graph);
/// let total = evaluator.evaluate(&Route::from_indices(&tasks, &[0, 1]));
/// // 5 min wait at R1 (travel is only ~2.22) + ~2.22 min to C1
/// assert!((total - 7.2239).abs() < 1e-3);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RouteEvaluator<'a> {
    graph: &'a CostGraph,
}

impl<'a> RouteEvaluator<'a> {
    /// Creates an evaluator over `graph`.
    pub fn new(graph: &'a CostGraph) -> Self {
        Self { graph }
    }

    /// The graph being read.
    pub fn graph(&self) -> &'a CostGraph {
        self.graph
    }

    /// Effective cost of moving from node `from` to `task` and completing it.
    pub fn leg_cost(&self, from: usize, task: &Task) -> f64 {
        let travel = self.graph.get(from, task.node());
        match task.restaurant() {
            Some(restaurant) => travel.max(restaurant.avg_prep_minutes()),
            None => travel,
        }
    }

    /// Total minutes for visiting `tasks` in order, starting at the driver.
    pub fn total_minutes<'t, I>(&self, tasks: I) -> f64
    where
        I: IntoIterator<Item = &'t Task>,
    {
        let mut total = 0.0;
        let mut current = CostGraph::DRIVER;
        for task in tasks {
            total += self.leg_cost(current, task);
            current = task.node();
        }
        total
    }

    /// Total minutes for a route.
    pub fn evaluate(&self, route: &Route) -> f64 {
        self.total_minutes(route.tasks())
    }
}
