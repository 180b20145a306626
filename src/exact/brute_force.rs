//! Exhaustive search over precedence-valid task orders.
//!
//! # Algorithm
//!
//! Depth-first backtracking over task positions. At each depth the
//! candidates are tried in ascending task index, and a dropoff is only a
//! candidate once its pickup is already placed, so invalid orders are never
//! generated. A branch is also abandoned once its accumulated cost reaches
//! the best complete cost: leg costs are non-negative, so no completion of
//! it could win.
//!
//! Ties keep the first route found, i.e. the lexicographically smallest
//! sequence of task indices among the minimum-cost routes.
//!
//! # Complexity
//!
//! O((2n)! / 2ⁿ) leaves in the worst case for n orders. Meant for small
//! batches; pass a [`SearchBudget`] to bound the wall-clock time.

use tracing::{debug, warn};

use super::SearchBudget;
use crate::distance::CostGraph;
use crate::evaluation::RouteEvaluator;
use crate::models::{Route, Solution, Task, TaskSet};

/// Nodes expanded between two budget checks.
const BUDGET_CHECK_INTERVAL: u64 = 1024;

/// Finds the minimum-time route visiting every task.
///
/// The returned solution is flagged as proven optimal unless `budget` cut
/// the search short, in which case it holds the best route found so far.
/// The budget is only consulted after a first complete route exists, so a
/// valid route is always returned.
///
/// # Examples
///
/// ```
/// use u_delivery::models::{Coordinate, Customer, Driver, Order, Restaurant, TaskSet};
/// use u_delivery::distance::CostGraph;
/// use u_delivery::evaluation::RouteEvaluator;
/// use u_delivery::exact::{brute_force, SearchBudget};
///
/// let driver = Driver::new(Coordinate::new(0.0, 0.0), 30.0);
/// let restaurants = vec![Restaurant::new(1, "R1", Coordinate::new(0.0, 0.01), 5)];
/// let customers = vec![
///     Customer::new("a", "Ann", Coordinate::new(0.0, 0.02)),
///     Customer::new("b", "Bob", Coordinate::new(0.0, 0.03)),
/// ];
/// let orders = vec![Order::new(1, 1, "b"), Order::new(2, 1, "a")];
/// let graph = CostGraph::build(&driver, &restaurants, &customers).unwrap();
/// let tasks = TaskSet::generate(&orders, &restaurants, &customers, &graph).unwrap();
///
/// let sol = brute_force(&tasks, &RouteEvaluator::new(&graph), &SearchBudget::unlimited());
/// assert!(sol.is_proven_optimal());
/// assert!(sol.route().is_precedence_valid());
/// assert_eq!(sol.route().len(), 4);
/// ```
pub fn brute_force(
    tasks: &TaskSet,
    evaluator: &RouteEvaluator<'_>,
    budget: &SearchBudget,
) -> Solution {
    let mut search = Backtracker::new(tasks.tasks(), evaluator, budget);
    search.descend(CostGraph::DRIVER, 0.0);

    debug!(
        tasks = tasks.len(),
        explored = search.explored,
        interrupted = search.interrupted,
        "exhaustive search finished"
    );
    if search.interrupted {
        warn!(
            explored = search.explored,
            "exhaustive search stopped by budget, returning best route so far"
        );
    }

    let proven = !search.interrupted;
    let (order, _) = search.best.unwrap_or_default();
    let route = Route::from_indices(tasks, &order);
    let total = evaluator.evaluate(&route);
    Solution::new(route, total, proven)
}

struct Backtracker<'a, 'g> {
    tasks: &'a [Task],
    evaluator: &'a RouteEvaluator<'g>,
    budget: &'a SearchBudget,
    placed: Vec<bool>,
    path: Vec<usize>,
    best: Option<(Vec<usize>, f64)>,
    explored: u64,
    interrupted: bool,
}

impl<'a, 'g> Backtracker<'a, 'g> {
    fn new(tasks: &'a [Task], evaluator: &'a RouteEvaluator<'g>, budget: &'a SearchBudget) -> Self {
        Self {
            tasks,
            evaluator,
            budget,
            placed: vec![false; tasks.len()],
            path: Vec::with_capacity(tasks.len()),
            best: None,
            explored: 0,
            interrupted: false,
        }
    }

    fn descend(&mut self, at: usize, cost: f64) {
        let tasks = self.tasks;
        let n = tasks.len();
        if self.path.len() == n {
            if self.best.as_ref().map_or(true, |(_, best)| cost < *best) {
                self.best = Some((self.path.clone(), cost));
            }
            return;
        }
        if let Some((_, best)) = &self.best {
            if cost >= *best {
                return;
            }
        }

        self.explored += 1;
        if self.best.is_some()
            && self.explored % BUDGET_CHECK_INTERVAL == 0
            && self.budget.is_exhausted()
        {
            self.interrupted = true;
            return;
        }

        for i in 0..n {
            if self.placed[i] {
                continue;
            }
            if TaskSet::pickup_of(i).is_some_and(|p| !self.placed[p]) {
                continue;
            }

            let task = &tasks[i];
            let leg = self.evaluator.leg_cost(at, task);
            self.placed[i] = true;
            self.path.push(i);
            self.descend(task.node(), cost + leg);
            self.path.pop();
            self.placed[i] = false;

            if self.interrupted {
                return;
            }
        }
    }
}
