//! Algorithm names and dispatch.

use std::fmt;
use std::str::FromStr;

use tracing::info;

use crate::constructive::greedy;
use crate::distance::CostGraph;
use crate::error::RoutingError;
use crate::evaluation::RouteEvaluator;
use crate::exact::{brute_force, SearchBudget};
use crate::models::{Solution, TaskSet};

/// A route search strategy, selected by name.
///
/// # Examples
///
/// ```
/// use u_delivery::strategy::Algorithm;
///
/// assert_eq!("greedy".parse::<Algorithm>().unwrap(), Algorithm::Greedy);
/// assert_eq!("brute_force".parse::<Algorithm>().unwrap(), Algorithm::BruteForce);
/// assert!("simulated_annealing".parse::<Algorithm>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Nearest feasible task (`greedy`).
    Greedy,
    /// Exhaustive precedence-pruned search (`brute_force`).
    BruteForce,
    /// Exact dynamic program over pickup/dropoff completion states (`dp`).
    ///
    /// Reserved name. Solving with it returns
    /// [`RoutingError::UnsupportedAlgorithm`] until implemented.
    DynamicProgramming,
}

impl Algorithm {
    /// Every known algorithm, implemented or not.
    pub const ALL: [Algorithm; 3] = [Self::Greedy, Self::BruteForce, Self::DynamicProgramming];

    /// Name used in configuration.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Greedy => "greedy",
            Self::BruteForce => "brute_force",
            Self::DynamicProgramming => "dp",
        }
    }

    /// Returns `true` if [`Algorithm::solve`] can run this strategy.
    pub fn is_implemented(&self) -> bool {
        !matches!(self, Self::DynamicProgramming)
    }

    /// Runs the strategy over a prepared graph and task set.
    ///
    /// `budget` only affects [`Algorithm::BruteForce`].
    ///
    /// # Errors
    ///
    /// [`RoutingError::UnsupportedAlgorithm`] for
    /// [`Algorithm::DynamicProgramming`]; [`RoutingError::SearchStalled`]
    /// from the greedy search.
    pub fn solve(
        &self,
        graph: &CostGraph,
        tasks: &TaskSet,
        budget: &SearchBudget,
    ) -> Result<Solution, RoutingError> {
        let evaluator = RouteEvaluator::new(graph);
        let solution = match self {
            Self::Greedy => greedy(tasks, &evaluator)?,
            Self::BruteForce => brute_force(tasks, &evaluator, budget),
            Self::DynamicProgramming => {
                return Err(RoutingError::UnsupportedAlgorithm(self.name().to_string()))
            }
        };
        info!(
            algorithm = self.name(),
            orders = tasks.num_orders(),
            total_minutes = solution.total_minutes(),
            proven_optimal = solution.is_proven_optimal(),
            "route planned"
        );
        Ok(solution)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = RoutingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| RoutingError::UnsupportedAlgorithm(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Coordinate, Customer, Driver, Order, Restaurant};

    fn prepared() -> (CostGraph, TaskSet) {
        let driver = Driver::new(Coordinate::new(0.0, 0.0), 30.0);
        let restaurants = vec![Restaurant::new(1, "R1", Coordinate::new(0.0, 0.01), 5)];
        let customers = vec![Customer::new("C1", "Ann", Coordinate::new(0.0, 0.02))];
        let orders = vec![Order::new(1, 1, "C1")];
        let graph = CostGraph::build(&driver, &restaurants, &customers).expect("valid speed");
        let tasks = TaskSet::generate(&orders, &restaurants, &customers, &graph).expect("valid");
        (graph, tasks)
    }

    #[test]
    fn test_parse_names() {
        for a in Algorithm::ALL {
            assert_eq!(a.name().parse::<Algorithm>().expect("known"), a);
            assert_eq!(a.to_string(), a.name());
        }
    }

    #[test]
    fn test_parse_unknown() {
        let err = "Greedy".parse::<Algorithm>().unwrap_err();
        assert!(matches!(err, RoutingError::UnsupportedAlgorithm(name) if name == "Greedy"));
    }

    #[test]
    fn test_dp_reserved() {
        let (graph, tasks) = prepared();
        assert!(!Algorithm::DynamicProgramming.is_implemented());
        let err = Algorithm::DynamicProgramming
            .solve(&graph, &tasks, &SearchBudget::unlimited())
            .unwrap_err();
        assert!(matches!(err, RoutingError::UnsupportedAlgorithm(name) if name == "dp"));
    }

    #[test]
    fn test_both_strategies_agree_on_single_order() {
        let (graph, tasks) = prepared();
        let budget = SearchBudget::unlimited();
        let g = Algorithm::Greedy.solve(&graph, &tasks, &budget).expect("implemented");
        let b = Algorithm::BruteForce.solve(&graph, &tasks, &budget).expect("implemented");
        assert_eq!(g.route(), b.route());
        assert!((g.total_minutes() - 7.2239).abs() < 1e-3);
        assert!((g.total_minutes() - b.total_minutes()).abs() < 1e-12);
        assert!(b.is_proven_optimal());
    }
}
