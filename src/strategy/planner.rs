//! End-to-end planning from a delivery batch.

use crate::distance::CostGraph;
use crate::error::RoutingError;
use crate::exact::SearchBudget;
use crate::models::{DeliveryInput, Solution, TaskSet};
use crate::validation::Validator;

use super::Algorithm;

/// Plans a route for an already validated batch.
///
/// Builds the cost graph, expands orders into tasks, and runs the strategy
/// named in `input.config.algorithm`. `config.time_limit_ms`, when set,
/// bounds the exhaustive search.
///
/// # Errors
///
/// [`RoutingError::UnsupportedAlgorithm`], [`RoutingError::InvalidDriverSpeed`],
/// [`RoutingError::DanglingReference`], or [`RoutingError::SearchStalled`].
///
/// # Examples
///
/// ```
/// use u_delivery::models::DeliveryInput;
/// use u_delivery::strategy::plan_route;
///
/// let json = r#"{
///     "config": { "algorithm": "brute_force" },
///     "driver": { "location": { "latitude": 0.0, "longitude": 0.0 }, "avg_speed": 30 },
///     "restaurants": [ { "id": 1, "name": "R1",
///         "location": { "latitude": 0.0, "longitude": 0.01 },
///         "preparation": { "avg_time": 5, "peak_factor": 1.0 } } ],
///     "customers": [ { "id": "C1", "name": "Ann",
///         "location": { "latitude": 0.0, "longitude": 0.02 } } ],
///     "orders": [ { "order_id": 1, "restaurant_id": 1, "customer_id": "C1" } ]
/// }"#;
/// let input = DeliveryInput::from_json_str(json).unwrap();
/// let solution = plan_route(&input).unwrap();
/// assert_eq!(solution.route().len(), 2);
/// assert!((solution.total_minutes() - 7.2239).abs() < 1e-3);
/// ```
pub fn plan_route(input: &DeliveryInput) -> Result<Solution, RoutingError> {
    let algorithm: Algorithm = input.config.algorithm.parse()?;
    let graph = CostGraph::build(&input.driver, &input.restaurants, &input.customers)?;
    let tasks = TaskSet::generate(&input.orders, &input.restaurants, &input.customers, &graph)?;
    let budget = input
        .config
        .time_limit()
        .map_or_else(SearchBudget::unlimited, SearchBudget::with_time_limit);
    algorithm.solve(&graph, &tasks, &budget)
}

/// Validates the batch with `validator`, then plans it.
///
/// # Errors
///
/// [`RoutingError::Validation`] if the batch is rejected, otherwise as
/// [`plan_route`].
pub fn plan_validated_route(
    input: &DeliveryInput,
    validator: &Validator,
) -> Result<Solution, RoutingError> {
    validator.validate(input)?;
    plan_route(input)
}
