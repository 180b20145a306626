//! Search results and their report view.

use serde::Serialize;

use super::{Route, RouteStep};
use crate::error::RoutingError;

/// A route chosen by a search strategy together with its total time.
///
/// # Examples
///
/// ```
/// use u_delivery::models::{Route, Solution};
///
/// let sol = Solution::new(Route::new(), 0.0, true);
/// assert!(sol.route().is_empty());
/// assert_eq!(sol.total_minutes(), 0.0);
/// assert!(sol.is_proven_optimal());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    route: Route,
    total_minutes: f64,
    proven_optimal: bool,
}

impl Solution {
    /// Creates a solution.
    pub fn new(route: Route, total_minutes: f64, proven_optimal: bool) -> Self {
        Self {
            route,
            total_minutes,
            proven_optimal,
        }
    }

    /// The chosen route.
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Total elapsed minutes from the driver's start to the last task.
    pub fn total_minutes(&self) -> f64 {
        self.total_minutes
    }

    /// `true` only when an exhaustive search ran to completion.
    pub fn is_proven_optimal(&self) -> bool {
        self.proven_optimal
    }

    /// Consumes the solution, returning the route.
    pub fn into_route(self) -> Route {
        self.route
    }

    /// Report view for writers.
    pub fn report(&self) -> RouteReport {
        RouteReport {
            route: self.route.steps(),
            total_time_minutes: self.total_minutes,
        }
    }
}

/// Serializable summary of a [`Solution`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteReport {
    /// Steps in visiting order.
    pub route: Vec<RouteStep>,
    /// Total elapsed minutes.
    pub total_time_minutes: f64,
}

impl RouteReport {
    /// Pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// [`RoutingError::Parse`] if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, RoutingError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report() {
        let sol = Solution::new(Route::new(), 0.0, true);
        let report = sol.report();
        assert!(report.route.is_empty());
        assert_eq!(report.total_time_minutes, 0.0);

        let json = report.to_json_pretty().expect("serializable");
        let v: serde_json::Value = serde_json::from_str(&json).expect("round trip");
        assert_eq!(v["total_time_minutes"], 0.0);
        assert!(v["route"].as_array().is_some_and(Vec::is_empty));
    }

    #[test]
    fn test_not_proven() {
        let sol = Solution::new(Route::new(), 3.5, false);
        assert!(!sol.is_proven_optimal());
        assert_eq!(sol.total_minutes(), 3.5);
        assert!(sol.into_route().is_empty());
    }
}
