//! Error type shared by the graph builder, task generator, and search strategies.

use std::fmt;

use thiserror::Error;

use crate::validation::ValidationError;

/// Kind of entity an order points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceTarget {
    /// A restaurant, referenced by integer id.
    Restaurant,
    /// A customer, referenced by string id.
    Customer,
}

impl fmt::Display for ReferenceTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Restaurant => f.write_str("restaurant"),
            Self::Customer => f.write_str("customer"),
        }
    }
}

/// Errors surfaced by route planning.
///
/// None of these abort the process; the caller decides what to do.
#[derive(Debug, Error)]
pub enum RoutingError {
    /// The driver's average speed is zero, negative, or not a number.
    #[error("driver average speed must be positive, got {speed} km/h")]
    InvalidDriverSpeed {
        /// Offending speed in km/h.
        speed: f64,
    },

    /// An order names a restaurant or customer missing from the batch.
    #[error("order {order_id} references unknown {target} `{id}`")]
    DanglingReference {
        /// Order holding the reference.
        order_id: u32,
        /// What kind of entity was expected.
        target: ReferenceTarget,
        /// The id that failed to resolve.
        id: String,
    },

    /// The algorithm name is unknown or not implemented yet.
    #[error("unsupported algorithm `{0}`")]
    UnsupportedAlgorithm(String),

    /// The greedy search ran out of feasible tasks before finishing.
    ///
    /// Cannot happen for task sets built by [`crate::models::TaskSet::generate`].
    #[error("search stalled with {remaining} tasks left and none feasible")]
    SearchStalled {
        /// Number of unscheduled tasks.
        remaining: usize,
    },

    /// Input rejected by [`crate::validation::Validator`].
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Input JSON could not be decoded.
    #[error("failed to parse delivery input: {0}")]
    Parse(#[from] serde_json::Error),
}
