//! # u-delivery
//!
//! Route planning for a single delivery driver serving a batch of food
//! orders. Each order adds a pickup at its restaurant and a dropoff at its
//! customer; the pickup must come first, and the driver waits at a
//! restaurant until the food is ready.
//!
//! ## Modules
//!
//! - [`models`] — Domain types (locations, orders, tasks, routes, solutions, input)
//! - [`distance`] — Haversine distance and the travel-time cost graph
//! - [`evaluation`] — Route cost with the preparation-time floor
//! - [`exact`] — Exhaustive precedence-pruned search with a time budget
//! - [`constructive`] — Greedy nearest-feasible-task heuristic
//! - [`strategy`] — Algorithm selection and end-to-end planning
//! - [`validation`] — Range and reference checks for incoming batches
//! - [`error`] — Error type

pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod exact;
pub mod models;
pub mod strategy;
pub mod validation;

pub use error::RoutingError;
