//! Constructive heuristics for building a route quickly.
//!
//! - [`greedy`] — Nearest feasible task with preparation-time waits, O(m²)

mod greedy;

pub use greedy::greedy;
