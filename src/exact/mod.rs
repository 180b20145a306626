//! Exact route search.
//!
//! - [`brute_force`] — Pruned depth-first enumeration of precedence-valid orders
//! - [`SearchBudget`] — Deadline and cancellation limits for the search

mod brute_force;
mod budget;

pub use brute_force::brute_force;
pub use budget::SearchBudget;
