//! Strategy selection and end-to-end planning.
//!
//! - [`Algorithm`] — Strategy names, with `dp` reserved for a future exact solver
//! - [`plan_route`] — Graph, tasks, and search for one delivery batch
//! - [`plan_validated_route`] — Same, after running a [`crate::validation::Validator`]

mod algorithm;
mod planner;

pub use algorithm::Algorithm;
pub use planner::{plan_route, plan_validated_route};
