//! Route cost evaluation.
//!
//! A single scoring function shared by every search strategy.

mod evaluator;

pub use evaluator::RouteEvaluator;
