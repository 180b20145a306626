//! Distances and travel times.
//!
//! Provides the haversine great-circle distance and the dense travel-time
//! graph every search strategy reads from.

mod graph;
mod haversine;

pub use graph::CostGraph;
pub use haversine::{haversine_km, EARTH_RADIUS_KM};
