//! Domain model types for single-driver delivery routing.
//!
//! Provides the locations (driver, restaurants, customers), orders, the
//! pickup/dropoff tasks derived from them, routes as ordered task sequences,
//! and the solution and report types returned by the planner.

mod input;
mod location;
mod order;
mod route;
mod solution;
mod task;

pub use input::{DeliveryConfig, DeliveryInput, DriverLimits};
pub use location::{Coordinate, Customer, Driver, NodeKey, Preparation, Restaurant};
pub use order::Order;
pub use route::{Route, RouteStep};
pub use solution::{RouteReport, Solution};
pub use task::{Task, TaskKind, TaskSet};
