// src/graph/mod.rs

//! Task graph representation.
//!
//! - [`model`] holds the immutable arena-backed graph of named tasks.
//! - [`builder`] materializes a graph from constraint pairs, creating
//!   tasks on first mention.
//! - [`cost`] derives each task's processing cost from its name.

pub mod builder;
pub mod cost;
pub mod model;

pub use builder::{GraphBuilder, graph_from_constraints};
pub use cost::CostPolicy;
pub use model::{Task, TaskGraph};
