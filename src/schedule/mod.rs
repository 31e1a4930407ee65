// src/schedule/mod.rs

//! Scheduling algorithms over a [`TaskGraph`](crate::graph::TaskGraph).
//!
//! - [`order`] emits the deterministic topological execution order
//!   (lexicographic tie-break among ready tasks).
//! - [`workers`] simulates a fixed pool of workers and reports the total
//!   elapsed time to complete every task.
//!
//! The two are alternative consumers of the same immutable graph, not a
//! pipeline; each keeps its own private per-run traversal state.

pub mod order;
pub mod workers;

pub use order::execution_order;
pub use workers::{SimulationOptions, completion_time};
