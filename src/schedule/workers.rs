// src/schedule/workers.rs

//! Worker-pool completion-time simulation.

use petgraph::graph::NodeIndex;
use tracing::{debug, trace};

use crate::errors::{Result, StepdagError};
use crate::graph::TaskGraph;
use crate::schedule::order::stuck_tasks;

/// Options for the worker-pool simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationOptions {
    workers: usize,
}

impl SimulationOptions {
    /// `workers` must be >= 1; zero workers can never make progress.
    pub fn new(workers: usize) -> Result<Self> {
        if workers == 0 {
            return Err(StepdagError::ConfigError(
                "worker count must be >= 1 (got 0)".to_string(),
            ));
        }
        Ok(Self { workers })
    }

    pub fn workers(&self) -> usize {
        self.workers
    }
}

/// Total elapsed time for a fixed pool of workers to complete every task,
/// respecting dependencies.
///
/// Event-driven time jumps over private per-run state: each round the
/// up-to-`workers` cheapest ready tasks progress together by exactly the
/// head task's remaining cost, the clock advances by that amount, and the
/// head completes. Only relative remaining cost decides which task finishes
/// next, which makes per-worker clocks unnecessary.
///
/// The active set is re-drawn from the sorted frontier every round, so a
/// task that has already progressed can be displaced by a newly ready
/// cheaper one; its remaining cost carries over to whenever it is picked
/// up again. Fewer ready tasks than workers just means idle capacity.
pub fn completion_time(graph: &TaskGraph, options: &SimulationOptions) -> Result<u64> {
    let mut remaining_deps = vec![0usize; graph.task_count()];
    let mut remaining_cost = vec![0u64; graph.task_count()];
    let mut ready: Vec<NodeIndex> = Vec::new();

    // Initial frontier sorted by cost; iterating name-sorted nodes makes
    // equal-cost entries land in name order.
    for id in graph.nodes_by_name() {
        let deg = graph.in_degree(id);
        remaining_deps[id.index()] = deg;
        remaining_cost[id.index()] = graph.cost(id);
        if deg == 0 {
            insert_by_cost(&mut ready, &remaining_cost, id);
        }
    }

    let mut elapsed = 0u64;
    let mut completed = 0usize;

    // Each round completes exactly the head task, so the loop terminates
    // after at most task_count rounds; a cycle shows up as leftover tasks
    // below, never as a stall here.
    while !ready.is_empty() {
        let active = ready.len().min(options.workers);
        let delta = remaining_cost[ready[0].index()];

        // All active workers progress together by the head's remaining cost.
        for &id in &ready[..active] {
            remaining_cost[id.index()] -= delta;
        }
        elapsed += delta;

        let head = ready.remove(0);
        completed += 1;
        trace!(task = graph.name(head), delta, elapsed, "task completed");

        let mut newly_ready: Vec<NodeIndex> = Vec::new();
        for succ in graph.successors(head) {
            let deps = &mut remaining_deps[succ.index()];
            *deps -= 1;
            if *deps == 0 {
                newly_ready.push(succ);
            }
        }
        // Successor iteration order is an implementation detail of the
        // graph; sort by name so equal-cost insertions are deterministic.
        newly_ready.sort_by(|a, b| graph.name(*a).cmp(graph.name(*b)));
        for succ in newly_ready {
            insert_by_cost(&mut ready, &remaining_cost, succ);
        }
    }

    if completed != graph.task_count() {
        let stuck = stuck_tasks(graph, &remaining_deps);
        return Err(StepdagError::CycleDetected(format!(
            "{} task(s) never became ready: {}",
            stuck.len(),
            stuck.join(", ")
        )));
    }

    debug!(workers = options.workers, elapsed, "simulation finished");
    Ok(elapsed)
}

/// Stable binary-search insertion keeping `ready` sorted ascending by
/// remaining cost; a new task goes after existing equal-cost entries.
fn insert_by_cost(ready: &mut Vec<NodeIndex>, remaining_cost: &[u64], node: NodeIndex) {
    let cost = remaining_cost[node.index()];
    let pos = ready.partition_point(|&other| remaining_cost[other.index()] <= cost);
    ready.insert(pos, node);
}
