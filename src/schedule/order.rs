// src/schedule/order.rs

//! Deterministic topological execution order.

use petgraph::graph::NodeIndex;
use tracing::{debug, trace};

use crate::errors::{Result, StepdagError};
use crate::graph::TaskGraph;

/// Compute the unique execution order consistent with the dependency
/// constraints, breaking ties among simultaneously ready tasks by picking
/// the lexicographically smallest name. The tie-break is the defining
/// correctness property, not an optimization.
///
/// Kahn's algorithm over a private in-degree table; the graph itself is
/// never mutated. Fails with [`StepdagError::CycleDetected`] if some tasks
/// can never become ready.
pub fn execution_order(graph: &TaskGraph) -> Result<Vec<String>> {
    let mut remaining_deps = vec![0usize; graph.task_count()];
    let mut ready: Vec<NodeIndex> = Vec::new();

    // nodes_by_name is already name-sorted, so the initial frontier is too.
    for id in graph.nodes_by_name() {
        let deg = graph.in_degree(id);
        remaining_deps[id.index()] = deg;
        if deg == 0 {
            ready.push(id);
        }
    }

    let mut order = Vec::with_capacity(graph.task_count());

    while !ready.is_empty() {
        let next = ready.remove(0);
        trace!(task = graph.name(next), "emitting task");
        order.push(graph.name(next).to_string());

        for succ in graph.successors(next) {
            let deps = &mut remaining_deps[succ.index()];
            *deps -= 1;
            if *deps == 0 {
                insert_by_name(graph, &mut ready, succ);
            }
        }
    }

    if order.len() != graph.task_count() {
        let stuck = stuck_tasks(graph, &remaining_deps);
        return Err(StepdagError::CycleDetected(format!(
            "{} task(s) never became ready: {}",
            stuck.len(),
            stuck.join(", ")
        )));
    }

    debug!(tasks = order.len(), "computed execution order");
    Ok(order)
}

/// Binary-search insertion keeping `ready` sorted ascending by task name.
fn insert_by_name(graph: &TaskGraph, ready: &mut Vec<NodeIndex>, node: NodeIndex) {
    let name = graph.name(node);
    let pos = ready.partition_point(|&other| graph.name(other) < name);
    ready.insert(pos, node);
}

/// Names of tasks still waiting on predecessors, for cycle diagnostics.
pub(crate) fn stuck_tasks(graph: &TaskGraph, remaining_deps: &[usize]) -> Vec<String> {
    graph
        .nodes_by_name()
        .into_iter()
        .filter(|id| remaining_deps[id.index()] > 0)
        .map(|id| graph.name(id).to_string())
        .collect()
}
