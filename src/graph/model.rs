// src/graph/model.rs

use std::collections::HashMap;

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};

/// One task: a name and an intrinsic processing cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub name: String,
    pub cost: u64,
}

/// Immutable dependency graph of tasks, keyed by task name.
///
/// Backed by a petgraph arena: every task gets a stable [`NodeIndex`], and
/// an edge `pred -> succ` means `pred` must finish before `succ` can begin.
///
/// The graph is a structural snapshot. Schedulers copy whatever traversal
/// state they need (remaining in-degrees, remaining costs) instead of
/// mutating nodes, so a single graph can serve any number of independent
/// scheduling runs.
#[derive(Debug, Clone, Default)]
pub struct TaskGraph {
    pub(crate) graph: DiGraph<Task, ()>,
    pub(crate) index: HashMap<String, NodeIndex>,
}

impl TaskGraph {
    /// Number of distinct tasks.
    pub fn task_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of distinct constraints (duplicates collapse into one edge).
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Node id for a task name, if present.
    pub fn node(&self, name: &str) -> Option<NodeIndex> {
        self.index.get(name).copied()
    }

    /// Task data for a node id.
    ///
    /// Ids only come from this graph; a foreign `NodeIndex` is a logic bug
    /// and panics.
    pub fn task(&self, id: NodeIndex) -> &Task {
        &self.graph[id]
    }

    pub fn name(&self, id: NodeIndex) -> &str {
        &self.graph[id].name
    }

    pub fn cost(&self, id: NodeIndex) -> u64 {
        self.graph[id].cost
    }

    /// Number of predecessors a fresh scheduling run starts with.
    pub fn in_degree(&self, id: NodeIndex) -> usize {
        self.graph
            .neighbors_directed(id, Direction::Incoming)
            .count()
    }

    /// Tasks that depend on `id` (must wait for it to finish).
    pub fn successors(&self, id: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.neighbors_directed(id, Direction::Outgoing)
    }

    /// Tasks that `id` depends on.
    pub fn predecessors(&self, id: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.neighbors_directed(id, Direction::Incoming)
    }

    /// Whether the constraint `before -> after` is present.
    pub fn has_edge(&self, before: &str, after: &str) -> bool {
        match (self.node(before), self.node(after)) {
            (Some(a), Some(b)) => self.graph.contains_edge(a, b),
            _ => false,
        }
    }

    /// All node ids sorted by task name.
    ///
    /// Petgraph iterates nodes in insertion order; sorting by name gives
    /// callers a deterministic view independent of constraint order.
    pub fn nodes_by_name(&self) -> Vec<NodeIndex> {
        let mut ids: Vec<NodeIndex> = self.graph.node_indices().collect();
        ids.sort_by(|a, b| self.name(*a).cmp(self.name(*b)));
        ids
    }

    /// All task names, sorted.
    pub fn task_names(&self) -> Vec<&str> {
        self.nodes_by_name()
            .into_iter()
            .map(|id| self.name(id))
            .collect()
    }
}
