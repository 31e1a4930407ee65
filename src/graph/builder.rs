// src/graph/builder.rs

use petgraph::graph::NodeIndex;
use tracing::debug;

use crate::graph::cost::CostPolicy;
use crate::graph::model::{Task, TaskGraph};
use crate::input::Constraint;

/// Builds a [`TaskGraph`] from "must finish before" constraint pairs.
///
/// Tasks are created lazily on first mention, as either side of a
/// constraint, with their cost derived from the name at creation time.
/// Duplicate constraints and self-edges are absorbed without error (a
/// self-edge later surfaces as a cycle at scheduling time).
#[derive(Debug)]
pub struct GraphBuilder {
    graph: TaskGraph,
    costs: CostPolicy,
}

impl GraphBuilder {
    pub fn new(costs: CostPolicy) -> Self {
        Self {
            graph: TaskGraph::default(),
            costs,
        }
    }

    /// Register one constraint: `before` must finish before `after`.
    pub fn add_constraint(&mut self, before: &str, after: &str) -> &mut Self {
        let src = self.intern(before);
        let dst = self.intern(after);
        // update_edge keeps duplicate constraints idempotent.
        self.graph.graph.update_edge(src, dst, ());
        self
    }

    pub fn add_all<'a>(
        &mut self,
        constraints: impl IntoIterator<Item = &'a Constraint>,
    ) -> &mut Self {
        for c in constraints {
            self.add_constraint(&c.before, &c.after);
        }
        self
    }

    pub fn build(self) -> TaskGraph {
        debug!(
            tasks = self.graph.task_count(),
            edges = self.graph.edge_count(),
            "built task graph"
        );
        self.graph
    }

    /// Get-or-create the node for a name.
    fn intern(&mut self, name: &str) -> NodeIndex {
        if let Some(&id) = self.graph.index.get(name) {
            return id;
        }

        let task = Task {
            name: name.to_string(),
            cost: self.costs.cost_of(name),
        };
        let id = self.graph.graph.add_node(task);
        self.graph.index.insert(name.to_string(), id);
        id
    }
}

/// Convenience: build a graph straight from parsed constraints.
pub fn graph_from_constraints(constraints: &[Constraint], costs: CostPolicy) -> TaskGraph {
    let mut builder = GraphBuilder::new(costs);
    builder.add_all(constraints);
    builder.build()
}
