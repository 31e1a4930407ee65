#![allow(dead_code)]

use stepdag::graph::{CostPolicy, TaskGraph, graph_from_constraints};
use stepdag::input::Constraint;

/// Builder for constraint lists to simplify test setup.
pub struct ConstraintsBuilder {
    constraints: Vec<Constraint>,
}

impl ConstraintsBuilder {
    pub fn new() -> Self {
        Self {
            constraints: Vec::new(),
        }
    }

    /// Add a constraint: `before` must finish before `after` can begin.
    pub fn then(mut self, before: &str, after: &str) -> Self {
        self.constraints.push(Constraint {
            before: before.to_string(),
            after: after.to_string(),
        });
        self
    }

    pub fn build(self) -> Vec<Constraint> {
        self.constraints
    }

    /// Render the constraints as input-file lines in the canonical grammar.
    pub fn to_input(&self) -> String {
        self.constraints
            .iter()
            .map(|c| {
                format!(
                    "Step {} must be finished before step {} can begin.\n",
                    c.before, c.after
                )
            })
            .collect()
    }

    /// Build a [`TaskGraph`] straight away with the given cost base.
    pub fn graph(self, cost_base: u64) -> TaskGraph {
        graph_from_constraints(&self.constraints, CostPolicy::new(cost_base))
    }
}

impl Default for ConstraintsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The six-task sample used across the integration tests:
///
/// ```text
/// C -> A -> B -> E
///      A -> D -> E
/// C -> F ------> E
/// ```
///
/// With cost base 0 the costs are A=1, B=2, C=3, D=4, E=5, F=6.
pub fn sample_constraints() -> ConstraintsBuilder {
    ConstraintsBuilder::new()
        .then("C", "A")
        .then("C", "F")
        .then("A", "B")
        .then("A", "D")
        .then("B", "E")
        .then("D", "E")
        .then("F", "E")
}
