use crate::types::{Cost, VId};
use derive_more::Display;

/// An edge chosen by the spanning tree, `node1` being the endpoint that was
/// already in the tree.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
#[display(fmt = "[{} --({})-- {}]", node1, cost, node2)]
pub struct TreeEdge {
    pub node1: VId,
    pub node2: VId,
    pub cost: Cost,
}

#[derive(Debug, Display, Clone, Default, PartialEq, Eq)]
#[display(fmt = "Accumulated cost: {}", total_cost)]
pub struct SpanningTree {
    total_cost: Cost,
    edges: Vec<TreeEdge>,
}

impl SpanningTree {
    pub(crate) fn new(total_cost: Cost, edges: Vec<TreeEdge>) -> Self {
        Self { total_cost, edges }
    }

    pub fn total_cost(&self) -> Cost {
        self.total_cost
    }

    /// Edges in the order they joined the tree.
    pub fn edges(&self) -> &[TreeEdge] {
        &self.edges
    }

    /// Edges as `(min id, max id, cost)`, sorted.
    pub fn normalized_edges(&self) -> Vec<(VId, VId, Cost)> {
        let mut edges: Vec<_> = self
            .edges
            .iter()
            .map(|e| (e.node1.min(e.node2), e.node1.max(e.node2), e.cost))
            .collect();
        edges.sort();
        edges
    }
}
