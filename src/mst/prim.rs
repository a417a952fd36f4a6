use super::tree::{SpanningTree, TreeEdge};
use crate::{
    error::{Err, Result},
    graph::Graph,
    ordered_set::OrderedSet,
    types::{Cost, EIdx, VId, VIdx},
};
use log::{debug, info, trace, warn};
use std::{cmp::Reverse, collections::BinaryHeap};

/// Prim's algorithm over a borrowed [`Graph`].
///
/// The spanned set holds vertex ids, the frontier holds edge handles keyed by
/// cost. Edges whose both endpoints got spanned in the meantime are dropped
/// when they surface.
pub struct Prim<'a> {
    graph: &'a Graph,
    spanned: OrderedSet<VId>,
    frontier: BinaryHeap<Reverse<(Cost, EIdx)>>,
    total_cost: Cost,
    tree: Vec<TreeEdge>,
}

impl<'a> Prim<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        Self {
            graph,
            spanned: OrderedSet::with_capacity(graph.num_vertices()),
            frontier: BinaryHeap::new(),
            total_cost: 0,
            tree: Vec::with_capacity(graph.num_vertices().saturating_sub(1)),
        }
    }

    /// Grow the tree from `root` until it spans `vertex_count` vertices.
    ///
    /// `vertex_count` must be the number of vertices of the graph.
    ///
    /// # Panics
    ///
    /// Panics if `root` is not a vertex handle of the graph.
    pub fn run_from(mut self, root: VIdx, vertex_count: usize) -> Result<SpanningTree> {
        self.graph.check_vertex_count(vertex_count)?;
        info!(
            "spanning {} vertices from root {}",
            vertex_count,
            self.graph.vertex(root).id()
        );
        self.spanned.add_at(0, self.graph.vertex(root).id());
        self.push_incident_edges(root, None);
        while self.spanned.len() < vertex_count {
            let e = match self.frontier.pop() {
                Some(Reverse((_, e))) => e,
                None => {
                    warn!(
                        "frontier exhausted: {} of {} vertices reachable from root",
                        self.graph.reachable_from(root),
                        vertex_count
                    );
                    return Err(Err::DisconnectedGraph {
                        spanned: self.spanned.len(),
                        expected: vertex_count,
                    });
                }
            };
            let edge = self.graph.edge(e);
            let (from, to) = if self.is_spanned(edge.node1()) {
                (edge.node1(), edge.node2())
            } else {
                (edge.node2(), edge.node1())
            };
            if self.is_spanned(to) {
                trace!("discarding edge {}: both ends spanned", e);
                continue;
            }
            let to_id = self.graph.vertex(to).id();
            self.spanned.add(to_id);
            self.total_cost = self
                .total_cost
                .checked_add(edge.cost())
                .ok_or(Err::CostOverflow)?;
            self.tree.push(TreeEdge {
                node1: self.graph.vertex(from).id(),
                node2: to_id,
                cost: edge.cost(),
            });
            debug!(
                "spanned vertex {} at cost {} (total {})",
                to_id,
                edge.cost(),
                self.total_cost
            );
            self.push_incident_edges(to, Some(e));
        }
        info!("accumulated cost {}", self.total_cost);
        Ok(SpanningTree::new(self.total_cost, self.tree))
    }
}

// private methods
impl<'a> Prim<'a> {
    fn is_spanned(&self, v: VIdx) -> bool {
        self.spanned.contains(&self.graph.vertex(v).id())
    }

    fn push_incident_edges(&mut self, v: VIdx, consumed: Option<EIdx>) {
        for &e in self.graph.incident_edges(v) {
            if Some(e) != consumed {
                self.frontier.push(Reverse((self.graph.edge(e).cost(), e)));
            }
        }
    }
}

/// Run Prim's algorithm from the root of `graph`.
///
/// An empty graph has no root; it is accepted as a tree of cost zero when at
/// most one vertex is expected.
pub fn prim(graph: &Graph, vertex_count: usize) -> Result<SpanningTree> {
    match graph.root() {
        Some(root) => Prim::new(graph).run_from(root, vertex_count),
        None => graph
            .check_vertex_count(vertex_count)
            .map(|_| SpanningTree::default()),
    }
}

/// Run Prim's algorithm from the vertex with id `root`, or from the root of
/// `graph` when `root` is `None`.
pub fn prim_from(graph: &Graph, root: Option<VId>, vertex_count: usize) -> Result<SpanningTree> {
    match root {
        Some(id) => {
            let root = graph.find_vertex(id).ok_or(Err::UnknownRoot(id))?;
            Prim::new(graph).run_from(root, vertex_count)
        }
        None => prim(graph, vertex_count),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_graph(edges: &[(VId, VId, Cost)]) -> Graph {
        let mut graph = Graph::new();
        for &(a, b, cost) in edges {
            let a = graph.find_or_create_vertex(a);
            let b = graph.find_or_create_vertex(b);
            graph.connect(a, b, cost).unwrap();
        }
        graph
    }

    #[test]
    fn test_four_vertices() {
        let graph = create_graph(&[(1, 2, 1), (2, 3, 2), (3, 4, 3), (1, 4, 10), (1, 3, 4)]);
        let tree = prim(&graph, 4).unwrap();
        assert_eq!(tree.total_cost(), 6);
        assert_eq!(
            tree.edges(),
            &[
                TreeEdge {
                    node1: 1,
                    node2: 2,
                    cost: 1
                },
                TreeEdge {
                    node1: 2,
                    node2: 3,
                    cost: 2
                },
                TreeEdge {
                    node1: 3,
                    node2: 4,
                    cost: 3
                },
            ]
        );
    }

    #[test]
    fn test_root_with_smallest_id_is_spanned() {
        // Vertex 1 sits at index 0 of the spanned set; the edge back to it
        // must be recognised as stale.
        let graph = create_graph(&[(1, 5, 1), (5, 9, 1), (9, 1, 1)]);
        let tree = prim(&graph, 3).unwrap();
        assert_eq!(tree.total_cost(), 2);
        assert_eq!(tree.edges().len(), 2);
    }

    #[test]
    fn test_stale_edges_are_discarded() {
        let graph = create_graph(&[(1, 2, 1), (1, 3, 1), (2, 3, 1), (3, 4, 8)]);
        let tree = prim(&graph, 4).unwrap();
        assert_eq!(tree.total_cost(), 10);
        assert_eq!(tree.edges().len(), 3);
    }

    #[test]
    fn test_parallel_edges() {
        let graph = create_graph(&[(1, 2, 9), (2, 1, 3), (1, 2, 5)]);
        assert_eq!(prim(&graph, 2).unwrap().total_cost(), 3);
    }

    #[test]
    fn test_run_from_other_root() {
        let graph = create_graph(&[(1, 2, 1), (2, 3, 2), (3, 4, 3), (1, 4, 10), (1, 3, 4)]);
        for id in 1..=4 {
            let root = graph.find_vertex(id).unwrap();
            let tree = Prim::new(&graph).run_from(root, 4).unwrap();
            assert_eq!(tree.total_cost(), 6);
            assert_eq!(tree.normalized_edges(), vec![(1, 2, 1), (2, 3, 2), (3, 4, 3)]);
        }
    }

    #[test]
    fn test_prim_from_unknown_root() {
        let graph = create_graph(&[(1, 2, 1)]);
        assert_eq!(prim_from(&graph, Some(3), 2), Err(Err::UnknownRoot(3)));
        assert_eq!(prim_from(&graph, Some(2), 2).unwrap().total_cost(), 1);
        assert_eq!(prim_from(&graph, None, 2).unwrap().total_cost(), 1);
    }

    #[test]
    fn test_disconnected() {
        let graph = create_graph(&[(1, 2, 1), (3, 4, 1)]);
        assert_eq!(
            prim(&graph, 4),
            Err(Err::DisconnectedGraph {
                spanned: 2,
                expected: 4
            })
        );
    }

    #[test]
    fn test_empty_graph() {
        let graph = Graph::new();
        assert_eq!(prim(&graph, 0).unwrap().total_cost(), 0);
        assert_eq!(prim(&graph, 1).unwrap().total_cost(), 0);
        assert_eq!(
            prim(&graph, 2),
            Err(Err::VertexCountMismatch {
                declared: 2,
                observed: 0
            })
        );
    }

    #[test]
    fn test_vertex_count_must_match_graph() {
        let graph = create_graph(&[(1, 2, 1), (2, 3, 2), (3, 4, 3)]);
        assert_eq!(
            prim(&graph, 2),
            Err(Err::VertexCountMismatch {
                declared: 2,
                observed: 4
            })
        );
        assert_eq!(
            Prim::new(&graph).run_from(0, 3),
            Err(Err::VertexCountMismatch {
                declared: 3,
                observed: 4
            })
        );
        assert_eq!(
            prim_from(&graph, Some(4), 5),
            Err(Err::VertexCountMismatch {
                declared: 5,
                observed: 4
            })
        );
        assert_eq!(prim(&graph, 4).unwrap().total_cost(), 6);
    }

    #[test]
    fn test_overflow() {
        let graph = create_graph(&[(1, 2, Cost::MAX), (2, 3, 1)]);
        assert_eq!(prim(&graph, 3), Err(Err::CostOverflow));
    }

    #[test]
    fn test_zero_cost_edges() {
        let graph = create_graph(&[(1, 2, 0), (2, 3, 0)]);
        assert_eq!(prim(&graph, 3).unwrap().total_cost(), 0);
    }
}
