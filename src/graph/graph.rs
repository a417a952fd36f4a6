use super::display;
use crate::{
    error::{Err, Result},
    types::{Cost, EIdx, VId, VIdx},
};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    id: VId,
    edges: Vec<EIdx>,
}

impl Vertex {
    fn new(id: VId) -> Self {
        Self { id, edges: vec![] }
    }

    pub fn id(&self) -> VId {
        self.id
    }

    /// Handles of the incident edges, in the order they were attached.
    pub fn edges(&self) -> &[EIdx] {
        &self.edges
    }
}

/// An undirected edge. Which endpoint is `node1` is incidental.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    node1: VIdx,
    node2: VIdx,
    cost: Cost,
}

impl Edge {
    pub fn node1(&self) -> VIdx {
        self.node1
    }

    pub fn node2(&self) -> VIdx {
        self.node2
    }

    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// The endpoint opposite to `v`.
    pub fn other(&self, v: VIdx) -> VIdx {
        if self.node1 == v {
            self.node2
        } else {
            self.node1
        }
    }
}

/// Vertex and edge arenas plus an id index.
///
/// Vertices refer to their edges by handle and edges refer to their endpoints
/// by handle, so the graph is the single owner of everything.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
    index: HashMap<VId, VIdx>,
}

impl Graph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// The first vertex added, where traversals start by default.
    pub fn root(&self) -> Option<VIdx> {
        if self.vertices.is_empty() {
            None
        } else {
            Some(0)
        }
    }

    pub fn find_vertex(&self, id: VId) -> Option<VIdx> {
        self.index.get(&id).copied()
    }

    pub fn add_vertex(&mut self, id: VId) -> Result<VIdx> {
        if self.index.contains_key(&id) {
            return Err(Err::DuplicateVertex(id));
        }
        Ok(self.push_vertex(id))
    }

    pub fn find_or_create_vertex(&mut self, id: VId) -> VIdx {
        match self.find_vertex(id) {
            Some(v) => v,
            None => self.push_vertex(id),
        }
    }

    /// Attach a new edge between `a` and `b`.
    pub fn connect(&mut self, a: VIdx, b: VIdx, cost: Cost) -> Result<EIdx> {
        let (id_a, id_b) = match (self.vertices.get(a), self.vertices.get(b)) {
            (Some(va), Some(vb)) => (va.id, vb.id),
            _ => {
                return Err(Err::InvalidEdge(format!(
                    "endpoint {} or {} is not a vertex of this graph",
                    a, b
                )))
            }
        };
        if a == b {
            return Err(Err::InvalidEdge(format!("self-loop on vertex {}", id_a)));
        }
        if cost < 0 {
            return Err(Err::InvalidEdge(format!(
                "negative cost {} between {} and {}",
                cost, id_a, id_b
            )));
        }
        let e = self.edges.len();
        self.edges.push(Edge {
            node1: a,
            node2: b,
            cost,
        });
        self.vertices[a].edges.push(e);
        self.vertices[b].edges.push(e);
        Ok(e)
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Check that the graph has `declared` vertices.
    ///
    /// A lone vertex never shows up in an edge, so an empty graph passes for
    /// a declared count of one (or zero).
    pub fn check_vertex_count(&self, declared: usize) -> Result<()> {
        let observed = self.vertices.len();
        if observed == declared || (observed == 0 && declared <= 1) {
            Ok(())
        } else {
            Err(Err::VertexCountMismatch { declared, observed })
        }
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// # Panics
    ///
    /// Panics if `v` is not a vertex handle of this graph.
    pub fn vertex(&self, v: VIdx) -> &Vertex {
        &self.vertices[v]
    }

    /// # Panics
    ///
    /// Panics if `e` is not an edge handle of this graph.
    pub fn edge(&self, e: EIdx) -> &Edge {
        &self.edges[e]
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// # Panics
    ///
    /// Panics if `v` is not a vertex handle of this graph.
    pub fn incident_edges(&self, v: VIdx) -> &[EIdx] {
        &self.vertices[v].edges
    }

    /// Number of vertices reachable from `v`, `v` included.
    pub fn reachable_from(&self, v: VIdx) -> usize {
        let mut visited = vec![false; self.vertices.len()];
        let mut stack = vec![v];
        visited[v] = true;
        let mut count = 0;
        while let Some(u) = stack.pop() {
            count += 1;
            for &e in &self.vertices[u].edges {
                let n = self.edges[e].other(u);
                if !visited[n] {
                    visited[n] = true;
                    stack.push(n);
                }
            }
        }
        count
    }
}

// private methods
impl Graph {
    fn push_vertex(&mut self, id: VId) -> VIdx {
        let v = self.vertices.len();
        self.vertices.push(Vertex::new(id));
        self.index.insert(id, v);
        v
    }
}

impl std::fmt::Display for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        display(self, f)
    }
}
