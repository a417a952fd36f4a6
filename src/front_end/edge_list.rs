use crate::types::EdgeDef;

/// The parsed input: declared counts followed by the edges.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeList {
    num_vertices: usize,
    edges: Vec<EdgeDef>,
}

impl EdgeList {
    pub fn new(num_vertices: usize, edges: Vec<EdgeDef>) -> Self {
        Self {
            num_vertices,
            edges,
        }
    }

    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn edges(&self) -> &[EdgeDef] {
        &self.edges
    }
}
