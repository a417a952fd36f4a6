//! Minimum spanning trees with Prim's algorithm.

pub use error::{Err, Result};
pub use mst::SpanningTree;

use crate::types::{Cost, EdgeDef, VId};

pub mod error;
pub mod front_end;
pub mod graph;
pub mod loader;
pub mod mst;
pub mod ordered_set;
pub mod types;

/// Total cost of the minimum spanning tree of `edges`.
///
/// # Example
///
/// ```
/// let edges = [(1, 2, 1), (2, 3, 2), (3, 4, 3), (1, 4, 10), (1, 3, 4)];
/// assert_eq!(primst::compute_mst(&edges, 4), Ok(6));
/// ```
pub fn compute_mst(edges: &[EdgeDef], vertex_count: usize) -> Result<Cost> {
    compute_spanning_tree(edges, vertex_count, None).map(|tree| tree.total_cost())
}

/// The minimum spanning tree of `edges`, grown from `root` if given or from
/// the first vertex read otherwise.
pub fn compute_spanning_tree(
    edges: &[EdgeDef],
    vertex_count: usize,
    root: Option<VId>,
) -> Result<SpanningTree> {
    let graph = loader::load_graph(edges)?;
    mst::prim_from(&graph, root, vertex_count)
}
