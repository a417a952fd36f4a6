//! Minimum spanning trees.

pub use prim::{prim, prim_from, Prim};
pub use tree::{SpanningTree, TreeEdge};

mod prim;
mod tree;
