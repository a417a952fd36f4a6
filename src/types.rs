//! Various types related to spanning trees.

/// The vertex id type.
pub type VId = i64;

/// The edge cost type.
pub type Cost = i64;

/// Position of a vertex in the graph's vertex arena.
pub type VIdx = usize;

/// Position of an edge in the graph's edge arena.
pub type EIdx = usize;

/// One `(node1, node2, cost)` line of the input.
pub type EdgeDef = (VId, VId, Cost);
