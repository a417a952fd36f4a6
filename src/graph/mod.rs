//! The weighted undirected graph.

pub use graph::{Edge, Graph, Vertex};

pub(crate) use display::display;

mod display;
mod graph;
