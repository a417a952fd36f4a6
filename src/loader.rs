//! Building graphs from edge lists.

use crate::{
    error::{Err, Result},
    front_end::{parse, EdgeList},
    graph::Graph,
    types::EdgeDef,
};
use log::info;
use std::path::Path;

/// Build a graph whose root is the first vertex of the first edge.
pub fn load_graph(edges: &[EdgeDef]) -> Result<Graph> {
    let mut graph = Graph::new();
    for &(node1, node2, cost) in edges {
        let v1 = graph.find_or_create_vertex(node1);
        let v2 = graph.find_or_create_vertex(node2);
        graph.connect(v1, v2, cost)?;
    }
    Ok(graph)
}

/// Build the graph and check it has as many vertices as declared.
pub fn load(edge_list: &EdgeList) -> Result<Graph> {
    let graph = load_graph(edge_list.edges())?;
    graph.check_vertex_count(edge_list.num_vertices())?;
    info!(
        "loaded {} vertices and {} edges",
        graph.num_vertices(),
        graph.num_edges()
    );
    Ok(graph)
}

pub fn read_edge_list<P: AsRef<Path>>(path: P) -> Result<EdgeList> {
    let path = path.as_ref();
    info!("reading {}", path.display());
    let input = std::fs::read_to_string(path)
        .map_err(|e| Err::Io(format!("{}: {}", path.display(), e)))?;
    parse(&input)
}
