use super::Graph;
use crate::types::EIdx;

fn display_edge(graph: &Graph, e: EIdx, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let edge = graph.edge(e);
    write!(
        f,
        "[{} --({})-- {}]",
        graph.vertex(edge.node1()).id(),
        edge.cost(),
        graph.vertex(edge.node2()).id()
    )
}

pub fn display(graph: &Graph, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    for vertex in graph.vertices() {
        writeln!(f, "{}", vertex.id())?;
        for &e in vertex.edges() {
            display_edge(graph, e, f)?;
            writeln!(f)?;
        }
    }
    Ok(())
}
