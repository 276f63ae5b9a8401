use crate::domain::graph::Graph;
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct RunStats {
    pub vertices: usize,
    pub edges: usize,
    pub algorithms_run: usize,
}

impl RunStats {
    pub fn for_graph(graph: &Graph) -> Self {
        Self {
            vertices: graph.node_count(),
            edges: graph.edge_count(),
            algorithms_run: 0,
        }
    }
}
