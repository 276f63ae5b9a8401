use crate::infrastructure::serde_json_adapter::GraphFileDto;
use crate::usecase::build::build_graph;
use anyhow::{Context, Result};
use serde::Serialize;

/// Shape of a graph file that passed schema and builder checks.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GraphSummary {
    pub vertices: usize,
    pub edges: usize,
    pub directed: bool,
    pub weighted: bool,
    pub self_loops: Vec<String>,
    pub isolated: Vec<String>,
}

pub fn validate_graph(dto: &GraphFileDto) -> Result<GraphSummary> {
    let graph = build_graph(dto).context("building graph")?;

    let mut has_arc = vec![false; graph.node_count()];
    let mut self_loops = Vec::new();
    for e in graph.edge_list.iter() {
        has_arc[e.from] = true;
        has_arc[e.to] = true;
        if e.from == e.to {
            self_loops.push(graph.label(e.from).to_string());
        }
    }

    let isolated = has_arc
        .iter()
        .enumerate()
        .filter(|&(_, &touched)| !touched)
        .map(|(v, _)| graph.label(v).to_string())
        .collect();

    Ok(GraphSummary {
        vertices: graph.node_count(),
        edges: graph.edge_count(),
        directed: graph.directed,
        weighted: graph.weighted,
        self_loops,
        isolated,
    })
}
