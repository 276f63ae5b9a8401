//! Graph Builder: turns a graph file (edge list or 0/1 matrix) into a [`Graph`].
//!
//! Vertices are taken from the declared `vertices` list when present; an edge
//! naming an undeclared vertex is then rejected. Without a declared list the
//! vertex set is derived from the edges in order of first appearance. Matrix
//! input always yields a directed graph.

use crate::domain::error::GraphError;
use crate::domain::graph::Graph;
use crate::infrastructure::serde_json_adapter::GraphFileDto;

const DEFAULT_WEIGHT: u64 = 1;

/// Row-major scan of a square 0/1 matrix. A 1 at `(i, j)` yields the arc
/// `(i + 1, j + 1)` in 1-indexed vertex numbers.
pub fn matrix_to_edges(matrix: &[Vec<u8>]) -> Result<Vec<(usize, usize)>, GraphError> {
    let n = matrix.len();
    let mut edges = Vec::new();

    for (i, row) in matrix.iter().enumerate() {
        if row.len() != n {
            return Err(GraphError::InvalidMatrix(format!(
                "row {} has {} entries, expected {n}",
                i + 1,
                row.len()
            )));
        }
        for (j, &cell) in row.iter().enumerate() {
            match cell {
                0 => {}
                1 => edges.push((i + 1, j + 1)),
                other => {
                    return Err(GraphError::InvalidMatrix(format!(
                        "entry ({}, {}) is {other}, expected 0 or 1",
                        i + 1,
                        j + 1
                    )))
                }
            }
        }
    }

    Ok(edges)
}

pub fn build_graph(dto: &GraphFileDto) -> Result<Graph, GraphError> {
    match dto.matrix.as_ref() {
        Some(_) if !dto.edges.is_empty() => Err(GraphError::EdgesAndMatrix),
        Some(matrix) => build_from_matrix(dto, matrix),
        None => build_from_edges(dto),
    }
}

fn build_from_matrix(dto: &GraphFileDto, matrix: &[Vec<u8>]) -> Result<Graph, GraphError> {
    let n = matrix.len();
    let labels: Vec<String> = if dto.vertices.is_empty() {
        (1..=n).map(|i| i.to_string()).collect()
    } else if dto.vertices.len() == n {
        dto.vertices.iter().map(|v| v.to_string()).collect()
    } else {
        return Err(GraphError::InvalidMatrix(format!(
            "{} vertices declared for a {n}x{n} matrix",
            dto.vertices.len()
        )));
    };

    // Every 1 is one arc, so a matrix graph is directed whatever the file says.
    if !dto.directed {
        tracing::debug!("matrix input is always directed; ignoring directed=false");
    }
    let mut g = Graph::new(labels, true)?;
    for (u, v) in matrix_to_edges(matrix)? {
        g.add_edge(u - 1, v - 1, DEFAULT_WEIGHT);
    }
    Ok(g)
}

fn build_from_edges(dto: &GraphFileDto) -> Result<Graph, GraphError> {
    let labels: Vec<String> = if dto.vertices.is_empty() {
        let mut seen: Vec<String> = Vec::new();
        for edge in dto.edges.iter() {
            let (from, to, _) = edge.endpoints();
            for label in [from.to_string(), to.to_string()] {
                if !seen.contains(&label) {
                    seen.push(label);
                }
            }
        }
        seen
    } else {
        dto.vertices.iter().map(|v| v.to_string()).collect()
    };

    let mut g = Graph::new(labels, dto.directed)?;
    for edge in dto.edges.iter() {
        let (from, to, weight) = edge.endpoints();
        let u = g.require(&from.to_string())?;
        let v = g.require(&to.to_string())?;
        g.weighted |= weight.is_some();
        g.add_edge(u, v, weight.unwrap_or(DEFAULT_WEIGHT));
    }
    Ok(g)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::traits::SccDetector;
    use crate::infrastructure::scc_kosaraju::KosarajuSccDetector;
    use crate::infrastructure::serde_json_adapter::{
        parse_graph_document, EdgeDto, VertexLabelDto,
    };

    fn num(n: i64) -> VertexLabelDto {
        VertexLabelDto::Number(n)
    }

    #[test]
    fn matrix_cells_become_one_indexed_arcs() {
        let edges = matrix_to_edges(&[vec![0, 1, 0], vec![0, 0, 1], vec![1, 0, 0]]).expect("edges");
        assert_eq!(edges, vec![(1, 2), (2, 3), (3, 1)]);
    }

    #[test]
    fn non_square_matrix_is_rejected() {
        let err = matrix_to_edges(&[vec![0, 1], vec![0]]).unwrap_err();
        assert!(matches!(err, GraphError::InvalidMatrix(_)));
    }

    #[test]
    fn undeclared_vertex_is_rejected() {
        let dto = GraphFileDto {
            vertices: vec![num(1), num(2)],
            edges: vec![EdgeDto::Pair(num(1), num(3))],
            ..GraphFileDto::default()
        };
        assert_eq!(
            build_graph(&dto).unwrap_err(),
            GraphError::UnknownVertex("3".to_string())
        );
    }

    #[test]
    fn vertices_derive_from_edges_when_omitted() {
        let dto = GraphFileDto {
            edges: vec![EdgeDto::Pair(num(5), num(2)), EdgeDto::Pair(num(2), num(9))],
            ..GraphFileDto::default()
        };
        let g = build_graph(&dto).expect("graph");
        assert_eq!(g.labels, vec!["5", "2", "9"]);
        assert!(!g.weighted);
        assert_eq!(g.neighbors(1), &[(0, 1), (2, 1)]);
    }

    #[test]
    fn explicit_weight_marks_graph_weighted() {
        let dto = GraphFileDto {
            edges: vec![
                EdgeDto::Weighted(num(1), num(2), 7),
                EdgeDto::Pair(num(2), num(3)),
            ],
            ..GraphFileDto::default()
        };
        let g = build_graph(&dto).expect("graph");
        assert!(g.weighted);
        assert_eq!(g.edge_list[1].weight, 1);
    }

    #[test]
    fn matrix_and_edges_conflict() {
        let dto = GraphFileDto {
            edges: vec![EdgeDto::Pair(num(1), num(2))],
            matrix: Some(vec![vec![0]]),
            ..GraphFileDto::default()
        };
        assert_eq!(build_graph(&dto).unwrap_err(), GraphError::EdgesAndMatrix);
    }

    #[test]
    fn matrix_uses_declared_labels_positionally() {
        let dto = GraphFileDto {
            directed: true,
            vertices: vec![
                VertexLabelDto::Text("a".to_string()),
                VertexLabelDto::Text("b".to_string()),
            ],
            matrix: Some(vec![vec![0, 1], vec![0, 0]]),
            ..GraphFileDto::default()
        };
        let g = build_graph(&dto).expect("graph");
        assert_eq!(g.neighbors(g.require("a").unwrap()), &[(1, 1)]);
        assert!(g.neighbors(1).is_empty());
    }

    #[test]
    fn matrix_without_directed_key_keeps_arcs_one_way() {
        let dto = parse_graph_document(r#"{"matrix": [[0, 1], [0, 0]]}"#).expect("parse");
        assert!(!dto.directed);

        let g = build_graph(&dto).expect("graph");
        assert!(g.directed);
        assert_eq!(g.neighbors(0), &[(1, 1)]);
        assert!(g.neighbors(1).is_empty());
        assert_eq!(KosarajuSccDetector.compute_scc(&g).components.len(), 2);
    }

    #[test]
    fn symmetric_matrix_stores_each_arc_once() {
        let dto = parse_graph_document(r#"{"matrix": [[0, 1], [1, 0]]}"#).expect("parse");
        let g = build_graph(&dto).expect("graph");
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.neighbors(0), &[(1, 1)]);
        assert_eq!(g.neighbors(1), &[(0, 1)]);
        assert_eq!(KosarajuSccDetector.compute_scc(&g).components.len(), 1);
    }
}
