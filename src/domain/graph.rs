use crate::domain::error::GraphError;
use std::collections::HashMap;

pub type Weight = u64;

/// An input edge, by vertex index, in the order it was declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    pub weight: Weight,
}

/// Adjacency-list graph over densely indexed, labelled vertices.
///
/// `edges[v]` lists `(neighbor, weight)` arcs leaving `v`. Undirected graphs
/// store every edge in both directions (a self-loop is stored once), while
/// `edge_list` keeps each input edge exactly once.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    pub labels: Vec<String>,
    pub edges: Vec<Vec<(usize, Weight)>>,
    pub edge_list: Vec<Edge>,
    pub directed: bool,
    pub weighted: bool,
    index: HashMap<String, usize>,
}

impl Graph {
    pub fn new<I, S>(labels: I, directed: bool) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut g = Graph {
            directed,
            ..Graph::default()
        };
        for label in labels {
            let label = label.into();
            if g.index.contains_key(&label) {
                return Err(GraphError::DuplicateVertex(label));
            }
            g.index.insert(label.clone(), g.labels.len());
            g.labels.push(label);
            g.edges.push(Vec::new());
        }
        Ok(g)
    }

    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_list.len()
    }

    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }

    /// Resolves a label, failing with `UnknownVertex` when it is not declared.
    pub fn require(&self, label: &str) -> Result<usize, GraphError> {
        self.index_of(label)
            .ok_or_else(|| GraphError::UnknownVertex(label.to_string()))
    }

    pub fn label(&self, v: usize) -> &str {
        &self.labels[v]
    }

    pub fn labels_of(&self, vertices: &[usize]) -> Vec<String> {
        vertices.iter().map(|&v| self.labels[v].clone()).collect()
    }

    pub fn neighbors(&self, v: usize) -> &[(usize, Weight)] {
        &self.edges[v]
    }

    pub fn add_edge(&mut self, from: usize, to: usize, weight: Weight) {
        self.edge_list.push(Edge { from, to, weight });
        self.edges[from].push((to, weight));
        if !self.directed && from != to {
            self.edges[to].push((from, weight));
        }
    }

    /// Returns the graph with every arc `(u, v)` turned into `(v, u)`.
    pub fn reversed(&self) -> Graph {
        let mut rev = self.empty_copy(self.directed);
        for e in self.edge_list.iter() {
            rev.add_edge(e.to, e.from, e.weight);
        }
        rev
    }

    /// Returns the graph with edge direction ignored.
    pub fn undirected(&self) -> Graph {
        let mut g = self.empty_copy(false);
        for e in self.edge_list.iter() {
            g.add_edge(e.from, e.to, e.weight);
        }
        g
    }

    /// `matrix[u][v]` holds the lightest arc weight from `u` to `v`, if any.
    pub fn adjacency_matrix(&self) -> Vec<Vec<Option<Weight>>> {
        let n = self.node_count();
        let mut matrix = vec![vec![None; n]; n];
        for (u, outs) in self.edges.iter().enumerate() {
            for &(v, w) in outs {
                let cell: &mut Option<Weight> = &mut matrix[u][v];
                *cell = Some(cell.map_or(w, |old| old.min(w)));
            }
        }
        matrix
    }

    fn empty_copy(&self, directed: bool) -> Graph {
        Graph {
            labels: self.labels.clone(),
            edges: vec![Vec::new(); self.labels.len()],
            edge_list: Vec::new(),
            directed,
            weighted: self.weighted,
            index: self.index.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path3(directed: bool) -> Graph {
        let mut g = Graph::new(["a", "b", "c"], directed).expect("graph");
        g.add_edge(0, 1, 2);
        g.add_edge(1, 2, 5);
        g
    }

    #[test]
    fn new_rejects_duplicate_labels() {
        let err = Graph::new(["x", "y", "x"], true).unwrap_err();
        assert_eq!(err, GraphError::DuplicateVertex("x".to_string()));
    }

    #[test]
    fn undirected_edges_are_stored_both_ways() {
        let g = path3(false);
        assert_eq!(g.neighbors(1), &[(0, 2), (2, 5)]);
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn undirected_self_loop_is_stored_once() {
        let mut g = Graph::new(["a"], false).expect("graph");
        g.add_edge(0, 0, 1);
        assert_eq!(g.neighbors(0).len(), 1);
    }

    #[test]
    fn reversed_flips_every_arc() {
        let g = path3(true).reversed();
        assert!(g.neighbors(0).is_empty());
        assert_eq!(g.neighbors(1), &[(0, 2)]);
        assert_eq!(g.neighbors(2), &[(1, 5)]);
    }

    #[test]
    fn require_reports_unknown_label() {
        let g = path3(true);
        assert_eq!(g.require("c"), Ok(2));
        assert_eq!(
            g.require("zz"),
            Err(GraphError::UnknownVertex("zz".to_string()))
        );
    }

    #[test]
    fn adjacency_matrix_marks_arcs() {
        let m = path3(true).adjacency_matrix();
        assert_eq!(m[0][1], Some(2));
        assert_eq!(m[1][0], None);
        assert_eq!(m[1][2], Some(5));
    }
}
