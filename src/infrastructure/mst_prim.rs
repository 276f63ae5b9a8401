use crate::domain::graph::{Graph, Weight};
use crate::domain::model::SpanningTree;
use crate::domain::traits::SpanningTreeBuilder;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Prim's algorithm grown from a fixed root. Only the root's component is spanned.
pub struct PrimMst {
    pub root: usize,
}

impl PrimMst {
    pub fn new(root: usize) -> Self {
        Self { root }
    }
}

impl SpanningTreeBuilder for PrimMst {
    fn spanning_tree(&self, graph: &Graph) -> SpanningTree {
        let mut tree = SpanningTree::new("prim");
        let mut visited = vec![false; graph.node_count()];
        // (weight, vertex, parent)
        let mut heap: BinaryHeap<Reverse<(Weight, usize, Option<usize>)>> = BinaryHeap::new();
        heap.push(Reverse((0, self.root, None)));

        while let Some(Reverse((weight, v, parent))) = heap.pop() {
            if visited[v] {
                continue;
            }
            visited[v] = true;

            if let Some(p) = parent {
                tree.push(p, v, weight);
            }

            for &(to, w) in graph.neighbors(v) {
                if !visited[to] {
                    heap.push(Reverse((w, to, Some(v))));
                }
            }
        }

        tree
    }
}
