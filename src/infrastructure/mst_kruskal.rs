use crate::domain::graph::Graph;
use crate::domain::model::SpanningTree;
use crate::domain::traits::SpanningTreeBuilder;

/// Kruskal's algorithm. Yields a minimum spanning forest on disconnected input.
pub struct KruskalMst;

impl SpanningTreeBuilder for KruskalMst {
    fn spanning_tree(&self, graph: &Graph) -> SpanningTree {
        let mut tree = SpanningTree::new("kruskal");
        let mut sets = DisjointSets::new(graph.node_count());

        // Stable: equal weights keep input order.
        let mut edges = graph.edge_list.clone();
        edges.sort_by_key(|e| e.weight);

        for e in edges {
            if sets.union(e.from, e.to) {
                tree.push(e.from, e.to, e.weight);
            }
        }

        tree
    }
}

struct DisjointSets {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSets {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    fn find(&mut self, v: usize) -> usize {
        let mut root = v;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        // Path compression.
        let mut at = v;
        while self.parent[at] != root {
            let next = self.parent[at];
            self.parent[at] = root;
            at = next;
        }
        root
    }

    /// Returns false when both vertices were already in one set.
    fn union(&mut self, a: usize, b: usize) -> bool {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return false;
        }
        match self.rank[ra].cmp(&self.rank[rb]) {
            std::cmp::Ordering::Greater => self.parent[rb] = ra,
            std::cmp::Ordering::Less => self.parent[ra] = rb,
            std::cmp::Ordering::Equal => {
                self.parent[rb] = ra;
                self.rank[ra] += 1;
            }
        }
        true
    }
}
