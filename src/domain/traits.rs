use crate::domain::graph::Graph;
use crate::domain::model::{ComponentPartition, PathOutcome, SccResult, SpanningTree};

pub trait SccDetector {
    fn compute_scc(&self, graph: &Graph) -> SccResult;
}

pub trait WccDetector {
    fn compute_wcc(&self, graph: &Graph) -> ComponentPartition;
}

pub trait PathFinder {
    fn find_path(&self, graph: &Graph, from: usize, to: usize) -> Option<Vec<usize>>;

    fn path_exists(&self, graph: &Graph, from: usize, to: usize) -> bool {
        self.find_path(graph, from, to).is_some()
    }
}

pub trait ShortestPathFinder {
    fn shortest_path(&self, graph: &Graph, source: usize, target: usize) -> PathOutcome;
}

pub trait SpanningTreeBuilder {
    fn spanning_tree(&self, graph: &Graph) -> SpanningTree;
}
