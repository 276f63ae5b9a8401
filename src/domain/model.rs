use crate::domain::graph::Weight;

/// A partition of the vertex set into components.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentPartition {
    pub component_of: Vec<usize>,
    pub components: Vec<Vec<usize>>,
}

impl ComponentPartition {
    pub fn count(&self) -> usize {
        self.components.len()
    }

    pub fn same_component(&self, a: usize, b: usize) -> bool {
        self.component_of[a] == self.component_of[b]
    }
}

#[derive(Debug, Clone)]
pub struct SccResult {
    pub component_of: Vec<usize>,
    pub components: Vec<Vec<usize>>,
    pub cyclic_component: Vec<bool>,
}

impl SccResult {
    pub fn cyclic_count(&self) -> usize {
        self.cyclic_component.iter().filter(|&&b| b).count()
    }

    pub fn partition(&self) -> ComponentPartition {
        ComponentPartition {
            component_of: self.component_of.clone(),
            components: self.components.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPath {
    pub path: Vec<usize>,
    pub total_weight: Weight,
}

/// Outcome of a shortest-path query. An unreachable target is a normal result,
/// not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathOutcome {
    Found(ShortestPath),
    Unreachable,
}

impl PathOutcome {
    pub fn total_weight(&self) -> Option<Weight> {
        match self {
            PathOutcome::Found(p) => Some(p.total_weight),
            PathOutcome::Unreachable => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeEdge {
    pub from: usize,
    pub to: usize,
    pub weight: Weight,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanningTree {
    pub algorithm: &'static str,
    pub edges: Vec<TreeEdge>,
    pub total_weight: Weight,
}

impl SpanningTree {
    pub fn new(algorithm: &'static str) -> Self {
        Self {
            algorithm,
            edges: Vec::new(),
            total_weight: 0,
        }
    }

    pub fn push(&mut self, from: usize, to: usize, weight: Weight) {
        self.edges.push(TreeEdge { from, to, weight });
        self.total_weight = self.total_weight.saturating_add(weight);
    }
}
