use crate::domain::graph::Graph;
use crate::domain::model::ComponentPartition;
use crate::domain::traits::WccDetector;

/// Weakly connected components: one DFS per component over the undirected view.
pub struct DfsWccDetector;

impl WccDetector for DfsWccDetector {
    fn compute_wcc(&self, graph: &Graph) -> ComponentPartition {
        let undirected = if graph.directed {
            graph.undirected()
        } else {
            graph.clone()
        };

        let n = undirected.node_count();
        let mut component_of = vec![usize::MAX; n];
        let mut components: Vec<Vec<usize>> = Vec::new();

        for start in 0..n {
            if component_of[start] != usize::MAX {
                continue;
            }

            let id = components.len();
            let mut comp = Vec::new();
            let mut stack = vec![start];
            component_of[start] = id;

            while let Some(v) = stack.pop() {
                comp.push(v);
                for &(to, _) in undirected.neighbors(v) {
                    if component_of[to] == usize::MAX {
                        component_of[to] = id;
                        stack.push(to);
                    }
                }
            }

            comp.sort_unstable();
            components.push(comp);
        }

        ComponentPartition {
            component_of,
            components,
        }
    }
}
