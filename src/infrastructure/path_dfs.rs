use crate::domain::graph::Graph;
use crate::domain::traits::PathFinder;

/// Depth-first reachability. The explicit frame stack doubles as the current
/// path, so the first hit on the target is returned as-is.
pub struct DfsPathFinder;

impl PathFinder for DfsPathFinder {
    fn find_path(&self, graph: &Graph, from: usize, to: usize) -> Option<Vec<usize>> {
        if from == to {
            return Some(vec![from]);
        }

        let mut seen = vec![false; graph.node_count()];
        // (vertex, index of the next neighbor to try)
        let mut frames: Vec<(usize, usize)> = vec![(from, 0)];
        seen[from] = true;

        while let Some(top) = frames.last_mut() {
            let (v, next_i) = *top;
            let Some(&(next, _)) = graph.neighbors(v).get(next_i) else {
                frames.pop();
                continue;
            };
            top.1 += 1;

            if seen[next] {
                continue;
            }
            seen[next] = true;
            frames.push((next, 0));

            if next == to {
                return Some(frames.iter().map(|&(v, _)| v).collect());
            }
        }

        None
    }
}
