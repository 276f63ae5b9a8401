use crate::domain::graph::{Graph, Weight};
use crate::domain::model::SccResult;
use crate::domain::traits::SccDetector;

pub struct KosarajuSccDetector;

impl SccDetector for KosarajuSccDetector {
    fn compute_scc(&self, graph: &Graph) -> SccResult {
        kosaraju_scc(graph)
    }
}

fn kosaraju_scc(graph: &Graph) -> SccResult {
    let n = graph.node_count();
    let rev = graph.reversed();

    let mut order: Vec<usize> = Vec::with_capacity(n);
    let mut seen = vec![false; n];

    for start in 0..n {
        if seen[start] {
            continue;
        }
        iterative_finish_order(start, &graph.edges, &mut seen, &mut order);
    }

    let mut component_of = vec![usize::MAX; n];
    let mut components: Vec<Vec<usize>> = Vec::new();

    // Decreasing finish time.
    for &v in order.iter().rev() {
        if component_of[v] != usize::MAX {
            continue;
        }

        let mut stack = vec![v];
        component_of[v] = components.len();
        let mut comp = Vec::new();

        while let Some(x) = stack.pop() {
            comp.push(x);
            for &(p, _) in rev.neighbors(x) {
                if component_of[p] == usize::MAX {
                    component_of[p] = components.len();
                    stack.push(p);
                }
            }
        }

        comp.sort_unstable();
        components.push(comp);
    }

    let cyclic_component = components
        .iter()
        .map(|comp| {
            comp.len() > 1
                || graph
                    .neighbors(comp[0])
                    .iter()
                    .any(|&(to, _)| to == comp[0])
        })
        .collect();

    tracing::debug!(
        nodes = n,
        components = components.len(),
        "kosaraju finished"
    );

    SccResult {
        component_of,
        components,
        cyclic_component,
    }
}

/// Appends every vertex reachable from `start` to `order` once all of its
/// descendants have finished.
fn iterative_finish_order(
    start: usize,
    edges: &[Vec<(usize, Weight)>],
    seen: &mut [bool],
    order: &mut Vec<usize>,
) {
    let mut stack: Vec<(usize, usize)> = vec![(start, 0)];
    seen[start] = true;

    while let Some((v, next_i)) = stack.pop() {
        if let Some(&(to, _)) = edges[v].get(next_i) {
            stack.push((v, next_i + 1));
            if !seen[to] {
                seen[to] = true;
                stack.push((to, 0));
            }
            continue;
        }

        order.push(v);
    }
}
