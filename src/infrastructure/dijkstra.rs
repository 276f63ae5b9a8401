//! Dijkstra single-pair shortest path with a lazy-deletion binary heap.
//!
//! The heap may hold superseded `(distance, vertex)` entries instead of
//! supporting decrease-key; stale entries are skipped on pop. The search stops
//! as soon as the target is popped, since its distance is final at that point
//! for non-negative weights.

use crate::domain::graph::{Graph, Weight};
use crate::domain::model::{PathOutcome, ShortestPath};
use crate::domain::traits::ShortestPathFinder;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

pub struct DijkstraShortestPath;

impl ShortestPathFinder for DijkstraShortestPath {
    fn shortest_path(&self, graph: &Graph, source: usize, target: usize) -> PathOutcome {
        let n = graph.node_count();
        let mut dist: Vec<Option<Weight>> = vec![None; n];
        let mut prev: Vec<Option<usize>> = vec![None; n];
        let mut heap = BinaryHeap::new();

        dist[source] = Some(0);
        heap.push(Reverse((0, source)));

        while let Some(Reverse((d, v))) = heap.pop() {
            if v == target {
                break;
            }
            if dist[v].is_some_and(|best| d > best) {
                continue;
            }

            for &(to, w) in graph.neighbors(v) {
                if to == v {
                    continue;
                }
                let candidate = d.saturating_add(w);
                if dist[to].map_or(true, |best| candidate < best) {
                    dist[to] = Some(candidate);
                    prev[to] = Some(v);
                    heap.push(Reverse((candidate, to)));
                }
            }
        }

        let Some(total_weight) = dist[target] else {
            return PathOutcome::Unreachable;
        };

        let mut path = vec![target];
        let mut at = target;
        while let Some(p) = prev[at] {
            path.push(p);
            at = p;
        }
        path.reverse();

        PathOutcome::Found(ShortestPath { path, total_weight })
    }
}
