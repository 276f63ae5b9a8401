use graph_coursework::domain::graph::Graph;
use graph_coursework::domain::model::PathOutcome;
use graph_coursework::domain::traits::{
    PathFinder, SccDetector, ShortestPathFinder, SpanningTreeBuilder, WccDetector,
};
use graph_coursework::infrastructure::dijkstra::DijkstraShortestPath;
use graph_coursework::infrastructure::mst_kruskal::KruskalMst;
use graph_coursework::infrastructure::mst_prim::PrimMst;
use graph_coursework::infrastructure::path_dfs::DfsPathFinder;
use graph_coursework::infrastructure::scc_kosaraju::KosarajuSccDetector;
use graph_coursework::infrastructure::wcc_dfs::DfsWccDetector;
use proptest::prelude::*;

const MAX_VERTICES: usize = 8;

fn arb_graph(directed: bool) -> impl Strategy<Value = Graph> {
    (1..=MAX_VERTICES).prop_flat_map(move |n| {
        prop::collection::vec((0..n, 0..n, 0u64..20), 0..(n * 3)).prop_map(move |edges| {
            let labels: Vec<String> = (0..n).map(|i| format!("v{i}")).collect();
            let mut g = Graph::new(labels, directed).expect("graph");
            g.weighted = true;
            for (u, v, w) in edges {
                g.add_edge(u, v, w);
            }
            g
        })
    })
}

/// Transitive closure over stored arcs (Floyd-Warshall on booleans).
fn reachability(g: &Graph) -> Vec<Vec<bool>> {
    let n = g.node_count();
    let mut r = vec![vec![false; n]; n];
    for v in 0..n {
        r[v][v] = true;
        for &(to, _) in g.neighbors(v) {
            r[v][to] = true;
        }
    }
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                if r[i][k] && r[k][j] {
                    r[i][j] = true;
                }
            }
        }
    }
    r
}

/// Exhaustive minimum over simple paths; fine for a handful of vertices.
fn brute_force_min(g: &Graph, source: usize, target: usize) -> Option<u64> {
    fn walk(
        g: &Graph,
        at: usize,
        target: usize,
        on_path: &mut Vec<bool>,
        acc: u64,
        best: &mut Option<u64>,
    ) {
        if at == target {
            *best = Some(best.map_or(acc, |b| b.min(acc)));
            return;
        }
        for &(to, w) in g.neighbors(at) {
            if !on_path[to] {
                on_path[to] = true;
                walk(g, to, target, on_path, acc + w, best);
                on_path[to] = false;
            }
        }
    }

    let mut on_path = vec![false; g.node_count()];
    on_path[source] = true;
    let mut best = None;
    walk(g, source, target, &mut on_path, 0, &mut best);
    best
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn wcc_partitions_vertices_by_undirected_reachability(g in arb_graph(true)) {
        let wcc = DfsWccDetector.compute_wcc(&g);
        let reach = reachability(&g.undirected());

        let mut members: Vec<usize> = wcc.components.iter().flatten().copied().collect();
        members.sort_unstable();
        prop_assert_eq!(members, (0..g.node_count()).collect::<Vec<_>>());

        for a in 0..g.node_count() {
            prop_assert!(wcc.components[wcc.component_of[a]].contains(&a));
            for b in 0..g.node_count() {
                prop_assert_eq!(wcc.same_component(a, b), reach[a][b]);
            }
        }
    }

    #[test]
    fn scc_groups_exactly_the_mutually_reachable(g in arb_graph(true)) {
        let scc = KosarajuSccDetector.compute_scc(&g);
        let reach = reachability(&g);

        let total: usize = scc.components.iter().map(Vec::len).sum();
        prop_assert_eq!(total, g.node_count());

        for a in 0..g.node_count() {
            for b in 0..g.node_count() {
                let mutual = reach[a][b] && reach[b][a];
                prop_assert_eq!(scc.component_of[a] == scc.component_of[b], mutual);
            }
        }
    }

    #[test]
    fn scc_is_deterministic(g in arb_graph(true)) {
        let first = KosarajuSccDetector.compute_scc(&g);
        let second = KosarajuSccDetector.compute_scc(&g);
        prop_assert_eq!(first.components, second.components);
    }

    #[test]
    fn wcc_is_deterministic(g in arb_graph(true)) {
        let first = DfsWccDetector.compute_wcc(&g);
        let second = DfsWccDetector.compute_wcc(&g);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn dijkstra_is_deterministic(
        g in arb_graph(false),
        s in 0..MAX_VERTICES,
        t in 0..MAX_VERTICES,
    ) {
        let n = g.node_count();
        let (s, t) = (s % n, t % n);

        let first = DijkstraShortestPath.shortest_path(&g, s, t);
        let second = DijkstraShortestPath.shortest_path(&g, s, t);
        prop_assert_eq!(first.total_weight(), second.total_weight());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn dag_has_one_scc_per_vertex(
        n in 1..=MAX_VERTICES,
        raw in prop::collection::vec((0..MAX_VERTICES, 0..MAX_VERTICES), 0..20),
    ) {
        let labels: Vec<String> = (0..n).map(|i| i.to_string()).collect();
        let mut g = Graph::new(labels, true).expect("graph");
        for (u, v) in raw {
            let (u, v) = (u % n, v % n);
            // Only forward arcs between distinct vertices: acyclic by construction.
            if u < v {
                g.add_edge(u, v, 1);
            }
        }
        let scc = KosarajuSccDetector.compute_scc(&g);
        prop_assert_eq!(scc.components.len(), n);
        prop_assert!(scc.cyclic_component.iter().all(|&c| !c));
    }

    #[test]
    fn dijkstra_matches_brute_force(
        g in arb_graph(false),
        s in 0..MAX_VERTICES,
        t in 0..MAX_VERTICES,
    ) {
        let n = g.node_count();
        let (s, t) = (s % n, t % n);

        let outcome = DijkstraShortestPath.shortest_path(&g, s, t);
        prop_assert_eq!(outcome.total_weight(), brute_force_min(&g, s, t));

        if let PathOutcome::Found(p) = outcome {
            prop_assert_eq!(p.path.first(), Some(&s));
            prop_assert_eq!(p.path.last(), Some(&t));
            let summed: u64 = p
                .path
                .windows(2)
                .map(|w| {
                    g.neighbors(w[0])
                        .iter()
                        .filter(|&&(to, _)| to == w[1])
                        .map(|&(_, wt)| wt)
                        .min()
                        .unwrap_or(u64::MAX)
                })
                .sum();
            prop_assert_eq!(summed, p.total_weight);
        }
    }

    #[test]
    fn dfs_reachability_agrees_with_closure(
        g in arb_graph(true),
        s in 0..MAX_VERTICES,
        t in 0..MAX_VERTICES,
    ) {
        let n = g.node_count();
        let (s, t) = (s % n, t % n);
        let reach = reachability(&g);
        prop_assert_eq!(DfsPathFinder.path_exists(&g, s, t), reach[s][t]);
    }

    #[test]
    fn prim_and_kruskal_agree_on_connected_component(g in arb_graph(false)) {
        let wcc = DfsWccDetector.compute_wcc(&g);
        if wcc.count() == 1 {
            let prim = PrimMst::new(0).spanning_tree(&g);
            let kruskal = KruskalMst.spanning_tree(&g);
            prop_assert_eq!(prim.total_weight, kruskal.total_weight);
            prop_assert_eq!(prim.edges.len(), g.node_count() - 1);
            prop_assert_eq!(kruskal.edges.len(), g.node_count() - 1);
        }
    }
}
