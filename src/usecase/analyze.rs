//! Analysis workflows: validate inputs, run one algorithm family, report progress.

use crate::domain::graph::Graph;
use crate::domain::model::{ComponentPartition, PathOutcome, SccResult, SpanningTree};
use crate::domain::traits::{
    PathFinder, SccDetector, ShortestPathFinder, SpanningTreeBuilder, WccDetector,
};
use crate::usecase::event::{emit, AppEvent, EventSink};
use crate::usecase::stats::RunStats;
use crate::usecase::tree::{Handle, PositionalBinaryTree};
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct ComponentsReport {
    pub scc: SccResult,
    pub wcc: ComponentPartition,
}

#[derive(Debug, Clone)]
pub struct ReachReport {
    pub from: usize,
    pub to: usize,
    pub path: Option<Vec<usize>>,
}

#[derive(Debug, Clone)]
pub struct ShortestPathReport {
    pub source: usize,
    pub target: usize,
    pub outcome: PathOutcome,
}

#[derive(Debug, Clone)]
pub struct InorderReport {
    pub root: usize,
    pub order: Vec<usize>,
}

/// Resolves a user-supplied vertex label before any algorithm runs.
pub fn resolve_vertex(graph: &Graph, label: &str, role: &str) -> Result<usize> {
    graph
        .require(label)
        .with_context(|| format!("invalid {role} vertex"))
}

pub async fn announce_graph(graph: &Graph, sink: &EventSink) {
    emit(
        sink,
        AppEvent::GraphLoaded {
            nodes: graph.node_count(),
            edges: graph.edge_count(),
            directed: graph.directed,
            weighted: graph.weighted,
        },
    )
    .await;
}

pub async fn analyze_components(
    graph: &Graph,
    scc: &dyn SccDetector,
    wcc: &dyn WccDetector,
    sink: &EventSink,
) -> ComponentsReport {
    let mut stats = RunStats::for_graph(graph);

    emit(sink, AppEvent::PhaseStarted { name: "scc".into() }).await;
    let scc_res = scc.compute_scc(graph);
    stats.algorithms_run += 1;
    emit(
        sink,
        AppEvent::SccComputed {
            nodes: graph.node_count(),
            edges: graph.edge_count(),
            components: scc_res.components.len(),
            cyclic_components: scc_res.cyclic_count(),
        },
    )
    .await;
    emit(sink, AppEvent::PhaseFinished { name: "scc".into() }).await;

    emit(sink, AppEvent::PhaseStarted { name: "wcc".into() }).await;
    let wcc_res = wcc.compute_wcc(graph);
    stats.algorithms_run += 1;
    emit(
        sink,
        AppEvent::WccComputed {
            nodes: graph.node_count(),
            components: wcc_res.count(),
        },
    )
    .await;
    emit(sink, AppEvent::PhaseFinished { name: "wcc".into() }).await;

    emit(sink, AppEvent::Finished { stats }).await;
    ComponentsReport {
        scc: scc_res,
        wcc: wcc_res,
    }
}

pub async fn check_reachability(
    graph: &Graph,
    finder: &dyn PathFinder,
    from: &str,
    to: &str,
    sink: &EventSink,
) -> Result<ReachReport> {
    let from_v = resolve_vertex(graph, from, "start")?;
    let to_v = resolve_vertex(graph, to, "end")?;
    let mut stats = RunStats::for_graph(graph);

    emit(sink, AppEvent::PhaseStarted { name: "reach".into() }).await;
    let path = finder.find_path(graph, from_v, to_v);
    stats.algorithms_run += 1;
    emit(
        sink,
        AppEvent::PathSearched {
            from: from.to_string(),
            to: to.to_string(),
            found: path.is_some(),
        },
    )
    .await;
    emit(sink, AppEvent::PhaseFinished { name: "reach".into() }).await;

    emit(sink, AppEvent::Finished { stats }).await;
    Ok(ReachReport {
        from: from_v,
        to: to_v,
        path,
    })
}

pub async fn find_shortest_path(
    graph: &Graph,
    finder: &dyn ShortestPathFinder,
    from: &str,
    to: &str,
    sink: &EventSink,
) -> Result<ShortestPathReport> {
    let source = resolve_vertex(graph, from, "source")?;
    let target = resolve_vertex(graph, to, "target")?;
    let mut stats = RunStats::for_graph(graph);

    emit(
        sink,
        AppEvent::PhaseStarted {
            name: "shortest_path".into(),
        },
    )
    .await;
    let outcome = finder.shortest_path(graph, source, target);
    stats.algorithms_run += 1;
    let hops = match &outcome {
        PathOutcome::Found(p) => p.path.len().saturating_sub(1),
        PathOutcome::Unreachable => 0,
    };
    emit(
        sink,
        AppEvent::ShortestPathComputed {
            from: from.to_string(),
            to: to.to_string(),
            total_weight: outcome.total_weight(),
            hops,
        },
    )
    .await;
    emit(
        sink,
        AppEvent::PhaseFinished {
            name: "shortest_path".into(),
        },
    )
    .await;

    emit(sink, AppEvent::Finished { stats }).await;
    Ok(ShortestPathReport {
        source,
        target,
        outcome,
    })
}

/// Runs every builder over the undirected view of the graph.
pub async fn compute_spanning_trees(
    graph: &Graph,
    builders: &[&dyn SpanningTreeBuilder],
    sink: &EventSink,
) -> Vec<SpanningTree> {
    let undirected;
    let graph = if graph.directed {
        tracing::warn!("spanning trees ignore edge direction; using the undirected view");
        undirected = graph.undirected();
        &undirected
    } else {
        graph
    };

    let mut stats = RunStats::for_graph(graph);
    let mut trees = Vec::with_capacity(builders.len());

    for builder in builders {
        emit(
            sink,
            AppEvent::PhaseStarted {
                name: "spanning_tree".into(),
            },
        )
        .await;
        let tree = builder.spanning_tree(graph);
        stats.algorithms_run += 1;
        emit(
            sink,
            AppEvent::SpanningTreeComputed {
                algorithm: tree.algorithm.to_string(),
                edges: tree.edges.len(),
                total_weight: tree.total_weight,
            },
        )
        .await;
        emit(
            sink,
            AppEvent::PhaseFinished {
                name: "spanning_tree".into(),
            },
        )
        .await;
        trees.push(tree);
    }

    emit(sink, AppEvent::Finished { stats }).await;
    trees
}

pub async fn traverse_inorder(
    graph: &Graph,
    from: &str,
    sink: &EventSink,
) -> Result<InorderReport> {
    let root = resolve_vertex(graph, from, "starting")?;
    let mut stats = RunStats::for_graph(graph);

    emit(
        sink,
        AppEvent::PhaseStarted {
            name: "inorder".into(),
        },
    )
    .await;
    let tree = PositionalBinaryTree::from_graph(graph).context("building positional binary tree")?;
    let order = tree.inorder(Handle(root));
    stats.algorithms_run += 1;
    emit(
        sink,
        AppEvent::TreeTraversed {
            root: from.to_string(),
            visited: order.len(),
        },
    )
    .await;
    emit(
        sink,
        AppEvent::PhaseFinished {
            name: "inorder".into(),
        },
    )
    .await;

    emit(sink, AppEvent::Finished { stats }).await;
    Ok(InorderReport { root, order })
}
