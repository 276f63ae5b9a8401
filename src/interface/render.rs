//! Plain-text reports printed by the CLI.

use crate::domain::graph::Graph;
use crate::domain::model::{PathOutcome, SpanningTree};
use crate::usecase::analyze::{ComponentsReport, InorderReport, ReachReport, ShortestPathReport};
use crate::usecase::validate::GraphSummary;
use std::fmt::Write as _;

fn join_path(graph: &Graph, path: &[usize]) -> String {
    graph.labels_of(path).join(" -> ")
}

fn component_line(graph: &Graph, members: &[usize]) -> String {
    format!("  {{{}}}", graph.labels_of(members).join(", "))
}

pub fn render_components(graph: &Graph, report: &ComponentsReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Strongly Connected Components (SCCs):");
    for (id, comp) in report.scc.components.iter().enumerate() {
        let marker = if report.scc.cyclic_component[id] {
            " (cyclic)"
        } else {
            ""
        };
        let _ = writeln!(out, "{}{marker}", component_line(graph, comp));
    }
    let _ = writeln!(
        out,
        "Number of Strongly Connected Components (SCCs): {}",
        report.scc.components.len()
    );

    let _ = writeln!(out, "Weakly Connected Components (WCCs):");
    for comp in report.wcc.components.iter() {
        let _ = writeln!(out, "{}", component_line(graph, comp));
    }
    let _ = write!(
        out,
        "Number of Weakly Connected Components (WCCs): {}",
        report.wcc.count()
    );

    out
}

pub fn render_reach(graph: &Graph, report: &ReachReport) -> String {
    match &report.path {
        Some(path) => format!("true\nPath: {}", join_path(graph, path)),
        None => format!(
            "false\nNo path exists from {} to {}.",
            graph.label(report.from),
            graph.label(report.to)
        ),
    }
}

pub fn render_shortest_path(graph: &Graph, report: &ShortestPathReport) -> String {
    let from = graph.label(report.source);
    let to = graph.label(report.target);
    match &report.outcome {
        PathOutcome::Found(p) => format!(
            "Shortest path from {from} to {to}: {}\nTotal weight: {}",
            join_path(graph, &p.path),
            p.total_weight
        ),
        PathOutcome::Unreachable => format!("No path found from {from} to {to}."),
    }
}

fn algorithm_title(algorithm: &str) -> String {
    match algorithm {
        "prim" => "Prim's Algorithm".to_string(),
        "kruskal" => "Kruskal's Algorithm".to_string(),
        other => other.to_string(),
    }
}

pub fn render_spanning_trees(graph: &Graph, trees: &[SpanningTree]) -> String {
    trees
        .iter()
        .map(|tree| {
            let edges: Vec<String> = tree
                .edges
                .iter()
                .map(|e| format!("({}, {}, {})", graph.label(e.from), graph.label(e.to), e.weight))
                .collect();
            format!(
                "--- {} ---\nEdges in MST: [{}]\nTotal weight: {}",
                algorithm_title(tree.algorithm),
                edges.join(", "),
                tree.total_weight
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn render_inorder(graph: &Graph, report: &InorderReport) -> String {
    format!(
        "Inorder Traversal Result starting from node {}:\n{}",
        graph.label(report.root),
        graph.labels_of(&report.order).join(" ")
    )
}

/// Weighted graphs show arc weights with `0` on the diagonal and `inf` for
/// missing arcs; unweighted graphs show 0/1 presence.
pub fn render_matrix(graph: &Graph) -> String {
    let matrix = graph.adjacency_matrix();
    let cells: Vec<Vec<String>> = matrix
        .iter()
        .enumerate()
        .map(|(u, row)| {
            row.iter()
                .enumerate()
                .map(|(v, cell)| match (graph.weighted, cell) {
                    (true, Some(w)) => w.to_string(),
                    (true, None) if u == v => "0".to_string(),
                    (true, None) => "inf".to_string(),
                    (false, Some(_)) => "1".to_string(),
                    (false, None) => "0".to_string(),
                })
                .collect()
        })
        .collect();

    let width = cells
        .iter()
        .flatten()
        .map(String::len)
        .chain(graph.labels.iter().map(String::len))
        .max()
        .unwrap_or(1);

    let mut out = String::from("Adjacency Matrix:\n");
    let _ = write!(out, "{:>width$}", "");
    for label in graph.labels.iter() {
        let _ = write!(out, " {label:>width$}");
    }
    for (u, row) in cells.iter().enumerate() {
        let _ = write!(out, "\n{:>width$}", graph.label(u));
        for cell in row {
            let _ = write!(out, " {cell:>width$}");
        }
    }
    out
}

pub fn render_summary(summary: &GraphSummary) -> String {
    let list = |items: &[String]| {
        if items.is_empty() {
            "-".to_string()
        } else {
            items.join(", ")
        }
    };
    format!(
        "vertices: {}\nedges: {}\ndirected: {}\nweighted: {}\nself-loops: {}\nisolated: {}",
        summary.vertices,
        summary.edges,
        summary.directed,
        summary.weighted,
        list(&summary.self_loops),
        list(&summary.isolated)
    )
}
