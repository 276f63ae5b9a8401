//! The classroom graphs, embedded in the binary and addressable by name.

use crate::infrastructure::serde_json_adapter::{parse_graph_document, GraphFileDto};
use anyhow::{anyhow, Context, Result};

pub const FIXTURE_NAMES: [&str; 5] = ["reachability", "scc", "tree", "mst", "dijkstra"];

fn fixture_source(name: &str) -> Option<&'static str> {
    match name {
        "reachability" => Some(include_str!("../../fixtures/reachability.json")),
        "scc" => Some(include_str!("../../fixtures/scc.json")),
        "tree" => Some(include_str!("../../fixtures/tree.json")),
        "mst" => Some(include_str!("../../fixtures/mst.json")),
        "dijkstra" => Some(include_str!("../../fixtures/dijkstra.json")),
        _ => None,
    }
}

pub fn load_fixture(name: &str) -> Result<GraphFileDto> {
    let raw = fixture_source(name).ok_or_else(|| {
        anyhow!(
            "unknown fixture: {name} (expected one of: {})",
            FIXTURE_NAMES.join(", ")
        )
    })?;
    parse_graph_document(raw).with_context(|| format!("parsing built-in fixture: {name}"))
}
