use crate::domain::graph::{Graph, Weight};
use crate::infrastructure::schema_validator::validate_graph_document;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use tokio::fs;

/// A vertex label as written in a graph file. `1` and `"1"` name the same vertex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VertexLabelDto {
    Number(i64),
    Text(String),
}

impl fmt::Display for VertexLabelDto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VertexLabelDto::Number(n) => write!(f, "{n}"),
            VertexLabelDto::Text(s) => f.write_str(s),
        }
    }
}

impl VertexLabelDto {
    /// Numeric-looking labels are written back as JSON integers.
    fn from_label(label: &str) -> Self {
        match label.parse::<i64>() {
            Ok(n) if n.to_string() == label => VertexLabelDto::Number(n),
            _ => VertexLabelDto::Text(label.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EdgeDto {
    Object {
        from: VertexLabelDto,
        to: VertexLabelDto,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        weight: Option<Weight>,
    },
    Weighted(VertexLabelDto, VertexLabelDto, Weight),
    Pair(VertexLabelDto, VertexLabelDto),
}

impl EdgeDto {
    pub fn endpoints(&self) -> (&VertexLabelDto, &VertexLabelDto, Option<Weight>) {
        match self {
            EdgeDto::Object { from, to, weight } => (from, to, *weight),
            EdgeDto::Weighted(from, to, weight) => (from, to, Some(*weight)),
            EdgeDto::Pair(from, to) => (from, to, None),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphFileDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default)]
    pub directed: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vertices: Vec<VertexLabelDto>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub edges: Vec<EdgeDto>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matrix: Option<Vec<Vec<u8>>>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl GraphFileDto {
    /// Edge-list form of a built graph. Weights are written only for weighted graphs.
    pub fn from_graph(graph: &Graph, name: Option<String>) -> Self {
        let label = |v: usize| VertexLabelDto::from_label(graph.label(v));
        let edges = graph
            .edge_list
            .iter()
            .map(|e| {
                if graph.weighted {
                    EdgeDto::Weighted(label(e.from), label(e.to), e.weight)
                } else {
                    EdgeDto::Pair(label(e.from), label(e.to))
                }
            })
            .collect();

        GraphFileDto {
            name,
            directed: graph.directed,
            vertices: (0..graph.node_count()).map(label).collect(),
            edges,
            matrix: None,
            extra: BTreeMap::new(),
        }
    }
}

/// Parses and schema-checks a graph document.
pub fn parse_graph_document(raw: &str) -> Result<GraphFileDto> {
    let value: Value = serde_json::from_str(raw)?;
    validate_graph_document(&value)?;
    let dto: GraphFileDto = serde_json::from_value(value)?;
    Ok(dto)
}

pub async fn read_graph_file(path: &str) -> Result<GraphFileDto> {
    let raw = fs::read_to_string(path).await?;
    parse_graph_document(&raw)
}

pub async fn write_graph_file(path: &str, dto: &GraphFileDto) -> Result<()> {
    let pretty = serde_json::to_string_pretty(dto)?;
    fs::write(path, pretty).await?;
    Ok(())
}
