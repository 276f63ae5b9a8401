use anyhow::Result;
use serde_json::json;

use graph_coursework::infrastructure::schema_validator::validate_graph_document;

#[test]
fn validate_fixture_files_integration() -> Result<()> {
    for name in ["reachability", "scc", "tree", "mst", "dijkstra"] {
        let raw = std::fs::read_to_string(format!("fixtures/{name}.json"))?;
        let doc: serde_json::Value = serde_json::from_str(&raw)?;
        validate_graph_document(&doc)?;
    }
    Ok(())
}

#[test]
fn validate_mixed_edge_forms_integration() -> Result<()> {
    let doc = json!({
        "name": "mixed",
        "directed": true,
        "vertices": ["A", 2, "C"],
        "edges": [
            {"from": "A", "to": 2},
            {"from": 2, "to": "C", "weight": 0},
            ["C", "A", 9]
        ],
        "x_comment": "unknown keys are allowed"
    });

    validate_graph_document(&doc)?;
    Ok(())
}

#[test]
fn validate_invalid_documents_integration() {
    let bad = [
        json!({"directed": "yes"}),
        json!({"vertices": [1.5]}),
        json!({"edges": [{"from": "A"}]}),
        json!({"edges": [{"from": "A", "to": "B", "cost": 3}]}),
        json!({"edges": [["A", "B", 1, 2]]}),
        json!({"edges": [["A", "B", "heavy"]]}),
        json!({"matrix": [[0, 1], [1, -1]]}),
        json!([1, 2, 3]),
    ];

    for doc in bad.iter() {
        assert!(validate_graph_document(doc).is_err(), "accepted: {doc}");
    }
}
