// Infrastructure layer: algorithm adapters, file I/O, serde, eventing
pub mod dijkstra;
pub mod event_ndjson;
pub mod fixtures;
pub mod mst_kruskal;
pub mod mst_prim;
pub mod path_dfs;
pub mod scc_kosaraju;
pub mod schema_validator;
pub mod serde_json_adapter;
pub mod wcc_dfs;
