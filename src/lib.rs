//! Classic graph algorithms behind a small command-line front end.
//!
//! The crate is split into Clean Architecture layers:
//! - domain: graph model, result types and algorithm ports
//! - usecase: graph building + analysis workflows with progress events
//! - infrastructure: algorithm adapters, serde + async IO, fixtures
//! - interface: CLI wiring and report rendering

pub mod domain;
pub mod infrastructure;
pub mod interface;
pub mod usecase;
