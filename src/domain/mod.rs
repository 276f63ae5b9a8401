//! Domain layer: graph model, result types and algorithm ports. Pure and synchronous.

pub mod error;
pub mod graph;
pub mod model;
pub mod traits;
