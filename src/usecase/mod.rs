//! Usecase layer: graph building, analysis workflows + events.

pub mod analyze;
pub mod build;
pub mod event;
pub mod stats;
pub mod tree;
pub mod validate;
