//! Interface layer: CLI wiring and text reports.

pub mod cli;
pub mod render;
