use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("unknown vertex: {0}")]
    UnknownVertex(String),

    #[error("duplicate vertex: {0}")]
    DuplicateVertex(String),

    #[error("invalid adjacency matrix: {0}")]
    InvalidMatrix(String),

    #[error("graph input must give either edges or a matrix, not both")]
    EdgesAndMatrix,

    #[error("vertex {parent} already has two children; cannot attach {child}")]
    TooManyChildren { parent: String, child: String },
}
