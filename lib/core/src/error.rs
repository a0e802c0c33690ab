use crate::graph::VertexId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid vertex: {vertex} is outside [0, {vertex_count})")]
    InvalidVertex { vertex: VertexId, vertex_count: usize },

    #[error("Vertex limit exceeded: requested {requested}, max {max}")]
    VertexLimit { requested: usize, max: usize },

    #[error("Edge limit exceeded: max {max}")]
    EdgeLimit { max: usize },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// True for the out-of-range vertex failure, the only error a query can return.
    #[inline]
    #[must_use]
    pub fn is_invalid_vertex(&self) -> bool {
        matches!(self, Error::InvalidVertex { .. })
    }
}
