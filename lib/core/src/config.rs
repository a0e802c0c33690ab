use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Caps on graph size, checked before any allocation or insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphLimits {
    pub max_vertices: usize,
    pub max_edges: usize,
}

impl GraphLimits {
    /// No caps at all. Used for graphs built from trusted, in-process data.
    pub const UNBOUNDED: GraphLimits = GraphLimits {
        max_vertices: usize::MAX,
        max_edges: usize::MAX,
    };

    #[inline]
    #[must_use]
    pub fn new(max_vertices: usize, max_edges: usize) -> Self {
        Self {
            max_vertices,
            max_edges,
        }
    }

    pub fn validate_vertex_count(&self, vertex_count: usize) -> Result<()> {
        if vertex_count > self.max_vertices {
            return Err(Error::VertexLimit {
                requested: vertex_count,
                max: self.max_vertices,
            });
        }
        Ok(())
    }

    pub fn validate_edge_count(&self, edge_count: usize) -> Result<()> {
        if edge_count > self.max_edges {
            return Err(Error::EdgeLimit {
                max: self.max_edges,
            });
        }
        Ok(())
    }
}

impl Default for GraphLimits {
    fn default() -> Self {
        Self {
            max_vertices: 1_000_000,
            max_edges: 10_000_000,
        }
    }
}
