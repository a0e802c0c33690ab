//! Undirected friendship graph over integer-labeled users.
//!
//! Vertices are the ids `0..vertex_count`, fixed at construction. Each vertex
//! owns a neighbor list; inserting an edge appends to both endpoints' lists,
//! so the adjacency relation is always symmetric.

use crate::{Error, GraphLimits, Result};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::iter::{Copied, Rev};
use std::ops::Range;
use std::slice;

pub type VertexId = usize;

/// Most users have a handful of friends; keep those lists inline.
type NeighborList = SmallVec<[VertexId; 4]>;

/// An unordered pair of vertex ids. Not stored by the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub a: VertexId,
    pub b: VertexId,
}

impl Edge {
    #[inline]
    #[must_use]
    pub fn new(a: VertexId, b: VertexId) -> Self {
        Self { a, b }
    }
}

impl From<(VertexId, VertexId)> for Edge {
    fn from((a, b): (VertexId, VertexId)) -> Self {
        Self { a, b }
    }
}

/// Adjacency-list graph, built once and then queried.
///
/// Parallel edges and self-loops are accepted as-is: a repeated edge leaves a
/// duplicate neighbor entry, and a self-loop lists the vertex as its own
/// neighbor twice. Neither affects traversal results.
#[derive(Debug, Clone)]
pub struct SocialGraph {
    adjacency: Vec<NeighborList>,
    edge_count: usize,
    limits: GraphLimits,
}

impl SocialGraph {
    /// Creates a graph with `vertex_count` users and no friendships.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![NeighborList::new(); vertex_count],
            edge_count: 0,
            limits: GraphLimits::UNBOUNDED,
        }
    }

    /// Creates an empty graph, rejecting a vertex count above `limits.max_vertices`
    /// before anything is allocated.
    pub fn with_limits(vertex_count: usize, limits: GraphLimits) -> Result<Self> {
        limits.validate_vertex_count(vertex_count)?;
        Ok(Self {
            adjacency: vec![NeighborList::new(); vertex_count],
            edge_count: 0,
            limits,
        })
    }

    pub fn from_edges<I, E>(vertex_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge>,
    {
        Self::from_edges_with_limits(vertex_count, edges, GraphLimits::UNBOUNDED)
    }

    /// Builds a graph from an edge sequence. The first rejected edge aborts the build.
    pub fn from_edges_with_limits<I, E>(
        vertex_count: usize,
        edges: I,
        limits: GraphLimits,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge>,
    {
        let mut graph = Self::with_limits(vertex_count, limits)?;
        for edge in edges {
            let edge = edge.into();
            graph.add_edge(edge.a, edge.b)?;
        }
        tracing::debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "graph built"
        );
        Ok(graph)
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of successful `add_edge` calls, duplicates included.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    #[inline]
    pub fn limits(&self) -> GraphLimits {
        self.limits
    }

    #[inline]
    pub fn contains_vertex(&self, v: VertexId) -> bool {
        v < self.adjacency.len()
    }

    pub fn vertices(&self) -> Range<VertexId> {
        0..self.adjacency.len()
    }

    pub(crate) fn check_vertex(&self, v: VertexId) -> Result<()> {
        if !self.contains_vertex(v) {
            return Err(Error::InvalidVertex {
                vertex: v,
                vertex_count: self.vertex_count(),
            });
        }
        Ok(())
    }

    /// Inserts the undirected edge `{u, v}`.
    ///
    /// Both ids and the edge cap are checked before anything is written, so a
    /// failed call leaves the graph untouched.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId) -> Result<()> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        self.limits.validate_edge_count(self.edge_count + 1)?;

        self.adjacency[u].push(v);
        self.adjacency[v].push(u);
        self.edge_count += 1;
        tracing::trace!(u, v, "edge inserted");
        Ok(())
    }

    /// Neighbors of `v`, most recently inserted first.
    ///
    /// This order decides which of several equally short paths a query reports.
    pub fn neighbors(&self, v: VertexId) -> Result<Neighbors<'_>> {
        self.check_vertex(v)?;
        Ok(self.neighbors_unchecked(v))
    }

    #[inline]
    pub(crate) fn neighbors_unchecked(&self, v: VertexId) -> Neighbors<'_> {
        Neighbors {
            inner: self.adjacency[v].iter().rev().copied(),
        }
    }

    pub fn degree(&self, v: VertexId) -> Result<usize> {
        self.check_vertex(v)?;
        Ok(self.adjacency[v].len())
    }

    pub fn has_edge(&self, u: VertexId, v: VertexId) -> Result<bool> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        Ok(self.adjacency[u].contains(&v))
    }

    /// Every neighbor list, in enumeration order.
    pub fn adjacency_lists(&self) -> Vec<Vec<VertexId>> {
        self.vertices()
            .map(|v| self.neighbors_unchecked(v).collect())
            .collect()
    }
}

/// Iterator over a vertex's neighbor ids.
#[derive(Debug, Clone)]
pub struct Neighbors<'a> {
    inner: Copied<Rev<slice::Iter<'a, VertexId>>>,
}

impl Iterator for Neighbors<'_> {
    type Item = VertexId;

    #[inline]
    fn next(&mut self) -> Option<VertexId> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Neighbors<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<VertexId> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for Neighbors<'_> {}
