//! Unweighted shortest friendship paths by breadth-first search.
//!
//! A query allocates its own traversal state (visited set, distances, parent
//! tree and FIFO frontier) and drops it on return. The graph is only read.

use crate::graph::{SocialGraph, VertexId};
use crate::visited::VisitedSet;
use crate::{Error, Result};
use serde::Serialize;
use std::collections::VecDeque;
use std::fmt;

/// A minimum-hop path, source first, destination last. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FriendPath {
    vertices: Vec<VertexId>,
}

impl FriendPath {
    #[inline]
    pub fn source(&self) -> VertexId {
        self.vertices[0]
    }

    #[inline]
    pub fn destination(&self) -> VertexId {
        self.vertices[self.vertices.len() - 1]
    }

    /// Number of edges on the path; zero when source and destination coincide.
    #[inline]
    pub fn hops(&self) -> usize {
        self.vertices.len() - 1
    }

    #[inline]
    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    #[inline]
    pub fn into_vec(self) -> Vec<VertexId> {
        self.vertices
    }
}

impl fmt::Display for FriendPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.vertices.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{}", v)?;
        }
        Ok(())
    }
}

/// Result of a query between two valid vertices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathOutcome {
    Found(FriendPath),
    /// No sequence of friendships connects the two users.
    Unreachable,
}

impl PathOutcome {
    #[inline]
    pub fn is_reachable(&self) -> bool {
        matches!(self, PathOutcome::Found(_))
    }

    pub fn path(&self) -> Option<&FriendPath> {
        match self {
            PathOutcome::Found(path) => Some(path),
            PathOutcome::Unreachable => None,
        }
    }

    pub fn into_path(self) -> Option<FriendPath> {
        match self {
            PathOutcome::Found(path) => Some(path),
            PathOutcome::Unreachable => None,
        }
    }
}

/// Parent tree and hop distances from a single source.
#[derive(Debug, Clone)]
pub struct BfsTree {
    source: VertexId,
    visited: VisitedSet,
    distance: Vec<Option<usize>>,
    parent: Vec<Option<VertexId>>,
}

impl BfsTree {
    #[inline]
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Hop count from the source, or `None` if `v` was not reached.
    pub fn distance(&self, v: VertexId) -> Option<usize> {
        self.distance.get(v).copied().flatten()
    }

    /// Predecessor of `v` on its shortest path. `None` for the source and
    /// for unreached vertices.
    pub fn parent(&self, v: VertexId) -> Option<VertexId> {
        self.parent.get(v).copied().flatten()
    }

    #[inline]
    pub fn is_reachable(&self, v: VertexId) -> bool {
        self.visited.contains(v)
    }

    /// Vertices reached, the source included.
    #[inline]
    pub fn reachable_count(&self) -> usize {
        self.visited.len()
    }

    /// Walks parent pointers from `dest` back to the source.
    pub fn path_to(&self, dest: VertexId) -> Result<PathOutcome> {
        if dest >= self.parent.len() {
            return Err(Error::InvalidVertex {
                vertex: dest,
                vertex_count: self.parent.len(),
            });
        }
        if !self.visited.contains(dest) {
            return Ok(PathOutcome::Unreachable);
        }

        let mut vertices = Vec::with_capacity(self.distance[dest].unwrap_or(0) + 1);
        let mut current = Some(dest);
        while let Some(v) = current {
            vertices.push(v);
            current = self.parent[v];
        }
        vertices.reverse();
        Ok(PathOutcome::Found(FriendPath { vertices }))
    }
}

/// Runs BFS from `src`, stopping as soon as `stop_at` is discovered.
///
/// `src` must already be validated.
fn traverse(graph: &SocialGraph, src: VertexId, stop_at: Option<VertexId>) -> BfsTree {
    let n = graph.vertex_count();
    let mut tree = BfsTree {
        source: src,
        visited: VisitedSet::new(n),
        distance: vec![None; n],
        parent: vec![None; n],
    };
    let mut frontier = VecDeque::new();

    tree.visited.insert(src);
    tree.distance[src] = Some(0);
    frontier.push_back(src);

    if stop_at == Some(src) {
        return tree;
    }

    while let Some(u) = frontier.pop_front() {
        let next_distance = tree.distance[u].map(|d| d + 1);
        for v in graph.neighbors_unchecked(u) {
            if tree.visited.insert(v) {
                tree.distance[v] = next_distance;
                tree.parent[v] = Some(u);
                if stop_at == Some(v) {
                    return tree;
                }
                frontier.push_back(v);
            }
        }
    }
    tree
}

/// Full traversal from `src`, for answering many destinations at once.
pub fn bfs_tree(graph: &SocialGraph, src: VertexId) -> Result<BfsTree> {
    graph.check_vertex(src)?;
    let tree = traverse(graph, src, None);
    tracing::debug!(src, reached = tree.reachable_count(), "bfs tree built");
    Ok(tree)
}

/// Finds a minimum-hop path from `src` to `dest`.
///
/// When several shortest paths exist, the one reported follows the first
/// discovered predecessor at each step, i.e. it depends on neighbor order.
pub fn shortest_path(graph: &SocialGraph, src: VertexId, dest: VertexId) -> Result<PathOutcome> {
    graph.check_vertex(src)?;
    graph.check_vertex(dest)?;

    let outcome = traverse(graph, src, Some(dest)).path_to(dest)?;
    match &outcome {
        PathOutcome::Found(path) => tracing::debug!(src, dest, hops = path.hops(), "path found"),
        PathOutcome::Unreachable => tracing::debug!(src, dest, "no path"),
    }
    Ok(outcome)
}

/// Hop count between two users, `None` when unreachable.
pub fn degrees_of_separation(
    graph: &SocialGraph,
    src: VertexId,
    dest: VertexId,
) -> Result<Option<usize>> {
    Ok(shortest_path(graph, src, dest)?
        .into_path()
        .map(|path| path.hops()))
}

impl SocialGraph {
    /// See [`shortest_path`].
    pub fn shortest_path(&self, src: VertexId, dest: VertexId) -> Result<PathOutcome> {
        shortest_path(self, src, dest)
    }

    /// See [`bfs_tree`].
    pub fn bfs_tree(&self, src: VertexId) -> Result<BfsTree> {
        bfs_tree(self, src)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_of(outcome: PathOutcome) -> Vec<VertexId> {
        outcome.into_path().expect("expected a path").into_vec()
    }

    #[test]
    fn test_line_graph() {
        let graph = SocialGraph::from_edges(5, [(0, 1), (1, 2), (2, 3), (3, 4)]).unwrap();
        let outcome = shortest_path(&graph, 0, 4).unwrap();
        assert_eq!(path_of(outcome), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_disconnected() {
        let graph = SocialGraph::from_edges(4, [(0, 1), (2, 3)]).unwrap();
        assert_eq!(shortest_path(&graph, 0, 3).unwrap(), PathOutcome::Unreachable);
        assert_eq!(degrees_of_separation(&graph, 0, 3).unwrap(), None);
    }

    #[test]
    fn test_self_path() {
        let graph = SocialGraph::new(3);
        let outcome = shortest_path(&graph, 1, 1).unwrap();
        let path = outcome.into_path().unwrap();
        assert_eq!(path.vertices(), &[1]);
        assert_eq!(path.hops(), 0);
    }

    #[test]
    fn test_cycle_takes_short_route() {
        let graph = SocialGraph::from_edges(
            6,
            [(0, 1), (1, 2), (2, 3), (3, 0), (0, 4), (4, 5)],
        )
        .unwrap();
        let outcome = shortest_path(&graph, 3, 5).unwrap();
        assert_eq!(path_of(outcome), vec![3, 0, 4, 5]);
    }

    #[test]
    fn test_invalid_vertex() {
        let graph = SocialGraph::new(3);
        let err = shortest_path(&graph, 0, 5).unwrap_err();
        assert!(matches!(err, Error::InvalidVertex { vertex: 5, vertex_count: 3 }));
        assert!(shortest_path(&graph, 3, 0).is_err());
    }

    #[test]
    fn test_tie_break_follows_neighbor_order() {
        // Two routes 0-1-3 and 0-2-3; 2 was inserted last so it is expanded first.
        let graph = SocialGraph::from_edges(4, [(0, 1), (0, 2), (1, 3), (2, 3)]).unwrap();
        let outcome = shortest_path(&graph, 0, 3).unwrap();
        assert_eq!(path_of(outcome), vec![0, 2, 3]);
    }

    #[test]
    fn test_bfs_tree_distances() {
        let graph = SocialGraph::from_edges(6, [(0, 1), (1, 2), (0, 3), (4, 5)]).unwrap();
        let tree = bfs_tree(&graph, 0).unwrap();

        assert_eq!(tree.source(), 0);
        assert_eq!(tree.distance(0), Some(0));
        assert_eq!(tree.distance(2), Some(2));
        assert_eq!(tree.distance(4), None);
        assert_eq!(tree.parent(0), None);
        assert_eq!(tree.parent(2), Some(1));
        assert_eq!(tree.reachable_count(), 4);
        assert!(!tree.is_reachable(5));
        assert_eq!(tree.path_to(5).unwrap(), PathOutcome::Unreachable);
        assert_eq!(path_of(tree.path_to(2).unwrap()), vec![0, 1, 2]);
        assert!(tree.path_to(6).is_err());
    }

    #[test]
    fn test_self_loop_and_duplicates_are_harmless() {
        let graph = SocialGraph::from_edges(3, [(0, 0), (0, 1), (0, 1), (1, 2)]).unwrap();
        let outcome = shortest_path(&graph, 0, 2).unwrap();
        assert_eq!(path_of(outcome), vec![0, 1, 2]);
    }

    #[test]
    fn test_display() {
        let graph = SocialGraph::from_edges(3, [(0, 1), (1, 2)]).unwrap();
        let path = graph.shortest_path(2, 0).unwrap().into_path().unwrap();
        assert_eq!(path.to_string(), "2 -> 1 -> 0");
        assert_eq!(path.source(), 2);
        assert_eq!(path.destination(), 0);
    }
}
