//! # friendpath Core
//!
//! Core library for friendpath, a shortest-friendship-path engine over an
//! undirected social graph.
//!
//! This crate provides the fundamental data structures and algorithms:
//!
//! - [`SocialGraph`] - Adjacency-list graph over users `0..vertex_count`
//! - [`shortest_path`] - BFS minimum-hop path with parent-tree reconstruction
//! - [`BfsTree`] - Distances and parents from one source
//! - [`batch::shortest_paths`] - Many queries in parallel over a shared graph
//! - [`GraphLimits`] - Caps for graphs built from untrusted input
//!
//! ## Example
//!
//! ```rust
//! use friendpath_core::{SocialGraph, PathOutcome};
//!
//! let mut graph = SocialGraph::new(5);
//! for (u, v) in [(0, 1), (1, 2), (2, 3), (3, 4)] {
//!     graph.add_edge(u, v).unwrap();
//! }
//!
//! match graph.shortest_path(0, 4).unwrap() {
//!     PathOutcome::Found(path) => assert_eq!(path.to_string(), "0 -> 1 -> 2 -> 3 -> 4"),
//!     PathOutcome::Unreachable => unreachable!(),
//! }
//! ```

pub mod batch;
pub mod config;
pub mod error;
pub mod graph;
pub mod path;
pub mod visited;

pub use config::GraphLimits;
pub use error::{Error, Result};
pub use graph::{Edge, Neighbors, SocialGraph, VertexId};
pub use path::{bfs_tree, degrees_of_separation, shortest_path, BfsTree, FriendPath, PathOutcome};
pub use visited::VisitedSet;
