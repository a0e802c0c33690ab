//! # friendpath
//!
//! Shortest friendship paths in a social network.
//!
//! Users are the integer ids `0..n`; friendships are undirected edges. A query
//! between two users returns a minimum-hop chain of friends, computed by
//! breadth-first search over the adjacency lists.
//!
//! ## Quick Start
//!
//! ### As a CLI
//!
//! ```bash
//! cargo install friendpath
//! printf '5 4\n0 1\n1 2\n2 3\n3 4\n0 4\n' | friendpath
//! friendpath --input session.txt --from 0 --to 4 --format json
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use friendpath::prelude::*;
//!
//! let graph = SocialGraph::from_edges(4, [(0, 1), (2, 3)]).unwrap();
//! assert_eq!(graph.shortest_path(0, 3).unwrap(), PathOutcome::Unreachable);
//! assert!(graph.shortest_path(0, 7).is_err());
//! ```
//!
//! ## Crate Structure
//!
//! - [`friendpath-core`](https://docs.rs/friendpath-core) - Graph, BFS, limits, parallel batch queries
//! - [`session`] - Reading the interactive text format
//! - [`report`] - Text and JSON output

pub mod report;
pub mod session;

// Re-export core types
pub use friendpath_core::{
    batch, bfs_tree, degrees_of_separation, shortest_path, BfsTree, Edge, Error, FriendPath,
    GraphLimits, Neighbors, PathOutcome, Result, SocialGraph, VertexId,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::report::{run_query, QueryResult};
    pub use crate::session::{read_session, Query, Session};
    pub use crate::{
        shortest_path, BfsTree, Edge, Error, FriendPath, GraphLimits, PathOutcome, Result,
        SocialGraph, VertexId,
    };
}
