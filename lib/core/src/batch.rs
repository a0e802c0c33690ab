//! Parallel queries against a finished graph.
//!
//! `SocialGraph` has no interior mutability, so shared references can be
//! handed to worker threads directly. Each query owns its traversal state.

use crate::graph::{SocialGraph, VertexId};
use crate::path::{shortest_path, PathOutcome};
use crate::Result;
use rayon::prelude::*;

/// Answers every `(src, dest)` query; results are in input order.
pub fn shortest_paths(
    graph: &SocialGraph,
    queries: &[(VertexId, VertexId)],
) -> Vec<Result<PathOutcome>> {
    let results: Vec<_> = queries
        .par_iter()
        .map(|&(src, dest)| shortest_path(graph, src, dest))
        .collect();
    tracing::debug!(queries = queries.len(), "batch answered");
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_batch_matches_sequential() {
        let graph = SocialGraph::from_edges(
            6,
            [(0, 1), (1, 2), (2, 3), (3, 0), (0, 4), (4, 5)],
        )
        .unwrap();
        let queries = vec![(3, 5), (0, 0), (5, 2), (1, 4)];

        let batch = shortest_paths(&graph, &queries);
        assert_eq!(batch.len(), queries.len());
        for (result, &(src, dest)) in batch.into_iter().zip(&queries) {
            assert_eq!(result.unwrap(), graph.shortest_path(src, dest).unwrap());
        }
    }

    #[test]
    fn test_batch_reports_invalid_per_query() {
        let graph = SocialGraph::from_edges(3, [(0, 1)]).unwrap();
        let batch = shortest_paths(&graph, &[(0, 1), (0, 9), (0, 2)]);

        assert!(batch[0].as_ref().unwrap().is_reachable());
        assert!(batch[1].as_ref().unwrap_err().is_invalid_vertex());
        assert_eq!(*batch[2].as_ref().unwrap(), PathOutcome::Unreachable);
    }

    #[test]
    fn test_shared_graph_across_threads() {
        let graph = Arc::new(SocialGraph::from_edges(4, [(0, 1), (1, 2), (2, 3)]).unwrap());
        let handles: Vec<_> = (0..4)
            .map(|dest| {
                let graph = Arc::clone(&graph);
                std::thread::spawn(move || graph.shortest_path(0, dest).unwrap())
            })
            .collect();

        for (dest, handle) in handles.into_iter().enumerate() {
            let path = handle.join().unwrap().into_path().unwrap();
            assert_eq!(path.hops(), dest);
        }
    }
}
