//! Text and JSON rendering of graphs and query results.

use friendpath_core::{Error, FriendPath, PathOutcome, Result, SocialGraph, VertexId};
use serde::{Deserialize, Serialize};

/// Outcome of a query as typed by a user, invalid ids included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryResult {
    Found(FriendPath),
    Unreachable,
    InvalidVertex,
}

/// Runs a query with signed ids; negative or out-of-range ids become
/// [`QueryResult::InvalidVertex`].
pub fn run_query(graph: &SocialGraph, source: i64, destination: i64) -> Result<QueryResult> {
    let (Ok(src), Ok(dest)) = (VertexId::try_from(source), VertexId::try_from(destination)) else {
        return Ok(QueryResult::InvalidVertex);
    };
    match graph.shortest_path(src, dest) {
        Ok(PathOutcome::Found(path)) => Ok(QueryResult::Found(path)),
        Ok(PathOutcome::Unreachable) => Ok(QueryResult::Unreachable),
        Err(e) if e.is_invalid_vertex() => Ok(QueryResult::InvalidVertex),
        Err(e) => Err(e),
    }
}

pub fn render_adjacency(graph: &SocialGraph) -> String {
    let mut out = String::new();
    for (v, neighbors) in graph.adjacency_lists().iter().enumerate() {
        out.push_str(&format!("Adjacency list of vertex {}:\n", v));
        for n in neighbors {
            out.push_str(&format!("{} -> ", n));
        }
        out.push_str("NULL\n");
    }
    out
}

pub fn render_query(source: i64, destination: i64, result: &QueryResult) -> String {
    match result {
        QueryResult::InvalidVertex => "Invalid source or destination vertex.\n".to_string(),
        QueryResult::Unreachable => format!(
            "Shortest path from {} to {}: No path exists.\n",
            source, destination
        ),
        QueryResult::Found(path) => {
            format!("Shortest path from {} to {}: {}\n", source, destination, path)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryStatus {
    Found,
    Unreachable,
    InvalidVertex,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryReport {
    pub source: i64,
    pub destination: i64,
    pub status: QueryStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<VertexId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hops: Option<usize>,
}

impl QueryReport {
    pub fn new(source: i64, destination: i64, result: &QueryResult) -> Self {
        let (status, path, hops) = match result {
            QueryResult::Found(path) => (
                QueryStatus::Found,
                Some(path.vertices().to_vec()),
                Some(path.hops()),
            ),
            QueryResult::Unreachable => (QueryStatus::Unreachable, None, None),
            QueryResult::InvalidVertex => (QueryStatus::InvalidVertex, None, None),
        };
        Self {
            source,
            destination,
            status,
            path,
            hops,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphReport {
    pub vertex_count: usize,
    pub edge_count: usize,
    pub adjacency: Vec<Vec<VertexId>>,
}

impl GraphReport {
    pub fn new(graph: &SocialGraph) -> Self {
        Self {
            vertex_count: graph.vertex_count(),
            edge_count: graph.edge_count(),
            adjacency: graph.adjacency_lists(),
        }
    }
}

/// Everything a CLI run prints in JSON mode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graph: Option<GraphReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<QueryReport>,
}

impl Report {
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Serialization(e.to_string()))
    }
}
