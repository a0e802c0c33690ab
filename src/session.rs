//! Reading a friendship session from text.
//!
//! The format is a stream of whitespace-separated integers, in the order an
//! interactive user is asked for them: number of users, number of
//! friendships, one `u v` pair per friendship, then the `source destination`
//! query. Line breaks carry no meaning.

use friendpath_core::{Edge, Error, GraphLimits, Result, SocialGraph};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

const PROMPT_USERS: &str = "Enter the number of users (vertices): ";
const PROMPT_FRIENDSHIPS: &str = "Enter the number of friendships (edges): ";
const PROMPT_EDGES: &str =
    "Enter the friendships (e.g., '1 2' for friendship between user 1 and user 2):\n";
const PROMPT_QUERY: &str = "\nEnter source and destination users to find shortest path: ";

/// Pulls integer tokens from a reader one line at a time, so prompts can be
/// interleaved with input.
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    pub fn next_token(&mut self) -> Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }

    /// Next token as an integer; `what` names the expected value in errors.
    pub fn next_int(&mut self, what: &str) -> Result<i64> {
        let token = self.next_token()?.ok_or_else(|| {
            Error::InvalidInput(format!("unexpected end of input, expected {}", what))
        })?;
        token
            .parse::<i64>()
            .map_err(|_| Error::InvalidInput(format!("expected {}, found {:?}", what, token)))
    }
}

/// A `source destination` pair as typed. Ids stay signed so a negative id
/// surfaces as an invalid vertex rather than a parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    pub source: i64,
    pub destination: i64,
}

impl Query {
    #[must_use]
    pub fn new(source: i64, destination: i64) -> Self {
        Self {
            source,
            destination,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub vertex_count: usize,
    pub edges: Vec<Edge>,
    pub query: Option<Query>,
}

impl Session {
    pub fn build_graph(&self, limits: GraphLimits) -> Result<SocialGraph> {
        SocialGraph::from_edges_with_limits(self.vertex_count, self.edges.iter().copied(), limits)
    }
}

fn say(prompt: &mut dyn Write, text: &str) -> Result<()> {
    prompt.write_all(text.as_bytes())?;
    prompt.flush()?;
    Ok(())
}

fn to_count(value: i64, what: &str) -> Result<usize> {
    usize::try_from(value)
        .map_err(|_| Error::InvalidInput(format!("{} must be non-negative, got {}", what, value)))
}

fn to_user(value: i64, edge_index: usize) -> Result<usize> {
    usize::try_from(value).map_err(|_| {
        Error::InvalidInput(format!(
            "friendship {}: user id must be non-negative, got {}",
            edge_index + 1,
            value
        ))
    })
}

/// Reads the user count, friendship count and friendship pairs.
///
/// Prompts go to `prompt`; pass [`io::sink`] when nobody is typing.
/// Both counts are checked against `limits` before any edge is read.
pub fn read_graph_section<R: BufRead>(
    tokens: &mut TokenReader<R>,
    prompt: &mut dyn Write,
    limits: &GraphLimits,
) -> Result<Session> {
    say(prompt, PROMPT_USERS)?;
    let vertex_count = to_count(tokens.next_int("number of users")?, "number of users")?;
    limits.validate_vertex_count(vertex_count)?;

    say(prompt, PROMPT_FRIENDSHIPS)?;
    let edge_count = to_count(
        tokens.next_int("number of friendships")?,
        "number of friendships",
    )?;
    limits.validate_edge_count(edge_count)?;

    say(prompt, PROMPT_EDGES)?;
    let mut edges = Vec::with_capacity(edge_count.min(4096));
    for i in 0..edge_count {
        let a = to_user(tokens.next_int("friendship endpoint")?, i)?;
        let b = to_user(tokens.next_int("friendship endpoint")?, i)?;
        edges.push(Edge::new(a, b));
    }

    Ok(Session {
        vertex_count,
        edges,
        query: None,
    })
}

pub fn read_query<R: BufRead>(
    tokens: &mut TokenReader<R>,
    prompt: &mut dyn Write,
) -> Result<Query> {
    say(prompt, PROMPT_QUERY)?;
    let source = tokens.next_int("source user")?;
    let destination = tokens.next_int("destination user")?;
    Ok(Query::new(source, destination))
}

/// Reads a whole session without prompting.
pub fn read_session<R: BufRead>(
    reader: R,
    with_query: bool,
    limits: &GraphLimits,
) -> Result<Session> {
    let mut tokens = TokenReader::new(reader);
    let mut session = read_graph_section(&mut tokens, &mut io::sink(), limits)?;
    if with_query {
        session.query = Some(read_query(&mut tokens, &mut io::sink())?);
    }
    Ok(session)
}

pub fn read_session_file(
    path: impl AsRef<Path>,
    with_query: bool,
    limits: &GraphLimits,
) -> Result<Session> {
    let file = File::open(path.as_ref())?;
    read_session(BufReader::new(file), with_query, limits)
}
