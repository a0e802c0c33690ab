use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use friendpath::report::{self, GraphReport, QueryReport, Report};
use friendpath::session::{self, Query, TokenReader};
use friendpath::GraphLimits;
use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal, Write};
use std::path::PathBuf;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Find the shortest chain of friends between two users
#[derive(Parser, Debug)]
#[command(name = "friendpath")]
#[command(about = "Shortest friendship paths in a social network", long_about = None)]
struct Args {
    /// Session file (user count, friendship count, pairs, query); stdin if omitted
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Source user; overrides the query in the input together with --to
    #[arg(long, allow_negative_numbers = true)]
    from: Option<i64>,

    /// Destination user
    #[arg(long, allow_negative_numbers = true)]
    to: Option<i64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Do not print the adjacency lists
    #[arg(long)]
    no_adjacency: bool,

    /// Largest accepted number of users
    #[arg(long, default_value_t = GraphLimits::default().max_vertices)]
    max_vertices: usize,

    /// Largest accepted number of friendships
    #[arg(long, default_value_t = GraphLimits::default().max_edges)]
    max_edges: usize,

    /// Log level
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let interactive = args.input.is_none() && io::stdin().is_terminal();
    let reader: Box<dyn BufRead> = match &args.input {
        Some(path) => {
            info!("Reading session from {:?}", path);
            let file = File::open(path).with_context(|| format!("cannot open {:?}", path))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };

    let mut stderr = io::stderr();
    let mut sink = io::sink();
    let prompt: &mut dyn Write = if interactive { &mut stderr } else { &mut sink };

    let mut stdout = io::stdout().lock();
    run(&args, reader, prompt, &mut stdout)
}

/// Reads a session from `reader`, answers the query and writes the result to `out`.
///
/// An invalid query vertex is a printed outcome; malformed input, rejected
/// friendships and limit violations are errors.
fn run(
    args: &Args,
    reader: impl BufRead,
    prompt: &mut dyn Write,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let limits = GraphLimits::new(args.max_vertices, args.max_edges);
    let override_query = match (args.from, args.to) {
        (Some(source), Some(destination)) => Some(Query::new(source, destination)),
        (None, None) => None,
        _ => bail!("--from and --to must be given together"),
    };

    let mut tokens = TokenReader::new(reader);
    let input = session::read_graph_section(&mut tokens, prompt, &limits)
        .context("failed to read friendships")?;
    let graph = input
        .build_graph(limits)
        .map_err(|e| {
            warn!("Rejected friendship list: {}", e);
            e
        })
        .context("failed to build the friendship graph")?;
    info!(
        "Graph ready: {} users, {} friendships",
        graph.vertex_count(),
        graph.edge_count()
    );

    let mut json = Report::default();

    if !args.no_adjacency {
        match args.format {
            OutputFormat::Text => out.write_all(report::render_adjacency(&graph).as_bytes())?,
            OutputFormat::Json => json.graph = Some(GraphReport::new(&graph)),
        }
        out.flush()?;
    }

    let query = match override_query {
        Some(query) => query,
        None => session::read_query(&mut tokens, prompt)
            .context("failed to read the query")?,
    };

    let result = report::run_query(&graph, query.source, query.destination)?;
    if result == report::QueryResult::InvalidVertex {
        warn!(
            "Query ({}, {}) is outside [0, {})",
            query.source,
            query.destination,
            graph.vertex_count()
        );
    }

    match args.format {
        OutputFormat::Text => {
            let text = report::render_query(query.source, query.destination, &result);
            out.write_all(text.as_bytes())?;
        }
        OutputFormat::Json => {
            json.query = Some(QueryReport::new(query.source, query.destination, &result));
            writeln!(out, "{}", json.to_json()?)?;
        }
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_with(cli: &[&str], input: &str) -> (anyhow::Result<()>, String) {
        let args = Args::try_parse_from(std::iter::once("friendpath").chain(cli.iter().copied()))
            .unwrap();
        let mut out = Vec::new();
        let result = run(&args, Cursor::new(input.to_string()), &mut io::sink(), &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_out_of_range_friendship_fails() {
        let (result, out) = run_with(&[], "3 1 0 5 0 1");
        let err = result.unwrap_err();
        assert!(format!("{:#}", err).contains("Invalid vertex: 5 is outside [0, 3)"));
        assert!(out.is_empty());
    }

    #[test]
    fn test_invalid_query_is_printed_not_failed() {
        let (result, out) = run_with(&[], "3 0 0 7");
        assert!(result.is_ok());
        assert!(out.starts_with("Adjacency list of vertex 0:\nNULL\n"));
        assert!(out.ends_with("Invalid source or destination vertex.\n"));
    }

    #[test]
    fn test_from_without_to_is_rejected() {
        let (result, out) = run_with(&["--from", "1"], "3 0");
        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "--from and --to must be given together");
        assert!(out.is_empty());
    }

    #[test]
    fn test_json_reports_invalid_vertex() {
        let (result, out) = run_with(
            &["--from", "-1", "--to", "1", "--format", "json"],
            "3 1 0 1",
        );
        assert!(result.is_ok());
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["query"]["status"], "invalid_vertex");
        assert_eq!(value["query"]["source"], -1);
        assert_eq!(value["graph"]["edge_count"], 1);
    }

    #[test]
    fn test_text_path_with_override_skips_query_input() {
        let (result, out) = run_with(
            &["--from", "3", "--to", "5", "--no-adjacency"],
            "6 6 0 1 1 2 2 3 3 0 0 4 4 5",
        );
        assert!(result.is_ok());
        assert_eq!(out, "Shortest path from 3 to 5: 3 -> 0 -> 4 -> 5\n");
    }
}
