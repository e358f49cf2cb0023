//! Command-line front end for `sloan-ordering`.
//!
//! Reads an edge list (or the built-in pgRouting sample network), computes
//! the Sloan ordering and reports bandwidth and profile against the natural
//! ascending-id ordering.

pub mod cli;
pub mod errors;
pub mod input;
pub mod render;
pub mod tracing;

pub use cli::{Cli, OutputFormat};
pub use errors::{CliError, Result};

use sloan_ordering::{Graph, ReorderingReport, sample};

const SAMPLE_TITLE: &str = "pgRouting Sample Data - Sloan Ordering Test";

/// Run one invocation and return the rendered report.
///
/// # Errors
///
/// Returns a [`CliError`] if the edge list cannot be read or parsed, the
/// graph cannot be ordered, or the report cannot be rendered.
pub fn run(cli: &Cli) -> Result<String> {
    let (edges, title) = match &cli.edges {
        Some(path) => (
            input::read_edges(path)?,
            format!("Sloan Ordering - {}", path.display()),
        ),
        None => (sample::pgrouting_sample(), SAMPLE_TITLE.to_string()),
    };

    let graph = Graph::from_edges(edges);
    let report = ReorderingReport::build(&graph, &cli.weights())?;
    render::render(&report, &title, cli.format)
}
