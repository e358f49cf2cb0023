//! Edge-list parsing.
//!
//! One edge per line, fields separated by commas or whitespace. Two layouts
//! are accepted, chosen per line by field count:
//!
//! - `source,target[,cost]`
//! - `id,source,target,cost` (a pgRouting edge table export)
//!
//! Blank lines and `#` comments are skipped, as is a header line whose first
//! field is not numeric when it precedes every edge.

use crate::errors::{CliError, Result};
use sloan_ordering::Edge;
use std::path::Path;
use tracing::debug;

/// Read and parse an edge list from `path`.
///
/// # Errors
///
/// Returns [`CliError::FileError`] if the file cannot be read, and the
/// errors of [`parse_edges`] otherwise.
pub fn read_edges(path: &Path) -> Result<Vec<Edge<i64>>> {
    let text = std::fs::read_to_string(path).map_err(|e| CliError::file(path, e))?;
    let edges = parse_edges(&text)?;
    debug!(path = %path.display(), edges = edges.len(), "Loaded edge list");
    Ok(edges)
}

/// Parse edge-list text.
///
/// # Errors
///
/// Returns [`CliError::ParseError`] with the one-based line number of the
/// first malformed line, or [`CliError::EmptyInput`] if no edge was found.
pub fn parse_edges(text: &str) -> Result<Vec<Edge<i64>>> {
    let mut edges = Vec::new();
    let mut header_allowed = true;

    for (index, raw) in text.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|field| !field.is_empty())
            .collect();

        if std::mem::take(&mut header_allowed) && is_header(&fields) {
            debug!(line = index + 1, "Skipping header");
            continue;
        }

        edges.push(parse_line(index + 1, &fields)?);
    }

    if edges.is_empty() {
        return Err(CliError::EmptyInput);
    }
    Ok(edges)
}

fn is_header(fields: &[&str]) -> bool {
    fields
        .first()
        .is_some_and(|first| first.parse::<f64>().is_err())
}

fn parse_line(line: usize, fields: &[&str]) -> Result<Edge<i64>> {
    let (source, target, cost) = match fields {
        [source, target] => (*source, *target, None),
        [source, target, cost] => (*source, *target, Some(*cost)),
        [_id, source, target, cost] => (*source, *target, Some(*cost)),
        _ => {
            return Err(CliError::parse(
                line,
                format!("expected 2 to 4 fields, found {}", fields.len()),
            ));
        }
    };

    let vertex = |field: &str| {
        field
            .parse::<i64>()
            .map_err(|_| CliError::parse(line, format!("vertex id '{field}' is not an integer")))
    };
    let weight = match cost {
        Some(field) => field
            .parse::<f64>()
            .map_err(|_| CliError::parse(line, format!("cost '{field}' is not a number")))?,
        None => 1.0,
    };

    Ok(Edge::new(vertex(source)?, vertex(target)?, weight))
}
