//! Report rendering for stdout.

use crate::cli::OutputFormat;
use crate::errors::Result;
use serde::Serialize;
use sloan_ordering::{Change, ReorderingReport};
use std::fmt::{Display, Write as _};

/// Render `report` in the requested format.
///
/// # Errors
///
/// Returns [`crate::errors::CliError::Json`] if JSON serialization fails.
pub fn render<K: Display + Serialize + Ord + Clone + std::fmt::Debug>(
    report: &ReorderingReport<K>,
    title: &str,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report, title)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

/// Human-readable summary of a reordering.
pub fn render_text<K: Display + Ord + Clone + std::fmt::Debug>(report: &ReorderingReport<K>, title: &str) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{}", "=".repeat(title.chars().count()));
    let _ = writeln!(
        out,
        "Graph has {} vertices and {} edges in {} component(s).",
        report.vertex_count, report.edge_count, report.component_count
    );
    let _ = writeln!(
        out,
        "Weights: distance W1 = {}, degree W2 = {}",
        report.weights.distance, report.weights.degree
    );
    let _ = writeln!(out, "\nPseudoperipheral start vertex: {}", report.start);
    let _ = writeln!(out, "Pseudoperipheral end vertex: {}", report.end);

    let _ = writeln!(out, "\nNatural ordering bandwidth: {}", report.natural.bandwidth);
    let _ = writeln!(out, "Natural ordering profile: {}", report.natural.profile);
    let _ = writeln!(out, "\nSloan ordering bandwidth: {}", report.sloan.bandwidth);
    let _ = writeln!(out, "Sloan ordering profile: {}", report.sloan.profile);

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", change_line("Bandwidth", report.bandwidth_change()));
    let _ = writeln!(out, "{}", change_line("Profile", report.profile_change()));

    let order: Vec<String> = report.order.iter().map(ToString::to_string).collect();
    let _ = writeln!(out, "\nSloan order: {}", order.join(" "));
    out
}

fn change_line(metric: &str, change: Change) -> String {
    match change {
        Change::Increased(_) => format!("Warning: {metric} {change}"),
        Change::Reduced(_) | Change::Unchanged => format!("{metric} {change}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sloan_ordering::{Graph, SloanWeights, sample};

    fn pgrouting_report() -> ReorderingReport<i64> {
        let graph = Graph::from_edges(sample::pgrouting_sample());
        ReorderingReport::build(&graph, &SloanWeights::default()).unwrap()
    }

    #[test]
    fn test_text_report() {
        let text = render_text(&pgrouting_report(), "pgRouting sample");

        assert!(text.starts_with("pgRouting sample\n================\n"));
        assert!(text.contains("Graph has 10 vertices and 26 edges in 1 component(s)."));
        assert!(text.contains("Pseudoperipheral start vertex: 1\n"));
        assert!(text.contains("Pseudoperipheral end vertex: 17\n"));
        assert!(text.contains("Natural ordering bandwidth: 5\n"));
        assert!(text.contains("Natural ordering profile: 66\n"));
        assert!(text.contains("Sloan ordering bandwidth: 2\n"));
        assert!(text.contains("Sloan ordering profile: 42\n"));
        assert!(text.contains("Bandwidth reduced by 60.00%\n"));
        assert!(text.contains("Profile reduced by 36.36%\n"));
        assert!(text.ends_with("Sloan order: 1 6 2 7 3 8 4 9 5 17\n"));
    }

    #[test]
    fn test_increase_is_flagged() {
        assert_eq!(
            change_line("Profile", Change::Increased(10.0)),
            "Warning: Profile increased by 10.00%"
        );
        assert_eq!(change_line("Bandwidth", Change::Unchanged), "Bandwidth unchanged");
    }

    #[test]
    fn test_json_report() {
        let json = render(&pgrouting_report(), "ignored", OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["vertex_count"], 10);
        assert_eq!(value["start"], 1);
        assert_eq!(value["end"], 17);
        assert_eq!(value["weights"]["distance"], 2);
        assert_eq!(value["sloan"]["bandwidth"], 2);
        assert_eq!(value["natural"]["profile"], 66);
        assert_eq!(value["order"][9], 17);
    }
}
