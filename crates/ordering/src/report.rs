//! Natural versus Sloan comparison for a whole graph.

use crate::{
    Graph, OrderingMetrics, Result, SloanWeights, VertexOrdering, build_distance_field, evaluate,
    find_pseudoperipheral_pair, sequence,
};
use petgraph::graph::NodeIndex;
use std::fmt::{self, Debug};
use tracing::info;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Relative change of a metric between the natural and the Sloan ordering.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "direction", content = "percent", rename_all = "snake_case")
)]
pub enum Change {
    /// Sloan is smaller by this percentage of the natural value.
    Reduced(f64),
    /// Sloan is larger by this percentage of the natural value.
    Increased(f64),
    /// Both orderings score the same.
    Unchanged,
}

impl Change {
    /// Compare a natural and a Sloan value.
    #[must_use]
    pub fn between(natural: usize, sloan: usize) -> Self {
        if natural == sloan || natural == 0 {
            return Self::Unchanged;
        }
        let percent = 100.0 * natural.abs_diff(sloan) as f64 / natural as f64;
        if sloan < natural {
            Self::Reduced(percent)
        } else {
            Self::Increased(percent)
        }
    }
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reduced(percent) => write!(f, "reduced by {percent:.2}%"),
            Self::Increased(percent) => write!(f, "increased by {percent:.2}%"),
            Self::Unchanged => write!(f, "unchanged"),
        }
    }
}

/// Outcome of reordering a graph, with the natural ordering as baseline.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReorderingReport<K> {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Number of input edges.
    pub edge_count: usize,
    /// Number of connected components.
    pub component_count: usize,
    /// Weights the ordering was computed with.
    pub weights: SloanWeights,
    /// Start anchor of the first component.
    pub start: K,
    /// End anchor of the first component.
    pub end: K,
    /// Metrics of the ascending-key ordering.
    pub natural: OrderingMetrics,
    /// Metrics of the Sloan ordering.
    pub sloan: OrderingMetrics,
    /// Vertex keys in Sloan order.
    pub order: Vec<K>,
}

impl<K: Ord + Clone + Debug> ReorderingReport<K> {
    /// Reorder `graph` and compare against its natural ordering.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidGraph`] for a graph without vertices.
    pub fn build(graph: &Graph<K>, weights: &SloanWeights) -> Result<Self> {
        let (start, end) = find_pseudoperipheral_pair(graph, NodeIndex::new(0))?;
        let distances = build_distance_field(graph, end)?;
        let ordering = sequence(graph, start, end, &distances, weights)?;

        let natural = evaluate(graph, &VertexOrdering::natural(graph));
        let sloan = evaluate(graph, &ordering);
        info!(
            "Sloan ordering: bandwidth {} -> {}, profile {} -> {}",
            natural.bandwidth, sloan.bandwidth, natural.profile, sloan.profile
        );

        let key = |v: crate::Vertex| {
            graph
                .key(v)
                .cloned()
                .ok_or_else(|| crate::Error::vertex_out_of_range(v.index(), graph.vertex_count()))
        };

        Ok(Self {
            vertex_count: graph.vertex_count(),
            edge_count: graph.edge_count(),
            component_count: graph.component_count(),
            weights: *weights,
            start: key(start)?,
            end: key(end)?,
            natural,
            sloan,
            order: ordering.keys(graph),
        })
    }

    /// Bandwidth change from natural to Sloan.
    #[must_use]
    pub fn bandwidth_change(&self) -> Change {
        Change::between(self.natural.bandwidth, self.sloan.bandwidth)
    }

    /// Profile change from natural to Sloan.
    #[must_use]
    pub fn profile_change(&self) -> Change {
        Change::between(self.natural.profile, self.sloan.profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Edge, sample};

    #[test]
    fn test_change_between() {
        assert_eq!(Change::between(5, 2), Change::Reduced(60.0));
        assert_eq!(Change::between(4, 5), Change::Increased(25.0));
        assert_eq!(Change::between(3, 3), Change::Unchanged);
        assert_eq!(Change::between(0, 0), Change::Unchanged);
    }

    #[test]
    fn test_change_display() {
        assert_eq!(Change::Reduced(60.0).to_string(), "reduced by 60.00%");
        assert_eq!(Change::Increased(12.5).to_string(), "increased by 12.50%");
        assert_eq!(Change::Unchanged.to_string(), "unchanged");
    }

    #[test]
    fn test_pgrouting_report() {
        let graph = Graph::from_edges(sample::pgrouting_sample());
        let report = ReorderingReport::build(&graph, &SloanWeights::default()).unwrap();

        assert_eq!(report.vertex_count, 10);
        assert_eq!(report.edge_count, 26);
        assert_eq!(report.component_count, 1);
        assert_eq!((report.start, report.end), (1, 17));
        assert_eq!(report.natural, OrderingMetrics {
            bandwidth: 5,
            profile: 66
        });
        assert_eq!(report.sloan, OrderingMetrics {
            bandwidth: 2,
            profile: 42
        });
        assert_eq!(report.order, vec![1, 6, 2, 7, 3, 8, 4, 9, 5, 17]);
        assert_eq!(report.bandwidth_change(), Change::Reduced(60.0));
        assert!(matches!(report.profile_change(), Change::Reduced(p) if (p - 36.36).abs() < 0.01));
    }

    #[test]
    fn test_report_on_empty_graph() {
        let graph: Graph<String> = Graph::builder().build();
        assert!(
            ReorderingReport::build(&graph, &SloanWeights::default())
                .unwrap_err()
                .is_invalid_graph()
        );
    }

    #[test]
    fn test_report_with_string_keys() {
        let graph = Graph::from_edges([
            Edge::unweighted("a".to_string(), "b".to_string()),
            Edge::unweighted("b".to_string(), "c".to_string()),
        ]);
        let report = ReorderingReport::build(&graph, &SloanWeights::default()).unwrap();

        assert_eq!(report.order, vec!["a", "b", "c"]);
        assert_eq!(report.bandwidth_change(), Change::Unchanged);
    }
}
