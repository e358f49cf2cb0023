//! Bandwidth and profile of an ordering.
//!
//! Both are computed over every stored edge, so an edge given twice in the
//! input (for instance once per direction) counts twice towards the profile.

use crate::{Graph, VertexOrdering};
use std::fmt::Debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Bandwidth and profile of one ordering of a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrderingMetrics {
    /// Largest position gap across any edge.
    pub bandwidth: usize,
    /// Sum of position gaps across all edges.
    pub profile: usize,
}

/// Position gap of every edge whose endpoints both appear in `ordering`.
fn edge_spans<K: Ord + Clone + Debug>(
    graph: &Graph<K>,
    ordering: &VertexOrdering,
) -> impl Iterator<Item = usize> {
    let positions = ordering.positions(graph.vertex_count());
    graph.edges().filter_map(move |(a, b, _)| {
        let pa = positions.get(a.index()).copied().flatten()?;
        let pb = positions.get(b.index()).copied().flatten()?;
        Some(pa.abs_diff(pb))
    })
}

/// Maximum over all edges of the distance between endpoint positions.
#[must_use]
pub fn bandwidth<K: Ord + Clone + Debug>(graph: &Graph<K>, ordering: &VertexOrdering) -> usize {
    edge_spans(graph, ordering).max().unwrap_or(0)
}

/// Sum over all edges of the distance between endpoint positions.
#[must_use]
pub fn profile<K: Ord + Clone + Debug>(graph: &Graph<K>, ordering: &VertexOrdering) -> usize {
    edge_spans(graph, ordering).sum()
}

/// Bandwidth and profile in a single pass.
#[must_use]
pub fn evaluate<K: Ord + Clone + Debug>(
    graph: &Graph<K>,
    ordering: &VertexOrdering,
) -> OrderingMetrics {
    edge_spans(graph, ordering).fold(OrderingMetrics::default(), |acc, span| OrderingMetrics {
        bandwidth: acc.bandwidth.max(span),
        profile: acc.profile + span,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Edge, sample};
    use petgraph::graph::NodeIndex;

    #[test]
    fn test_natural_ordering_of_pgrouting_sample() {
        let graph = Graph::from_edges(sample::pgrouting_sample());
        let natural = VertexOrdering::natural(&graph);

        assert_eq!(bandwidth(&graph, &natural), 5);
        assert_eq!(profile(&graph, &natural), 66);
        assert_eq!(
            evaluate(&graph, &natural),
            OrderingMetrics {
                bandwidth: 5,
                profile: 66
            }
        );
    }

    #[test]
    fn test_reversed_path() {
        let graph = Graph::from_edges((0..4).map(|i| Edge::unweighted(i, i + 1)));
        let reversed = VertexOrdering::from((0..5).rev().map(NodeIndex::new).collect::<Vec<_>>());

        assert_eq!(evaluate(&graph, &reversed), OrderingMetrics {
            bandwidth: 1,
            profile: 4
        });
    }

    #[test]
    fn test_edges_outside_ordering_are_skipped() {
        let graph = Graph::from_edges([Edge::unweighted(0, 1), Edge::unweighted(1, 2)]);
        let partial = VertexOrdering::from(vec![NodeIndex::new(2), NodeIndex::new(1)]);

        assert_eq!(evaluate(&graph, &partial), OrderingMetrics {
            bandwidth: 1,
            profile: 1
        });
    }

    #[test]
    fn test_edgeless_and_self_loop() {
        let mut builder = Graph::builder();
        builder.add_vertex(1).add_edge(2, 2, 1.0);
        let graph = builder.build();
        let natural = VertexOrdering::natural(&graph);

        assert_eq!(evaluate(&graph, &natural), OrderingMetrics::default());
    }
}
