//! Pseudoperipheral vertex pair selection by double sweep.

use crate::{Graph, Result, Vertex, build_distance_field};
use std::fmt::Debug;
use tracing::debug;

/// Pick a `(start, end)` pair approximating the diameter endpoints of the
/// component containing `seed`.
///
/// The first sweep runs a BFS from `seed` and takes the farthest vertex as
/// `end`; the second runs from `end` and takes the farthest vertex as
/// `start`. Ties go to the vertex discovered first. Only vertices in the
/// seed's component are ever considered, and an isolated seed yields
/// `(seed, seed)`.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidGraph`] if the graph is empty or `seed` is
/// not one of its vertices.
pub fn find_pseudoperipheral_pair<K: Ord + Clone + Debug>(
    graph: &Graph<K>,
    seed: Vertex,
) -> Result<(Vertex, Vertex)> {
    if graph.is_empty() {
        return Err(crate::Error::empty_graph());
    }

    let from_seed = build_distance_field(graph, seed)?;
    let end = from_seed.farthest();

    let from_end = build_distance_field(graph, end)?;
    let start = from_end.farthest();

    debug!(
        "Pseudoperipheral pair for seed {}: start {} end {} (eccentricity {})",
        seed.index(),
        start.index(),
        end.index(),
        from_end.eccentricity()
    );

    Ok((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Edge, sample};
    use petgraph::graph::NodeIndex;

    fn idx(i: usize) -> Vertex {
        NodeIndex::new(i)
    }

    #[test]
    fn test_path_endpoints() {
        let graph = Graph::from_edges((0..6).map(|i| Edge::unweighted(i, i + 1)));

        let (start, end) = find_pseudoperipheral_pair(&graph, idx(0)).unwrap();
        assert_eq!((start, end), (idx(0), idx(6)));

        // Seeding in the middle still lands on the endpoints
        let (start, end) = find_pseudoperipheral_pair(&graph, idx(3)).unwrap();
        let mut pair = [start.index(), end.index()];
        pair.sort_unstable();
        assert_eq!(pair, [0, 6]);
    }

    #[test]
    fn test_pgrouting_sample_pair() {
        let graph = Graph::from_edges(sample::pgrouting_sample());
        let (start, end) = find_pseudoperipheral_pair(&graph, idx(0)).unwrap();

        assert_eq!(graph.key(start), Some(&1));
        assert_eq!(graph.key(end), Some(&17));
    }

    #[test]
    fn test_stays_within_seed_component() {
        let graph = Graph::from_edges([
            Edge::unweighted(0, 1),
            Edge::unweighted(2, 3),
            Edge::unweighted(3, 4),
            Edge::unweighted(4, 5),
        ]);

        let (start, end) = find_pseudoperipheral_pair(&graph, idx(0)).unwrap();
        assert_eq!((start, end), (idx(0), idx(1)));

        let (start, end) = find_pseudoperipheral_pair(&graph, idx(3)).unwrap();
        assert_eq!((start, end), (idx(2), idx(5)));
    }

    #[test]
    fn test_isolated_seed() {
        let mut builder = Graph::builder();
        builder.add_vertex(7).add_edge(1, 2, 1.0);
        let graph = builder.build();
        let seven = graph.index(&7).unwrap();

        assert_eq!(
            find_pseudoperipheral_pair(&graph, seven).unwrap(),
            (seven, seven)
        );
    }

    #[test]
    fn test_empty_graph_rejected() {
        let graph: Graph<i64> = Graph::builder().build();
        let err = find_pseudoperipheral_pair(&graph, idx(0)).unwrap_err();
        assert_eq!(err, crate::Error::empty_graph());
    }

    #[test]
    fn test_seed_out_of_range() {
        let graph = Graph::from_edges([Edge::unweighted(0, 1)]);
        assert!(
            find_pseudoperipheral_pair(&graph, idx(2))
                .unwrap_err()
                .is_invalid_graph()
        );
    }
}
