//! Vertex orderings produced by the sequencer.

use crate::{Graph, Vertex};
use std::fmt::Debug;

/// A sequence of vertices where position `i` holds the vertex numbered `i`.
///
/// Orderings returned by [`crate::sequence`] are permutations of the graph's
/// vertex set; [`VertexOrdering::is_permutation_of`] checks that property
/// for orderings built by hand.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VertexOrdering {
    vertices: Vec<Vertex>,
}

impl VertexOrdering {
    /// The identity ordering: vertices by index, i.e. by ascending key.
    #[must_use]
    pub fn natural<K: Ord + Clone + Debug>(graph: &Graph<K>) -> Self {
        Self {
            vertices: graph.vertices().collect(),
        }
    }

    /// The ordered vertices.
    #[must_use]
    pub fn as_slice(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Number of positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Whether the ordering is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterate over vertices by position.
    pub fn iter(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.vertices.iter().copied()
    }

    /// Position of every vertex `0..vertex_count`, `None` for vertices the
    /// ordering does not contain.
    #[must_use]
    pub fn positions(&self, vertex_count: usize) -> Vec<Option<usize>> {
        let mut positions = vec![None; vertex_count];
        for (position, vertex) in self.vertices.iter().enumerate() {
            if let Some(slot) = positions.get_mut(vertex.index()) {
                *slot = Some(position);
            }
        }
        positions
    }

    /// Whether every vertex of `graph` appears exactly once.
    #[must_use]
    pub fn is_permutation_of<K: Ord + Clone + Debug>(&self, graph: &Graph<K>) -> bool {
        if self.vertices.len() != graph.vertex_count() {
            return false;
        }
        let mut seen = vec![false; graph.vertex_count()];
        for vertex in &self.vertices {
            match seen.get_mut(vertex.index()) {
                Some(slot) if !*slot => *slot = true,
                _ => return false,
            }
        }
        true
    }

    /// External keys in ordering position order.
    #[must_use]
    pub fn keys<K: Ord + Clone + Debug>(&self, graph: &Graph<K>) -> Vec<K> {
        self.vertices
            .iter()
            .filter_map(|&v| graph.key(v).cloned())
            .collect()
    }
}

impl From<Vec<Vertex>> for VertexOrdering {
    fn from(vertices: Vec<Vertex>) -> Self {
        Self { vertices }
    }
}

impl<'a> IntoIterator for &'a VertexOrdering {
    type Item = &'a Vertex;
    type IntoIter = std::slice::Iter<'a, Vertex>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Edge;
    use petgraph::graph::NodeIndex;

    fn idx(i: usize) -> Vertex {
        NodeIndex::new(i)
    }

    fn triangle() -> Graph<&'static str> {
        Graph::from_edges([
            Edge::unweighted("c", "a"),
            Edge::unweighted("a", "b"),
            Edge::unweighted("b", "c"),
        ])
    }

    #[test]
    fn test_natural_follows_key_order() {
        let graph = triangle();
        let natural = VertexOrdering::natural(&graph);

        assert_eq!(natural.as_slice(), &[idx(0), idx(1), idx(2)]);
        assert_eq!(natural.keys(&graph), vec!["a", "b", "c"]);
        assert!(natural.is_permutation_of(&graph));
    }

    #[test]
    fn test_positions_inverse() {
        let ordering = VertexOrdering::from(vec![idx(2), idx(0), idx(1)]);
        assert_eq!(ordering.positions(4), vec![Some(1), Some(2), Some(0), None]);
    }

    #[test]
    fn test_rejects_duplicates_and_gaps() {
        let graph = triangle();

        assert!(!VertexOrdering::from(vec![idx(0), idx(0), idx(1)]).is_permutation_of(&graph));
        assert!(!VertexOrdering::from(vec![idx(0), idx(1)]).is_permutation_of(&graph));
        assert!(!VertexOrdering::from(vec![idx(0), idx(1), idx(5)]).is_permutation_of(&graph));
        assert!(VertexOrdering::from(vec![idx(2), idx(1), idx(0)]).is_permutation_of(&graph));
    }

    #[test]
    fn test_empty() {
        let ordering = VertexOrdering::default();
        assert!(ordering.is_empty());
        assert_eq!(ordering.iter().count(), 0);
    }
}
