//! Breadth-first distance fields.
//!
//! Distances are hop counts; edge weights are ignored. Vertices outside the
//! root's connected component are reported as unreached rather than given a
//! sentinel number.

use crate::{Graph, Result, Vertex};
use std::collections::VecDeque;
use std::fmt::Debug;

/// Hop distances from a single root vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceField {
    root: Vertex,
    distances: Vec<Option<u32>>,
    visit_order: Vec<Vertex>,
}

impl DistanceField {
    /// The vertex the field was computed from.
    #[must_use]
    pub fn root(&self) -> Vertex {
        self.root
    }

    /// Number of vertices the field is defined over (reached or not).
    #[must_use]
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// Whether the field covers no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Distance from the root, or `None` when `vertex` is unreached.
    #[must_use]
    pub fn get(&self, vertex: Vertex) -> Option<u32> {
        self.distances.get(vertex.index()).copied().flatten()
    }

    /// Whether `vertex` lies in the root's component.
    #[must_use]
    pub fn is_reached(&self, vertex: Vertex) -> bool {
        self.get(vertex).is_some()
    }

    /// Number of reached vertices, the root included.
    #[must_use]
    pub fn reached_count(&self) -> usize {
        self.visit_order.len()
    }

    /// Reached vertices in BFS discovery order, starting with the root.
    #[must_use]
    pub fn visit_order(&self) -> &[Vertex] {
        &self.visit_order
    }

    /// Largest distance of any reached vertex.
    #[must_use]
    pub fn eccentricity(&self) -> u32 {
        self.visit_order
            .last()
            .and_then(|&v| self.get(v))
            .unwrap_or(0)
    }

    /// The first vertex discovered at the maximum distance.
    ///
    /// BFS discovers vertices level by level, so this is the first vertex of
    /// the last level. Unreached vertices are never candidates.
    #[must_use]
    pub fn farthest(&self) -> Vertex {
        let max = self.eccentricity();
        self.visit_order
            .iter()
            .copied()
            .find(|&v| self.get(v) == Some(max))
            .unwrap_or(self.root)
    }
}

/// Run a breadth-first search from `root` over the simple adjacency.
///
/// Neighbors are visited in edge insertion order.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidGraph`] if `root` is not a vertex of `graph`.
pub fn build_distance_field<K: Ord + Clone + Debug>(
    graph: &Graph<K>,
    root: Vertex,
) -> Result<DistanceField> {
    graph.check_vertex(root)?;

    let mut distances = vec![None; graph.vertex_count()];
    let mut visit_order = Vec::new();
    let mut queue = VecDeque::new();

    distances[root.index()] = Some(0);
    visit_order.push(root);
    queue.push_back(root);

    while let Some(current) = queue.pop_front() {
        let next = distances[current.index()].map_or(0, |d: u32| d + 1);
        for &neighbor in graph.neighbors(current) {
            if distances[neighbor.index()].is_none() {
                distances[neighbor.index()] = Some(next);
                visit_order.push(neighbor);
                queue.push_back(neighbor);
            }
        }
    }

    Ok(DistanceField {
        root,
        distances,
        visit_order,
    })
}
