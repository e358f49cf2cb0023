//! Undirected graph model using petgraph.
//!
//! Vertices are identified externally by arbitrary ordered keys and
//! internally by dense [`Vertex`] indices `0..N-1`. The [`IdMap`] owned by
//! each [`Graph`] is the only place the two are translated.

use crate::{Error, Result};
use petgraph::algo::connected_components;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Debug;
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Dense internal vertex identifier.
pub type Vertex = NodeIndex;

/// An undirected input edge between two external vertex keys.
///
/// The weight is stored with the edge but never influences the ordering;
/// only adjacency does.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Edge<K> {
    /// One endpoint.
    pub source: K,
    /// The other endpoint.
    pub target: K,
    /// Edge cost carried through from the input.
    pub weight: f64,
}

impl<K> Edge<K> {
    /// Create an edge with the given weight.
    pub fn new(source: K, target: K, weight: f64) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Create an edge with unit weight.
    pub fn unweighted(source: K, target: K) -> Self {
        Self::new(source, target, 1.0)
    }
}

/// Bijection between external vertex keys and internal indices.
#[derive(Debug, Clone)]
pub struct IdMap<K> {
    to_index: BTreeMap<K, Vertex>,
    to_key: Vec<K>,
}

impl<K: Ord + Clone> IdMap<K> {
    /// Build the mapping, assigning indices in ascending key order.
    fn from_sorted(keys: BTreeSet<K>) -> Self {
        let to_key: Vec<K> = keys.into_iter().collect();
        let to_index = to_key
            .iter()
            .enumerate()
            .map(|(i, key)| (key.clone(), NodeIndex::new(i)))
            .collect();
        Self { to_index, to_key }
    }

    /// Internal index for an external key.
    #[must_use]
    pub fn index_of(&self, key: &K) -> Option<Vertex> {
        self.to_index.get(key).copied()
    }

    /// External key for an internal index.
    #[must_use]
    pub fn key_of(&self, vertex: Vertex) -> Option<&K> {
        self.to_key.get(vertex.index())
    }

    /// Number of mapped vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.to_key.len()
    }

    /// Whether the mapping is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.to_key.is_empty()
    }
}

/// Collects vertices and edges before freezing them into a [`Graph`].
#[derive(Debug, Clone)]
pub struct GraphBuilder<K> {
    keys: BTreeSet<K>,
    edges: Vec<Edge<K>>,
}

impl<K: Ord + Clone + Debug> GraphBuilder<K> {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            keys: BTreeSet::new(),
            edges: Vec::new(),
        }
    }

    /// Add a vertex. Adding an existing key is a no-op.
    pub fn add_vertex(&mut self, key: K) -> &mut Self {
        self.keys.insert(key);
        self
    }

    /// Add an undirected edge, registering both endpoints.
    pub fn add_edge(&mut self, source: K, target: K, weight: f64) -> &mut Self {
        self.keys.insert(source.clone());
        self.keys.insert(target.clone());
        self.edges.push(Edge::new(source, target, weight));
        self
    }

    /// Freeze the builder into an immutable graph.
    #[must_use]
    pub fn build(self) -> Graph<K> {
        let ids = IdMap::from_sorted(self.keys);
        let mut inner = UnGraph::with_capacity(ids.len(), self.edges.len());
        for _ in 0..ids.len() {
            inner.add_node(());
        }

        let mut adjacency: Vec<Vec<Vertex>> = vec![Vec::new(); ids.len()];
        for edge in self.edges {
            // Both endpoints were registered by add_edge
            let (Some(a), Some(b)) = (ids.index_of(&edge.source), ids.index_of(&edge.target))
            else {
                continue;
            };
            inner.add_edge(a, b, edge.weight);

            if a == b {
                continue;
            }
            if !adjacency[a.index()].contains(&b) {
                adjacency[a.index()].push(b);
            }
            if !adjacency[b.index()].contains(&a) {
                adjacency[b.index()].push(a);
            }
        }

        debug!(
            "Built graph with {} vertices and {} edges",
            inner.node_count(),
            inner.edge_count()
        );

        Graph {
            inner,
            adjacency,
            ids,
        }
    }
}

impl<K: Ord + Clone + Debug> Default for GraphBuilder<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable undirected graph over a fixed vertex set.
///
/// Every input edge is kept in the underlying petgraph storage (parallel
/// and reverse duplicates included), while [`Graph::neighbors`] exposes the
/// simple adjacency: distinct neighbors in edge insertion order, without
/// self-loops. The neighbor order is what makes breadth-first traversal,
/// and therefore the final ordering, reproducible.
#[derive(Debug, Clone)]
pub struct Graph<K> {
    inner: UnGraph<(), f64>,
    adjacency: Vec<Vec<Vertex>>,
    ids: IdMap<K>,
}

impl<K: Ord + Clone + Debug> Graph<K> {
    /// Build a graph from an edge list.
    pub fn from_edges(edges: impl IntoIterator<Item = Edge<K>>) -> Self {
        let mut builder = GraphBuilder::new();
        for edge in edges {
            builder.add_edge(edge.source, edge.target, edge.weight);
        }
        builder.build()
    }

    /// Start building a graph incrementally.
    #[must_use]
    pub fn builder() -> GraphBuilder<K> {
        GraphBuilder::new()
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.inner.node_count()
    }

    /// Number of stored input edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    /// Whether the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }

    /// Whether `vertex` belongs to this graph.
    #[must_use]
    pub fn contains(&self, vertex: Vertex) -> bool {
        vertex.index() < self.vertex_count()
    }

    /// Fail with [`Error::InvalidGraph`] unless `vertex` belongs to this graph.
    pub(crate) fn check_vertex(&self, vertex: Vertex) -> Result<()> {
        if self.contains(vertex) {
            Ok(())
        } else {
            Err(Error::vertex_out_of_range(
                vertex.index(),
                self.vertex_count(),
            ))
        }
    }

    /// Iterate over all vertices in index order.
    pub fn vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.inner.node_indices()
    }

    /// Distinct neighbors of `vertex` in edge insertion order.
    ///
    /// Returns an empty slice for vertices outside the graph.
    #[must_use]
    pub fn neighbors(&self, vertex: Vertex) -> &[Vertex] {
        self.adjacency
            .get(vertex.index())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of distinct neighbors of `vertex`.
    #[must_use]
    pub fn degree(&self, vertex: Vertex) -> usize {
        self.neighbors(vertex).len()
    }

    /// Iterate over every stored edge as `(source, target, weight)`.
    pub fn edges(&self) -> impl Iterator<Item = (Vertex, Vertex, f64)> + '_ {
        self.inner
            .edge_references()
            .map(|edge| (edge.source(), edge.target(), *edge.weight()))
    }

    /// Number of connected components.
    #[must_use]
    pub fn component_count(&self) -> usize {
        connected_components(&self.inner)
    }

    /// The key/index bijection.
    #[must_use]
    pub fn ids(&self) -> &IdMap<K> {
        &self.ids
    }

    /// External key of `vertex`.
    #[must_use]
    pub fn key(&self, vertex: Vertex) -> Option<&K> {
        self.ids.key_of(vertex)
    }

    /// Internal index of an external key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownVertex`] if the key was never added.
    pub fn index(&self, key: &K) -> Result<Vertex> {
        self.ids.index_of(key).ok_or_else(|| Error::unknown_vertex(key))
    }
}
