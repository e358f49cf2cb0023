//! Sloan's priority-driven vertex sequencing.
//!
//! # Algorithm
//!
//! Starting from a pseudoperipheral `start`, vertices are numbered one at a
//! time. The next vertex is always the eligible (preactive or active) vertex
//! with the highest priority, ties going to the lowest index. Priorities
//! start at `W1 * dist(v, end) - W2 * deg(v)`, which favours vertices far
//! from `end` and with few neighbors, so the front sweeps from `start`
//! towards `end` while staying narrow.
//!
//! When a vertex is numbered, each of its unnumbered neighbors `u`:
//! - loses one unit of remaining degree,
//! - advances along the [`Status`] lifecycle,
//! - gains `W2`, plus a further `W2` for every numbered neighbor of `u`.
//!
//! Components that `start` cannot reach are numbered afterwards, in order of
//! their smallest vertex index, each from its own pseudoperipheral pair.

use crate::queue::EligibleQueue;
use crate::status::{Event, Status};
use crate::{
    DistanceField, Error, Graph, Result, SloanWeights, Vertex, VertexOrdering,
    build_distance_field, find_pseudoperipheral_pair,
};
use petgraph::graph::NodeIndex;
use std::fmt::Debug;
use tracing::{debug, trace};

/// Mutable per-vertex bookkeeping for a single sequencing call.
///
/// Allocated fresh by every call and dropped with it, so independent calls
/// on the same graph never observe each other's state.
struct SequencerState {
    weights: SloanWeights,
    status: Vec<Status>,
    current_degree: Vec<usize>,
    priority: Vec<i64>,
    queue: EligibleQueue,
    order: Vec<Vertex>,
    /// Lowest index that may still be unnumbered.
    cursor: usize,
}

impl SequencerState {
    fn new<K: Ord + Clone + Debug>(graph: &Graph<K>, weights: SloanWeights) -> Self {
        let n = graph.vertex_count();
        Self {
            weights,
            status: vec![Status::Inactive; n],
            current_degree: graph.vertices().map(|v| graph.degree(v)).collect(),
            priority: vec![0; n],
            queue: EligibleQueue::new(n),
            order: Vec::with_capacity(n),
            cursor: 0,
        }
    }

    /// Smallest vertex that has not been numbered yet.
    fn next_unnumbered(&mut self) -> Option<Vertex> {
        while self.cursor < self.status.len() {
            if self.status[self.cursor] != Status::Postactive {
                return Some(NodeIndex::new(self.cursor));
            }
            self.cursor += 1;
        }
        None
    }

    /// Number every vertex of the component containing `start`.
    fn number_component<K: Ord + Clone + Debug>(
        &mut self,
        graph: &Graph<K>,
        start: Vertex,
        distances: &DistanceField,
    ) -> Result<()> {
        let component = build_distance_field(graph, start)?;
        for &v in component.visit_order() {
            // Unreached only when start and end lie in different components
            let distance = distances.get(v).unwrap_or(0);
            self.priority[v.index()] = self
                .weights
                .initial_priority(distance, self.current_degree[v.index()]);
        }

        debug!(
            "Numbering component of {} vertices from start {} (end {})",
            component.reached_count(),
            start.index(),
            distances.root().index()
        );

        self.status[start.index()] = Status::Preactive;
        self.queue.push(start, self.priority[start.index()]);

        while let Some((vertex, priority)) = self.queue.pop() {
            self.number(graph, vertex);
            trace!(
                "Numbered vertex {} at position {} with priority {}",
                vertex.index(),
                self.order.len() - 1,
                priority
            );
        }

        Ok(())
    }

    fn number<K: Ord + Clone + Debug>(&mut self, graph: &Graph<K>, vertex: Vertex) {
        let v = vertex.index();
        self.status[v] = self.status[v].transition(Event::Numbered);
        self.order.push(vertex);

        for &neighbor in graph.neighbors(vertex) {
            let u = neighbor.index();
            self.current_degree[u] = self.current_degree[u].saturating_sub(1);

            if !self.status[u].is_rewarded() {
                continue;
            }
            self.status[u] = self.status[u].transition(Event::NeighborNumbered);

            let numbered = graph
                .neighbors(neighbor)
                .iter()
                .filter(|w| self.status[w.index()] == Status::Postactive)
                .count();
            self.priority[u] += self.weights.reward() * (1 + numbered as i64);
            self.queue.push(neighbor, self.priority[u]);
        }
    }
}

/// Compute a Sloan ordering of every vertex of `graph`.
///
/// `start` and `end` anchor the sweep over their component and `distances`
/// must be the distance field rooted at `end`. Vertices outside the
/// component of `start` are still numbered: remaining components follow in
/// order of their smallest vertex index.
///
/// The result depends only on the inputs: identical calls yield identical
/// orderings.
///
/// # Errors
///
/// Returns [`Error::InvalidGraph`] if the graph is empty, `start` or `end`
/// is not a vertex of `graph`, or `distances` was not computed from `end`
/// over this graph. Nothing is allocated before these checks pass.
pub fn sequence<K: Ord + Clone + Debug>(
    graph: &Graph<K>,
    start: Vertex,
    end: Vertex,
    distances: &DistanceField,
    weights: &SloanWeights,
) -> Result<VertexOrdering> {
    if graph.is_empty() {
        return Err(Error::empty_graph());
    }
    graph.check_vertex(start)?;
    graph.check_vertex(end)?;
    if distances.len() != graph.vertex_count() {
        return Err(Error::invalid_graph(format!(
            "distance field covers {} vertices but the graph has {}",
            distances.len(),
            graph.vertex_count()
        )));
    }
    if distances.root() != end {
        return Err(Error::invalid_graph(format!(
            "distance field is rooted at vertex {} instead of end vertex {}",
            distances.root().index(),
            end.index()
        )));
    }

    let mut state = SequencerState::new(graph, *weights);
    state.number_component(graph, start, distances)?;

    while let Some(seed) = state.next_unnumbered() {
        let (start, end) = find_pseudoperipheral_pair(graph, seed)?;
        let distances = build_distance_field(graph, end)?;
        state.number_component(graph, start, &distances)?;
    }

    Ok(VertexOrdering::from(state.order))
}

/// Order `graph` end to end: pick the pseudoperipheral pair of the component
/// holding vertex 0, build the distance field from its end and sequence.
///
/// # Errors
///
/// Returns [`Error::InvalidGraph`] for a graph without vertices.
pub fn sloan_ordering<K: Ord + Clone + Debug>(
    graph: &Graph<K>,
    weights: &SloanWeights,
) -> Result<VertexOrdering> {
    let (start, end) = find_pseudoperipheral_pair(graph, NodeIndex::new(0))?;
    let distances = build_distance_field(graph, end)?;
    sequence(graph, start, end, &distances, weights)
}
