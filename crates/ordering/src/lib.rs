//! Sloan profile and bandwidth reduction for sparse undirected graphs.
//!
//! This crate reorders the vertices of an undirected graph (typically the
//! adjacency structure of a sparse symmetric matrix or a mesh) so that
//! adjacent vertices land close together, shrinking the bandwidth and
//! profile seen by downstream factorizations and iterative solvers. The
//! result is a heuristic, not a minimum bandwidth ordering.
//!
//! # Key Types
//!
//! - [`Graph`]: immutable undirected graph with a key/index bijection
//! - [`SloanWeights`]: the two priority weights, defaults `W1 = 2`, `W2 = 1`
//! - [`VertexOrdering`]: the resulting permutation
//! - [`ReorderingReport`]: natural versus Sloan metrics for a graph
//!
//! # Pipeline
//!
//! [`find_pseudoperipheral_pair`] picks the `(start, end)` anchors,
//! [`build_distance_field`] measures hop distances from `end` and
//! [`sequence`] numbers the vertices. [`sloan_ordering`] runs all three.
//!
//! # Determinism
//!
//! Breadth-first searches visit neighbors in edge insertion order, and
//! priority ties go to the lowest vertex index, so the same graph and
//! weights always produce the same ordering.
//!
//! # Example
//!
//! ```rust
//! use sloan_ordering::{Edge, Graph, SloanWeights, VertexOrdering, evaluate, sloan_ordering};
//!
//! let graph = Graph::from_edges([
//!     Edge::unweighted(1, 4),
//!     Edge::unweighted(4, 2),
//!     Edge::unweighted(2, 3),
//! ]);
//!
//! let ordering = sloan_ordering(&graph, &SloanWeights::default())?;
//! assert!(ordering.is_permutation_of(&graph));
//!
//! let natural = evaluate(&graph, &VertexOrdering::natural(&graph));
//! let sloan = evaluate(&graph, &ordering);
//! assert!(sloan.bandwidth <= natural.bandwidth);
//! # Ok::<(), sloan_ordering::Error>(())
//! ```
//!
//! # Features
//!
//! - `serde`: serialization for weights, edges, metrics and reports

mod distance;
mod error;
mod graph;
mod metrics;
mod peripheral;
mod permutation;
mod queue;
mod report;
pub mod sample;
mod sequencer;
mod status;
mod weights;

pub use distance::{DistanceField, build_distance_field};
pub use error::{Error, Result};
pub use graph::{Edge, Graph, GraphBuilder, IdMap, Vertex};
pub use metrics::{OrderingMetrics, bandwidth, evaluate, profile};
pub use peripheral::find_pseudoperipheral_pair;
pub use permutation::VertexOrdering;
pub use queue::EligibleQueue;
pub use report::{Change, ReorderingReport};
pub use sequencer::{sequence, sloan_ordering};
pub use status::{Event, Status};
pub use weights::{DEFAULT_DEGREE_WEIGHT, DEFAULT_DISTANCE_WEIGHT, SloanWeights};
