//! The pgRouting sample network.
//!
//! Ten vertices (1 to 9 and 17) laid out as a two-row grid. Every road is
//! listed once per direction, as in the pgRouting edge table, so the graph
//! holds 26 edges over 13 distinct vertex pairs.

use crate::Edge;

const ROADS: [(i64, i64); 13] = [
    (1, 2),
    (2, 3),
    (3, 4),
    (4, 5),
    (1, 6),
    (6, 7),
    (7, 8),
    (8, 9),
    (9, 17),
    (2, 7),
    (3, 8),
    (4, 9),
    (5, 17),
];

/// Edge list of the sample network, forward directions first.
#[must_use]
pub fn pgrouting_sample() -> Vec<Edge<i64>> {
    let forward = ROADS.iter().map(|&(s, t)| Edge::new(s, t, 1.0));
    let backward = ROADS.iter().map(|&(s, t)| Edge::new(t, s, 1.0));
    forward.chain(backward).collect()
}
