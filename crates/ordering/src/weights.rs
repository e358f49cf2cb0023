//! Priority weights for the Sloan sequencer.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default weight of the distance-to-end term (`W1`).
pub const DEFAULT_DISTANCE_WEIGHT: u32 = 2;

/// Default weight of the degree term (`W2`).
pub const DEFAULT_DEGREE_WEIGHT: u32 = 1;

/// Weights of the two terms of the Sloan priority function.
///
/// A vertex starts with priority `distance * dist(v, end) - degree * deg(v)`
/// and gains `degree` each time the numbering front reaches it. Changing
/// either weight changes the resulting ordering, so both are part of the
/// reproducibility contract of a run.
///
/// # Example
///
/// ```rust
/// use sloan_ordering::SloanWeights;
///
/// let weights = SloanWeights::default().with_degree(3);
/// assert_eq!(weights.distance, 2);
/// assert_eq!(weights.degree, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SloanWeights {
    /// Weight of the distance-to-end term (`W1`).
    pub distance: u32,
    /// Weight of the remaining-degree term (`W2`).
    pub degree: u32,
}

impl SloanWeights {
    /// Create weights from explicit values.
    #[must_use]
    pub const fn new(distance: u32, degree: u32) -> Self {
        Self { distance, degree }
    }

    /// Replace the distance weight.
    #[must_use]
    pub const fn with_distance(mut self, distance: u32) -> Self {
        self.distance = distance;
        self
    }

    /// Replace the degree weight.
    #[must_use]
    pub const fn with_degree(mut self, degree: u32) -> Self {
        self.degree = degree;
        self
    }

    /// Priority of a vertex before the front reaches it.
    #[must_use]
    pub fn initial_priority(&self, distance: u32, degree: usize) -> i64 {
        i64::from(self.distance) * i64::from(distance) - i64::from(self.degree) * degree as i64
    }

    /// Priority gained per reward step.
    #[must_use]
    pub fn reward(&self) -> i64 {
        i64::from(self.degree)
    }
}

impl Default for SloanWeights {
    fn default() -> Self {
        Self::new(DEFAULT_DISTANCE_WEIGHT, DEFAULT_DEGREE_WEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let weights = SloanWeights::default();
        assert_eq!(weights, SloanWeights::new(2, 1));
    }

    #[test]
    fn test_initial_priority() {
        let weights = SloanWeights::default();
        assert_eq!(weights.initial_priority(5, 2), 8);
        assert_eq!(weights.initial_priority(0, 4), -4);

        let weights = SloanWeights::new(0, 0);
        assert_eq!(weights.initial_priority(9, 9), 0);
        assert_eq!(weights.reward(), 0);
    }

    #[test]
    fn test_builder_methods() {
        let weights = SloanWeights::default().with_distance(7).with_degree(4);
        assert_eq!(weights, SloanWeights::new(7, 4));
        assert_eq!(weights.reward(), 4);
    }
}
