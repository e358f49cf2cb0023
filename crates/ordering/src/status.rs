//! Per-vertex status lifecycle used while sequencing.

/// Where a vertex stands relative to the numbering front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    /// Not yet touched by the front.
    #[default]
    Inactive,
    /// Adjacent to exactly one numbered vertex, or the start vertex.
    Preactive,
    /// Adjacent to two or more numbered vertices.
    Active,
    /// Numbered; never revisited.
    Postactive,
}

/// Something that happens to a vertex during sequencing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    /// One of the vertex's neighbors was assigned a position.
    NeighborNumbered,
    /// The vertex itself was assigned a position.
    Numbered,
}

impl Status {
    /// Apply `event` and return the resulting status.
    ///
    /// | from \ event | NeighborNumbered | Numbered   |
    /// |--------------|------------------|------------|
    /// | Inactive     | Preactive        | Postactive |
    /// | Preactive    | Active           | Postactive |
    /// | Active       | Active           | Postactive |
    /// | Postactive   | Postactive       | Postactive |
    #[must_use]
    pub const fn transition(self, event: Event) -> Self {
        match (self, event) {
            (Self::Inactive, Event::NeighborNumbered) => Self::Preactive,
            (Self::Preactive | Self::Active, Event::NeighborNumbered) => Self::Active,
            (Self::Postactive, Event::NeighborNumbered) | (_, Event::Numbered) => Self::Postactive,
        }
    }

    /// Whether the vertex may be picked next.
    #[must_use]
    pub const fn is_eligible(self) -> bool {
        matches!(self, Self::Preactive | Self::Active)
    }

    /// Whether a numbered neighbor raises this vertex's priority.
    #[must_use]
    pub const fn is_rewarded(self) -> bool {
        !matches!(self, Self::Postactive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbor_numbered_walks_lifecycle() {
        let mut status = Status::default();
        assert_eq!(status, Status::Inactive);

        status = status.transition(Event::NeighborNumbered);
        assert_eq!(status, Status::Preactive);
        status = status.transition(Event::NeighborNumbered);
        assert_eq!(status, Status::Active);
        status = status.transition(Event::NeighborNumbered);
        assert_eq!(status, Status::Active);
        status = status.transition(Event::Numbered);
        assert_eq!(status, Status::Postactive);
    }

    #[test]
    fn test_postactive_is_terminal() {
        for event in [Event::NeighborNumbered, Event::Numbered] {
            assert_eq!(Status::Postactive.transition(event), Status::Postactive);
        }
    }

    #[test]
    fn test_eligibility_and_reward() {
        assert!(!Status::Inactive.is_eligible());
        assert!(Status::Preactive.is_eligible());
        assert!(Status::Active.is_eligible());
        assert!(!Status::Postactive.is_eligible());

        assert!(Status::Inactive.is_rewarded());
        assert!(Status::Active.is_rewarded());
        assert!(!Status::Postactive.is_rewarded());
    }
}
