//! Indexed max-heap over dense vertex indices.
//!
//! Supports changing the priority of an element already in the heap, which
//! the sequencer needs every time a vertex is numbered.

use crate::Vertex;
use std::cmp::Ordering;

/// Max-priority queue of eligible vertices.
///
/// Higher priority wins; among equal priorities the lowest vertex index
/// wins. Every vertex is in the heap at most once.
#[derive(Debug, Clone)]
pub struct EligibleQueue {
    heap: Vec<Vertex>,
    /// Position of each vertex inside `heap`, `None` when absent.
    slots: Vec<Option<usize>>,
    priorities: Vec<i64>,
}

impl EligibleQueue {
    /// Create an empty queue able to hold vertices `0..capacity`.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            heap: Vec::new(),
            slots: vec![None; capacity],
            priorities: vec![0; capacity],
        }
    }

    /// Number of queued vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether no vertex is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Whether `vertex` is queued.
    #[must_use]
    pub fn contains(&self, vertex: Vertex) -> bool {
        self.slots.get(vertex.index()).is_some_and(Option::is_some)
    }

    /// Priority of a queued vertex.
    #[must_use]
    pub fn priority(&self, vertex: Vertex) -> Option<i64> {
        self.contains(vertex)
            .then(|| self.priorities[vertex.index()])
    }

    /// Insert `vertex`, or move it to `priority` if already queued.
    ///
    /// Vertices outside the queue's capacity are ignored.
    pub fn push(&mut self, vertex: Vertex, priority: i64) {
        let Some(slot) = self.slots.get(vertex.index()).copied() else {
            return;
        };
        let previous = self.priorities[vertex.index()];
        self.priorities[vertex.index()] = priority;

        match slot {
            None => {
                self.heap.push(vertex);
                let at = self.heap.len() - 1;
                self.slots[vertex.index()] = Some(at);
                self.sift_up(at);
            }
            Some(at) if priority >= previous => self.sift_up(at),
            Some(at) => self.sift_down(at),
        }
    }

    /// Remove and return the highest priority vertex.
    pub fn pop(&mut self) -> Option<(Vertex, i64)> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let top = self.heap.pop()?;
        self.slots[top.index()] = None;
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some((top, self.priorities[top.index()]))
    }

    /// Whether the element at `a` should sit above the element at `b`.
    fn outranks(&self, a: usize, b: usize) -> bool {
        let (va, vb) = (self.heap[a], self.heap[b]);
        match self.priorities[va.index()].cmp(&self.priorities[vb.index()]) {
            Ordering::Greater => true,
            Ordering::Less => false,
            Ordering::Equal => va.index() < vb.index(),
        }
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.slots[self.heap[a].index()] = Some(a);
        self.slots[self.heap[b].index()] = Some(b);
    }

    fn sift_up(&mut self, mut at: usize) {
        while at > 0 {
            let parent = (at - 1) / 2;
            if !self.outranks(at, parent) {
                break;
            }
            self.swap(at, parent);
            at = parent;
        }
    }

    fn sift_down(&mut self, mut at: usize) {
        loop {
            let left = 2 * at + 1;
            let right = left + 1;
            let mut best = at;
            if left < self.heap.len() && self.outranks(left, best) {
                best = left;
            }
            if right < self.heap.len() && self.outranks(right, best) {
                best = right;
            }
            if best == at {
                break;
            }
            self.swap(at, best);
            at = best;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use petgraph::graph::NodeIndex;

    fn idx(i: usize) -> Vertex {
        NodeIndex::new(i)
    }

    fn drain(queue: &mut EligibleQueue) -> Vec<(usize, i64)> {
        std::iter::from_fn(|| queue.pop())
            .map(|(v, p)| (v.index(), p))
            .collect()
    }

    #[test]
    fn test_pops_highest_priority_first() {
        let mut queue = EligibleQueue::new(5);
        queue.push(idx(0), 3);
        queue.push(idx(1), 9);
        queue.push(idx(2), -4);
        queue.push(idx(3), 5);

        assert_eq!(queue.len(), 4);
        assert_eq!(drain(&mut queue), vec![(1, 9), (3, 5), (0, 3), (2, -4)]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_ties_go_to_lowest_index() {
        let mut queue = EligibleQueue::new(6);
        for i in [5, 2, 4, 0] {
            queue.push(idx(i), 7);
        }

        let order: Vec<usize> = drain(&mut queue).into_iter().map(|(v, _)| v).collect();
        assert_eq!(order, vec![0, 2, 4, 5]);
    }

    #[test]
    fn test_increase_key_moves_vertex_up() {
        let mut queue = EligibleQueue::new(4);
        queue.push(idx(0), 10);
        queue.push(idx(1), 5);
        queue.push(idx(2), 1);

        queue.push(idx(2), 11);
        assert_eq!(queue.priority(idx(2)), Some(11));
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.pop(), Some((idx(2), 11)));
    }

    #[test]
    fn test_decrease_key_moves_vertex_down() {
        let mut queue = EligibleQueue::new(3);
        queue.push(idx(0), 10);
        queue.push(idx(1), 5);
        queue.push(idx(0), 1);

        assert_eq!(drain(&mut queue), vec![(1, 5), (0, 1)]);
    }

    #[test]
    fn test_contains_tracks_membership() {
        let mut queue = EligibleQueue::new(2);
        assert!(!queue.contains(idx(1)));
        assert_eq!(queue.priority(idx(1)), None);

        queue.push(idx(1), 0);
        assert!(queue.contains(idx(1)));

        queue.pop();
        assert!(!queue.contains(idx(1)));
        assert!(!queue.contains(idx(7)));
    }

    #[test]
    fn test_out_of_capacity_ignored() {
        let mut queue = EligibleQueue::new(1);
        queue.push(idx(3), 1);
        assert!(queue.is_empty());
    }
}
