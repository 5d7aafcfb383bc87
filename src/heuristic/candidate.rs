//! Min-priority ordering of scored gates.
//!
//! Candidates are totally ordered by `(cost, gate_id)` ascending, so equal
//! costs resolve the same way on every run regardless of gate input order.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use super::GateCost;

/// A scored gate awaiting the feasibility check.
#[derive(Debug, Clone)]
pub struct GateCandidate {
    /// Heuristic cost.
    pub cost: GateCost,
    /// Gate ID (tie-breaker).
    pub gate_id: String,
    /// Position of the gate in the owning arena.
    pub gate_index: usize,
}

impl GateCandidate {
    /// Creates a candidate.
    pub fn new(cost: GateCost, gate_id: impl Into<String>, gate_index: usize) -> Self {
        Self {
            cost,
            gate_id: gate_id.into(),
            gate_index,
        }
    }
}

impl PartialEq for GateCandidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for GateCandidate {}

impl PartialOrd for GateCandidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GateCandidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .total_cmp(&other.cost)
            .then_with(|| self.gate_id.cmp(&other.gate_id))
    }
}

/// Min-heap of candidates: `pop` yields the cheapest first.
#[derive(Debug, Default)]
pub struct CandidateQueue {
    heap: BinaryHeap<Reverse<GateCandidate>>,
}

impl CandidateQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty queue with room for `capacity` candidates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    /// Adds a candidate.
    pub fn push(&mut self, candidate: GateCandidate) {
        self.heap.push(Reverse(candidate));
    }

    /// Removes and returns the cheapest candidate.
    pub fn pop(&mut self) -> Option<GateCandidate> {
        self.heap.pop().map(|Reverse(c)| c)
    }

    /// Number of remaining candidates.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the queue is exhausted.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl FromIterator<GateCandidate> for CandidateQueue {
    fn from_iter<I: IntoIterator<Item = GateCandidate>>(iter: I) -> Self {
        Self {
            heap: iter.into_iter().map(Reverse).collect(),
        }
    }
}
