//! Single-owner gate arena.
//!
//! A `GateBoard` owns every gate timetable for the duration of a run. Each
//! placement reads all gates to score them, then writes at most one. The
//! next placement starts only after the previous one has committed or been
//! delayed, since the conflict check must see every earlier commit.
//!
//! Concurrent readers take a [`BoardSnapshot`] after a commit instead of
//! borrowing the live board.

use std::sync::Arc;

use tracing::debug;

use crate::error::AssignError;
use crate::heuristic::{CandidateQueue, GateCandidate, GateHeuristic};
use crate::models::{Flight, Gate, Outcome};
use crate::validation::validate_input;

/// Exclusive owner of all gate timetables.
#[derive(Debug, Clone)]
pub struct GateBoard {
    gates: Vec<Gate>,
}

impl GateBoard {
    /// Creates a board from a non-empty set of uniquely identified gates.
    pub fn new(gates: Vec<Gate>) -> Result<Self, AssignError> {
        if let Err(errors) = validate_input(&[], &gates) {
            if let Some(first) = errors.into_iter().next() {
                return Err(first);
            }
        }
        Ok(Self::from_validated(gates))
    }

    /// Wraps gates that already passed [`validate_input`].
    pub(crate) fn from_validated(gates: Vec<Gate>) -> Self {
        Self { gates }
    }

    /// Scores every gate for `flight` and commits it to the first
    /// conflict-free gate in ascending `(cost, gate_id)` order.
    ///
    /// # Algorithm
    /// 1. Build a min-priority queue of `(cost, gate_id)` over all gates.
    /// 2. Pop candidates; accept the first whose timetable has no flight
    ///    overlapping `flight`.
    /// 3. If accepted, append `flight` to that gate's timetable.
    /// 4. If the queue runs dry, return `Delayed` and leave every gate untouched.
    ///
    /// The window must be well-formed; [`GreedyAssigner`](super::GreedyAssigner)
    /// validates input before placing anything.
    pub fn place(&mut self, flight: &Flight, heuristic: &dyn GateHeuristic) -> Outcome {
        let mut queue = self.score(flight, heuristic);

        while let Some(candidate) = queue.pop() {
            if self.gates[candidate.gate_index].is_free_for(flight) {
                debug!(
                    flight = %flight.id,
                    gate = %candidate.gate_id,
                    cost = candidate.cost,
                    "gate accepted"
                );
                self.gates[candidate.gate_index].commit(flight.clone());
                return Outcome::Gate(candidate.gate_id);
            }
            debug!(
                flight = %flight.id,
                gate = %candidate.gate_id,
                cost = candidate.cost,
                "gate conflicts, trying next"
            );
        }

        Outcome::Delayed
    }

    /// Read-only scoring phase of a placement.
    fn score(&self, flight: &Flight, heuristic: &dyn GateHeuristic) -> CandidateQueue {
        self.gates
            .iter()
            .enumerate()
            .map(|(i, g)| GateCandidate::new(heuristic.cost(g, flight), g.id.as_str(), i))
            .collect()
    }

    /// All gates, in input order.
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// Looks up a gate by ID.
    pub fn gate(&self, gate_id: &str) -> Option<&Gate> {
        self.gates.iter().find(|g| g.id == gate_id)
    }

    /// The flight occupying `gate_id` at `time`, if any.
    pub fn occupant_at(&self, gate_id: &str, time: i64) -> Option<&Flight> {
        occupant_at(&self.gates, gate_id, time)
    }

    /// Immutable copy of the current timetables.
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            gates: self.gates.iter().cloned().collect(),
        }
    }

    /// Releases the gates.
    pub fn into_gates(self) -> Vec<Gate> {
        self.gates
    }
}

/// A cheaply cloneable, immutable view of a board.
#[derive(Debug, Clone)]
pub struct BoardSnapshot {
    gates: Arc<[Gate]>,
}

impl BoardSnapshot {
    /// All gates, in input order.
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// Looks up a gate by ID.
    pub fn gate(&self, gate_id: &str) -> Option<&Gate> {
        self.gates.iter().find(|g| g.id == gate_id)
    }

    /// The flight occupying `gate_id` at `time`, if any.
    pub fn occupant_at(&self, gate_id: &str, time: i64) -> Option<&Flight> {
        occupant_at(&self.gates, gate_id, time)
    }
}

fn occupant_at<'a>(gates: &'a [Gate], gate_id: &str, time: i64) -> Option<&'a Flight> {
    gates
        .iter()
        .find(|g| g.id == gate_id)?
        .schedule()
        .iter()
        .find(|f| f.window.contains(time))
}
