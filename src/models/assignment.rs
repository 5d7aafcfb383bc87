//! Assignment (solution) model.
//!
//! The result of a run: one outcome per processed flight, in processing
//! (arrival) order, plus every gate's final timetable. Read-only once the
//! run completes; this is the whole contract with reporting and chart
//! consumers.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Flight, Gate};

/// Terminal outcome for a single flight.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Committed to the gate with this ID.
    Gate(String),
    /// No gate could host the flight without conflict.
    Delayed,
}

impl Outcome {
    /// Assigned gate ID, if any.
    pub fn gate_id(&self) -> Option<&str> {
        match self {
            Outcome::Gate(id) => Some(id),
            Outcome::Delayed => None,
        }
    }

    /// Whether the flight was delayed.
    pub fn is_delayed(&self) -> bool {
        matches!(self, Outcome::Delayed)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Gate(id) => f.write_str(id),
            Outcome::Delayed => f.write_str("Delayed"),
        }
    }
}

/// A flight-to-outcome record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Flight ID.
    pub flight_id: String,
    /// Gate or `Delayed`.
    pub outcome: Outcome,
}

impl Assignment {
    /// Creates an assignment to a gate.
    pub fn to_gate(flight_id: impl Into<String>, gate_id: impl Into<String>) -> Self {
        Self {
            flight_id: flight_id.into(),
            outcome: Outcome::Gate(gate_id.into()),
        }
    }

    /// Creates a delayed record.
    pub fn delayed(flight_id: impl Into<String>) -> Self {
        Self {
            flight_id: flight_id.into(),
            outcome: Outcome::Delayed,
        }
    }
}

/// Output of a gate assignment run.
///
/// Serialize-only: gate timetables are never read back from input.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AssignmentResult {
    /// Outcomes in processing order.
    pub assignments: Vec<Assignment>,
    /// Final gate timetables, in input order.
    pub gates: Vec<Gate>,
    /// `false` if the run was cancelled before every flight was processed.
    pub completed: bool,
}

impl AssignmentResult {
    /// Outcome for a flight.
    pub fn outcome_for(&self, flight_id: &str) -> Option<&Outcome> {
        self.assignments
            .iter()
            .find(|a| a.flight_id == flight_id)
            .map(|a| &a.outcome)
    }

    /// IDs of delayed flights, in processing order.
    pub fn delayed(&self) -> Vec<&str> {
        self.assignments
            .iter()
            .filter(|a| a.outcome.is_delayed())
            .map(|a| a.flight_id.as_str())
            .collect()
    }

    /// Number of flights committed to a gate.
    pub fn assigned_count(&self) -> usize {
        self.assignments
            .iter()
            .filter(|a| !a.outcome.is_delayed())
            .count()
    }

    /// Final gate state.
    pub fn gate(&self, gate_id: &str) -> Option<&Gate> {
        self.gates.iter().find(|g| g.id == gate_id)
    }

    /// Final timetable of a gate.
    pub fn schedule_for(&self, gate_id: &str) -> Option<&[Flight]> {
        self.gate(gate_id).map(Gate::schedule)
    }

    /// Re-checks that no gate hosts two overlapping flights.
    pub fn is_conflict_free(&self) -> bool {
        self.gates.iter().all(|g| {
            let s = g.schedule();
            s.iter()
                .enumerate()
                .all(|(i, a)| s[i + 1..].iter().all(|b| !a.conflicts_with(b)))
        })
    }

    /// Number of recorded outcomes.
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Whether no flight was processed.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}
