//! Gate model.
//!
//! A gate is a physical resource with a fixed access cost ("distance",
//! a proxy for walking distance or taxi time) and a timetable of the
//! flights committed to it.
//!
//! The timetable is append-only. Only the assignment orchestrator commits
//! flights; consumers see it read-only through [`Gate::schedule`].

use serde::{Deserialize, Serialize};

use super::Flight;

/// A gate that can host one flight at a time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gate {
    /// Unique gate identifier.
    pub id: String,
    /// Human-readable name.
    #[serde(default)]
    pub name: String,
    /// Access cost (non-negative). Lower is preferred.
    pub distance: f64,
    /// Committed flights, in commit order.
    #[serde(default, skip_deserializing)]
    schedule: Vec<Flight>,
}

impl Gate {
    /// Creates an empty gate.
    pub fn new(id: impl Into<String>, distance: f64) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            distance,
            schedule: Vec::new(),
        }
    }

    /// Sets the gate name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Flights committed to this gate, in commit order.
    pub fn schedule(&self) -> &[Flight] {
        &self.schedule
    }

    /// Whether nothing has been committed yet.
    pub fn is_empty(&self) -> bool {
        self.schedule.is_empty()
    }

    /// Number of committed flights that overlap the candidate.
    pub fn conflict_count(&self, flight: &Flight) -> usize {
        self.schedule
            .iter()
            .filter(|f| f.conflicts_with(flight))
            .count()
    }

    /// Whether the candidate overlaps no committed flight.
    pub fn is_free_for(&self, flight: &Flight) -> bool {
        self.schedule.iter().all(|f| !f.conflicts_with(flight))
    }

    /// Total occupied time across the timetable.
    ///
    /// Committed windows never overlap, so the sum is bounded by the
    /// `i64` span; it saturates rather than wrapping.
    pub fn busy_time(&self) -> u64 {
        self.schedule
            .iter()
            .fold(0u64, |acc, f| acc.saturating_add(f.window.duration()))
    }

    /// Appends a flight to the timetable.
    ///
    /// Callers must have checked [`Gate::is_free_for`] first.
    pub(crate) fn commit(&mut self, flight: Flight) {
        debug_assert!(self.is_free_for(&flight));
        self.schedule.push(flight);
    }

    #[cfg(test)]
    pub(crate) fn push_unchecked(&mut self, flight: Flight) {
        self.schedule.push(flight);
    }
}
