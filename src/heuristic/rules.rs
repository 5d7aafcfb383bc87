//! Built-in gate heuristics.

use super::{heuristic_cost, GateCost, GateHeuristic};
use crate::config::DEFAULT_CONFLICT_PENALTY;
use crate::models::{Flight, Gate};

/// Distance plus a fixed penalty per overlapping committed flight.
///
/// With a penalty larger than any distance spread, conflict-free gates
/// rank ahead of conflicted ones.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConflictPenalty {
    /// Weight per overlapping flight.
    pub penalty: f64,
}

impl ConflictPenalty {
    /// Creates the heuristic with the given per-conflict weight.
    pub fn new(penalty: f64) -> Self {
        Self { penalty }
    }
}

impl Default for ConflictPenalty {
    fn default() -> Self {
        Self::new(DEFAULT_CONFLICT_PENALTY)
    }
}

impl GateHeuristic for ConflictPenalty {
    fn name(&self) -> &'static str {
        "CONFLICT_PENALTY"
    }

    fn cost(&self, gate: &Gate, flight: &Flight) -> GateCost {
        heuristic_cost(gate, flight, self.penalty)
    }
}

/// Distance only; ignores the timetable.
///
/// Ranks conflicted gates as freely as open ones, leaving feasibility
/// entirely to the assigner's exact check.
#[derive(Debug, Clone, Copy, Default)]
pub struct DistanceOnly;

impl GateHeuristic for DistanceOnly {
    fn name(&self) -> &'static str {
        "DISTANCE"
    }

    fn cost(&self, gate: &Gate, _flight: &Flight) -> GateCost {
        gate.distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_penalty() {
        let mut g = Gate::new("G1", 10.0);
        g.commit(Flight::new("F1", 800, 900));
        let f = Flight::new("F2", 830, 1000);

        assert!((ConflictPenalty::default().cost(&g, &f) - 1010.0).abs() < 1e-10);
        assert!((ConflictPenalty::new(5.0).cost(&g, &f) - 15.0).abs() < 1e-10);
        assert_eq!(ConflictPenalty::default().name(), "CONFLICT_PENALTY");
    }

    #[test]
    fn test_distance_only() {
        let mut g = Gate::new("G1", 10.0);
        g.commit(Flight::new("F1", 800, 900));
        let f = Flight::new("F2", 830, 1000);
        assert!((DistanceOnly.cost(&g, &f) - 10.0).abs() < 1e-10);
    }
}
