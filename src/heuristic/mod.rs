//! Gate scoring heuristics.
//!
//! A heuristic ranks gates for a candidate flight; it never decides
//! feasibility. The assigner pops gates in ascending cost order and
//! still checks every popped gate for conflicts before committing.
//!
//! # Usage
//!
//! ```
//! use u_gate::heuristic::{GateHeuristic, rules::ConflictPenalty};
//! use u_gate::models::{Flight, Gate};
//!
//! let gate = Gate::new("G1", 10.0);
//! let flight = Flight::new("F1", 800, 900);
//! assert_eq!(ConflictPenalty::default().cost(&gate, &flight), 10.0);
//! ```

mod candidate;
pub mod rules;

pub use candidate::{CandidateQueue, GateCandidate};

use crate::models::{Flight, Gate, TimeWindow};
use std::fmt::Debug;

/// Heuristic cost of a (gate, flight) pair.
///
/// **Lower cost = preferred gate.**
pub type GateCost = f64;

/// A pure scoring function over a gate's current timetable.
///
/// Implementations must not depend on anything but their arguments and
/// their own immutable parameters, so that repeated runs are identical.
pub trait GateHeuristic: Send + Sync + Debug {
    /// Heuristic name.
    fn name(&self) -> &'static str;

    /// Scores placing `flight` on `gate` given the gate's current timetable.
    fn cost(&self, gate: &Gate, flight: &Flight) -> GateCost;
}

/// Whether two windows conflict under half-open semantics.
#[inline]
pub fn overlaps(a: &TimeWindow, b: &TimeWindow) -> bool {
    a.overlaps(b)
}

/// Number of flights on `gate` that overlap `flight`.
#[inline]
pub fn conflict_count(gate: &Gate, flight: &Flight) -> usize {
    gate.conflict_count(flight)
}

/// `gate.distance + penalty * conflicts`.
pub fn heuristic_cost(gate: &Gate, flight: &Flight, penalty: f64) -> GateCost {
    gate.distance + penalty * conflict_count(gate, flight) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate_with(id: &str, distance: f64, flights: &[Flight]) -> Gate {
        let mut g = Gate::new(id, distance);
        for f in flights {
            g.commit(f.clone());
        }
        g
    }

    #[test]
    fn test_overlaps_symmetric() {
        let a = TimeWindow::new(800, 900);
        let b = TimeWindow::new(850, 950);
        assert_eq!(overlaps(&a, &b), overlaps(&b, &a));
        assert!(overlaps(&a, &b));
    }

    #[test]
    fn test_cost_empty_gate_is_distance() {
        let g = Gate::new("G3", 30.0);
        let f = Flight::new("F1", 800, 900);
        assert!((heuristic_cost(&g, &f, 1000.0) - 30.0).abs() < 1e-10);
    }

    #[test]
    fn test_cost_counts_each_conflict() {
        let g = gate_with(
            "G1",
            10.0,
            &[Flight::new("F1", 800, 900), Flight::new("F3", 910, 950)],
        );
        let f = Flight::new("F2", 830, 1000);
        assert_eq!(conflict_count(&g, &f), 2);
        assert!((heuristic_cost(&g, &f, 1000.0) - 2010.0).abs() < 1e-10);
    }

    #[test]
    fn test_cost_ignores_touching_flight() {
        let g = gate_with("G1", 10.0, &[Flight::new("F1", 800, 900)]);
        let f = Flight::new("F6", 900, 1000);
        assert!((heuristic_cost(&g, &f, 1000.0) - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_cost_does_not_mutate_gate() {
        let g = gate_with("G1", 10.0, &[Flight::new("F1", 800, 900)]);
        let before = g.clone();
        let _ = heuristic_cost(&g, &Flight::new("F2", 830, 1000), 1000.0);
        assert_eq!(g, before);
    }
}
