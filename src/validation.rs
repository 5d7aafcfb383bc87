//! Input validation for gate assignment problems.
//!
//! Checks structural integrity of flights and gates before any scoring.
//! Detects:
//! - An empty gate set
//! - Duplicate gate and flight IDs
//! - Negative or non-finite gate distances
//! - Malformed flight windows (`arrival >= departure`)
//!
//! The overlap predicate is only meaningful for well-formed windows, so a
//! malformed window must never reach the scorer.

use crate::error::AssignError;
use crate::models::{Flight, Gate};
use std::collections::HashSet;

/// Validation result: every detected issue, in check order.
pub type ValidationResult = Result<(), Vec<AssignError>>;

/// Validates the input of a gate assignment run.
///
/// Checks:
/// 1. At least one gate
/// 2. No duplicate gate IDs
/// 3. Gate distances are finite and non-negative
/// 4. No duplicate flight IDs
/// 5. Every flight window has `arrival < departure`
///
/// An empty flight list is valid.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(flights: &[Flight], gates: &[Gate]) -> ValidationResult {
    let mut errors = Vec::new();

    if gates.is_empty() {
        errors.push(AssignError::NoGatesAvailable);
    }

    let mut gate_ids = HashSet::new();
    for g in gates {
        if !gate_ids.insert(g.id.as_str()) {
            errors.push(AssignError::DuplicateGateId(g.id.clone()));
        }
        if !g.distance.is_finite() || g.distance < 0.0 {
            errors.push(AssignError::InvalidGateDistance {
                gate_id: g.id.clone(),
                distance: g.distance,
            });
        }
    }

    let mut flight_ids = HashSet::new();
    for f in flights {
        if !flight_ids.insert(f.id.as_str()) {
            errors.push(AssignError::DuplicateFlightId(f.id.clone()));
        }
    }

    for f in flights {
        if !f.window.is_well_formed() {
            errors.push(AssignError::InvalidFlightWindow {
                flight_id: f.id.clone(),
                arrival: f.arrival(),
                departure: f.departure(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_gates() -> Vec<Gate> {
        vec![
            Gate::new("G1", 10.0),
            Gate::new("G2", 20.0),
            Gate::new("G3", 30.0),
        ]
    }

    fn sample_flights() -> Vec<Flight> {
        vec![
            Flight::new("F1", 800, 900),
            Flight::new("F2", 830, 1000),
            Flight::new("F3", 910, 950),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_input(&sample_flights(), &sample_gates()).is_ok());
    }

    #[test]
    fn test_no_flights_is_valid() {
        assert!(validate_input(&[], &sample_gates()).is_ok());
    }

    #[test]
    fn test_no_gates() {
        let errors = validate_input(&sample_flights(), &[]).unwrap_err();
        assert_eq!(errors, vec![AssignError::NoGatesAvailable]);
    }

    #[test]
    fn test_duplicate_gate_id() {
        let gates = vec![Gate::new("G1", 10.0), Gate::new("G1", 15.0)];
        let errors = validate_input(&sample_flights(), &gates).unwrap_err();
        assert!(errors.contains(&AssignError::DuplicateGateId("G1".into())));
    }

    #[test]
    fn test_duplicate_flight_id() {
        let flights = vec![Flight::new("F1", 800, 900), Flight::new("F1", 1000, 1100)];
        let errors = validate_input(&flights, &sample_gates()).unwrap_err();
        assert!(errors.contains(&AssignError::DuplicateFlightId("F1".into())));
    }

    #[test]
    fn test_invalid_distance() {
        let gates = vec![Gate::new("G1", -1.0), Gate::new("G2", f64::INFINITY)];
        let errors = validate_input(&sample_flights(), &gates).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .all(|e| matches!(e, AssignError::InvalidGateDistance { .. })));
    }

    #[test]
    fn test_zero_length_window() {
        let flights = vec![Flight::new("F1", 900, 900)];
        let errors = validate_input(&flights, &sample_gates()).unwrap_err();
        assert_eq!(
            errors,
            vec![AssignError::InvalidFlightWindow {
                flight_id: "F1".into(),
                arrival: 900,
                departure: 900,
            }]
        );
    }

    #[test]
    fn test_inverted_window() {
        let flights = vec![Flight::new("F1", 800, 900), Flight::new("F2", 1000, 930)];
        let errors = validate_input(&flights, &sample_gates()).unwrap_err();
        assert!(matches!(
            &errors[0],
            AssignError::InvalidFlightWindow { flight_id, .. } if flight_id == "F2"
        ));
    }

    #[test]
    fn test_multiple_errors() {
        let flights = vec![Flight::new("F1", 900, 800)];
        let errors = validate_input(&flights, &[]).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0], AssignError::NoGatesAvailable);
    }
}
