//! Assignment quality metrics (KPIs).
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Assigned / Delayed | Flight counts by outcome |
//! | On-Gate Rate | Fraction of flights placed at a gate |
//! | Total Distance | Sum of gate distance over assigned flights |
//! | Avg Distance | Total distance / assigned flights |
//! | Utilization | Gate busy time / horizon of assigned flights |

use std::collections::BTreeMap;

use crate::models::AssignmentResult;

/// Assignment performance indicators.
#[derive(Debug, Clone)]
pub struct AssignmentKpi {
    /// Flights committed to a gate.
    pub assigned: usize,
    /// Flights delayed.
    pub delayed: usize,
    /// Fraction of processed flights placed at a gate (0.0..1.0).
    pub on_gate_rate: f64,
    /// Sum of gate distances over assigned flights.
    pub total_distance: f64,
    /// Mean gate distance per assigned flight.
    pub avg_distance: f64,
    /// `[earliest arrival, latest departure)` over assigned flights.
    pub horizon: Option<(i64, i64)>,
    /// Per-gate busy time / horizon length, keyed by gate ID.
    pub utilization_by_gate: BTreeMap<String, f64>,
}

impl AssignmentKpi {
    /// Computes KPIs from a finished run.
    pub fn calculate(result: &AssignmentResult) -> Self {
        let assigned = result.assigned_count();
        let delayed = result.len() - assigned;

        let total_distance: f64 = result
            .gates
            .iter()
            .map(|g| g.distance * g.schedule().len() as f64)
            .sum();

        let horizon = result
            .gates
            .iter()
            .flat_map(|g| g.schedule())
            .fold(None, |acc: Option<(i64, i64)>, f| match acc {
                None => Some((f.arrival(), f.departure())),
                Some((lo, hi)) => Some((lo.min(f.arrival()), hi.max(f.departure()))),
            });

        let utilization_by_gate = match horizon {
            Some((lo, hi)) if hi > lo => {
                let span = hi.abs_diff(lo) as f64;
                result
                    .gates
                    .iter()
                    .map(|g| (g.id.clone(), g.busy_time() as f64 / span))
                    .collect()
            }
            _ => BTreeMap::new(),
        };

        let on_gate_rate = if result.is_empty() {
            1.0
        } else {
            assigned as f64 / result.len() as f64
        };

        let avg_distance = if assigned == 0 {
            0.0
        } else {
            total_distance / assigned as f64
        };

        Self {
            assigned,
            delayed,
            on_gate_rate,
            total_distance,
            avg_distance,
            horizon,
            utilization_by_gate,
        }
    }

    /// Mean utilization across gates (0.0 when nothing was assigned).
    ///
    /// Summed in gate ID order, so repeated runs agree bit for bit.
    pub fn avg_utilization(&self) -> f64 {
        if self.utilization_by_gate.is_empty() {
            0.0
        } else {
            self.utilization_by_gate.values().sum::<f64>() / self.utilization_by_gate.len() as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Flight, Gate};
    use crate::scheduler::GreedyAssigner;

    #[test]
    fn test_kpi_reference_scenario() {
        let flights = vec![
            Flight::new("F1", 800, 900),
            Flight::new("F2", 830, 1000),
            Flight::new("F3", 910, 950),
            Flight::new("F4", 1000, 1100),
            Flight::new("F5", 930, 1020),
        ];
        let gates = vec![
            Gate::new("G1", 10.0),
            Gate::new("G2", 20.0),
            Gate::new("G3", 30.0),
        ];
        let r = GreedyAssigner::new().assign(&flights, gates).unwrap();
        let kpi = AssignmentKpi::calculate(&r);

        assert_eq!(kpi.assigned, 5);
        assert_eq!(kpi.delayed, 0);
        assert!((kpi.on_gate_rate - 1.0).abs() < 1e-10);
        // G1: 3 × 10, G2: 20, G3: 30
        assert!((kpi.total_distance - 80.0).abs() < 1e-10);
        assert!((kpi.avg_distance - 16.0).abs() < 1e-10);
        assert_eq!(kpi.horizon, Some((800, 1100)));
        // G1 busy 100 + 40 + 100 = 240 over 300
        assert!((kpi.utilization_by_gate["G1"] - 0.8).abs() < 1e-10);
        assert!((kpi.utilization_by_gate["G2"] - 170.0 / 300.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_with_delays() {
        let flights = vec![Flight::new("F1", 0, 100), Flight::new("F2", 50, 150)];
        let r = GreedyAssigner::new()
            .assign(&flights, vec![Gate::new("G1", 4.0)])
            .unwrap();
        let kpi = AssignmentKpi::calculate(&r);

        assert_eq!(kpi.assigned, 1);
        assert_eq!(kpi.delayed, 1);
        assert!((kpi.on_gate_rate - 0.5).abs() < 1e-10);
        assert!((kpi.avg_utilization() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_full_range_window() {
        let flights = vec![Flight::new("F1", i64::MIN, i64::MAX)];
        let r = GreedyAssigner::new()
            .assign(&flights, vec![Gate::new("G1", 10.0), Gate::new("G2", 20.0)])
            .unwrap();
        let kpi = AssignmentKpi::calculate(&r);

        assert_eq!(kpi.assigned, 1);
        assert_eq!(kpi.horizon, Some((i64::MIN, i64::MAX)));
        assert!((kpi.utilization_by_gate["G1"] - 1.0).abs() < 1e-10);
        assert!((kpi.utilization_by_gate["G2"] - 0.0).abs() < 1e-10);
        assert!((kpi.avg_utilization() - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_utilization_ordered_by_gate_id() {
        let flights = vec![Flight::new("F1", 0, 100), Flight::new("F2", 0, 50)];
        let gates = vec![Gate::new("Z", 1.0), Gate::new("A", 2.0), Gate::new("M", 3.0)];
        let r = GreedyAssigner::new().assign(&flights, gates).unwrap();
        let kpi = AssignmentKpi::calculate(&r);

        let ids: Vec<&str> = kpi.utilization_by_gate.keys().map(String::as_str).collect();
        assert_eq!(ids, vec!["A", "M", "Z"]);
        let again = AssignmentKpi::calculate(&r);
        assert_eq!(
            kpi.avg_utilization().to_bits(),
            again.avg_utilization().to_bits()
        );
    }

    #[test]
    fn test_kpi_empty() {
        let kpi = AssignmentKpi::calculate(&AssignmentResult::default());
        assert_eq!(kpi.assigned, 0);
        assert!((kpi.on_gate_rate - 1.0).abs() < 1e-10);
        assert!((kpi.avg_distance - 0.0).abs() < 1e-10);
        assert!(kpi.horizon.is_none());
        assert!((kpi.avg_utilization() - 0.0).abs() < 1e-10);
    }
}
