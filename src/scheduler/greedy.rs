//! Greedy best-first gate assigner.
//!
//! # Algorithm
//!
//! 1. Validate input; any structural error aborts the run.
//! 2. Stable-sort flights by arrival (ties keep input order).
//! 3. For each flight, score every gate and pop gates in ascending
//!    `(cost, gate_id)` order; commit to the first conflict-free gate.
//! 4. If no gate is conflict-free, record the flight as `Delayed`.
//!
//! Committed flights are never reconsidered. The result is conflict-free
//! and deterministic, not optimal.
//!
//! # Complexity
//! O(n * (g log g + g * k)) where n=flights, g=gates, k=flights per gate.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::GateBoard;
use crate::config::AssignerConfig;
use crate::error::AssignError;
use crate::heuristic::rules::ConflictPenalty;
use crate::heuristic::GateHeuristic;
use crate::models::{Assignment, AssignmentResult, Flight, Gate, Outcome};
use crate::validation::validate_input;

/// Input container for a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentRequest {
    /// Flights to place.
    pub flights: Vec<Flight>,
    /// Available gates.
    pub gates: Vec<Gate>,
    /// Overrides the assigner's configuration when present.
    #[serde(default)]
    pub config: Option<AssignerConfig>,
}

impl AssignmentRequest {
    /// Creates a new request.
    pub fn new(flights: Vec<Flight>, gates: Vec<Gate>) -> Self {
        Self {
            flights,
            gates,
            config: None,
        }
    }

    /// Sets the configuration.
    pub fn with_config(mut self, config: AssignerConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Parses a request from JSON.
    pub fn from_json(json: &str) -> Result<Self, AssignError> {
        serde_json::from_str(json).map_err(|e| AssignError::InvalidRequest(e.to_string()))
    }
}

/// Greedy best-first gate assigner.
///
/// # Example
///
/// ```
/// use u_gate::models::{Flight, Gate, Outcome};
/// use u_gate::scheduler::GreedyAssigner;
///
/// let flights = vec![
///     Flight::new("F1", 800, 900),
///     Flight::new("F2", 830, 1000),
/// ];
/// let gates = vec![Gate::new("G1", 10.0), Gate::new("G2", 20.0)];
///
/// let result = GreedyAssigner::new().assign(&flights, gates).unwrap();
/// assert_eq!(result.outcome_for("F1"), Some(&Outcome::Gate("G1".into())));
/// assert_eq!(result.outcome_for("F2"), Some(&Outcome::Gate("G2".into())));
/// ```
#[derive(Debug, Clone, Default)]
pub struct GreedyAssigner {
    config: AssignerConfig,
    heuristic: Option<Arc<dyn GateHeuristic>>,
}

impl GreedyAssigner {
    /// Creates an assigner with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the configuration.
    pub fn with_config(mut self, config: AssignerConfig) -> Self {
        self.config = config;
        self
    }

    /// Replaces the default [`ConflictPenalty`] heuristic.
    ///
    /// When set, `config.conflict_penalty` no longer affects scoring.
    pub fn with_heuristic<H: GateHeuristic + 'static>(mut self, heuristic: H) -> Self {
        self.heuristic = Some(Arc::new(heuristic));
        self
    }

    /// Active configuration.
    pub fn config(&self) -> &AssignerConfig {
        &self.config
    }

    /// Assigns every flight to a gate or marks it delayed.
    ///
    /// # Errors
    /// Fails before any assignment with the first input error found by
    /// [`validate_input`], or with `InvalidConfig`.
    pub fn assign(
        &self,
        flights: &[Flight],
        gates: Vec<Gate>,
    ) -> Result<AssignmentResult, AssignError> {
        self.run(flights, gates, None)
    }

    /// Like [`assign`](Self::assign), but checks `cancel` before each flight.
    ///
    /// Once the flag is set no further flights are processed. Committed
    /// assignments are kept, and the result has `completed == false`.
    pub fn assign_until(
        &self,
        flights: &[Flight],
        gates: Vec<Gate>,
        cancel: &AtomicBool,
    ) -> Result<AssignmentResult, AssignError> {
        self.run(flights, gates, Some(cancel))
    }

    /// Runs a request, honouring its configuration override.
    pub fn assign_request(
        &self,
        request: &AssignmentRequest,
    ) -> Result<AssignmentResult, AssignError> {
        let assigner = Self {
            config: request.config.clone().unwrap_or_else(|| self.config.clone()),
            heuristic: self.heuristic.clone(),
        };
        assigner.assign(&request.flights, request.gates.clone())
    }

    fn run(
        &self,
        flights: &[Flight],
        gates: Vec<Gate>,
        cancel: Option<&AtomicBool>,
    ) -> Result<AssignmentResult, AssignError> {
        self.config.validate()?;
        if let Err(errors) = validate_input(flights, &gates) {
            warn!(count = errors.len(), "input rejected");
            if let Some(first) = errors.into_iter().next() {
                return Err(first);
            }
        }

        let heuristic = self.heuristic();
        let mut board = GateBoard::from_validated(gates);
        let order = arrival_order(flights);
        let mut assignments = Vec::with_capacity(flights.len());
        let mut completed = true;

        info!(
            flights = flights.len(),
            gates = board.gates().len(),
            heuristic = heuristic.name(),
            "gate assignment started"
        );

        for (processed, &idx) in order.iter().enumerate() {
            if cancel.is_some_and(|c| c.load(Ordering::Acquire)) {
                warn!(
                    processed,
                    remaining = order.len() - processed,
                    "gate assignment cancelled"
                );
                completed = false;
                break;
            }

            let flight = &flights[idx];
            let outcome = board.place(flight, heuristic.as_ref());
            match &outcome {
                Outcome::Gate(gate_id) => {
                    info!(flight = %flight.id, gate = %gate_id, "flight assigned")
                }
                Outcome::Delayed => warn!(flight = %flight.id, "no conflict-free gate, delayed"),
            }
            assignments.push(Assignment {
                flight_id: flight.id.clone(),
                outcome,
            });
        }

        let result = AssignmentResult {
            assignments,
            gates: board.into_gates(),
            completed,
        };
        info!(
            assigned = result.assigned_count(),
            delayed = result.delayed().len(),
            completed,
            "gate assignment finished"
        );
        Ok(result)
    }

    fn heuristic(&self) -> Arc<dyn GateHeuristic> {
        match &self.heuristic {
            Some(h) => Arc::clone(h),
            None => Arc::new(ConflictPenalty::new(self.config.conflict_penalty)),
        }
    }
}

/// Flight indices by ascending arrival; ties keep input order.
fn arrival_order(flights: &[Flight]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..flights.len()).collect();
    indices.sort_by_key(|&i| flights[i].arrival());
    indices
}
