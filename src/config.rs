//! Assigner configuration.
//!
//! The conflict penalty is the only tunable parameter of the heuristic.
//! It weights each already-committed flight that overlaps a candidate, and
//! is meant to dominate any distance difference among gates.

use serde::{Deserialize, Serialize};

use crate::error::AssignError;

/// Penalty applied per overlapping flight when scoring a gate.
pub const DEFAULT_CONFLICT_PENALTY: f64 = 1000.0;

/// Configuration for [`GreedyAssigner`](crate::scheduler::GreedyAssigner).
///
/// # Example
/// ```
/// use u_gate::config::AssignerConfig;
///
/// let config = AssignerConfig::from_json(r#"{"conflict_penalty": 500.0}"#).unwrap();
/// assert_eq!(config.conflict_penalty, 500.0);
///
/// let defaults = AssignerConfig::from_json("{}").unwrap();
/// assert_eq!(defaults.conflict_penalty, 1000.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssignerConfig {
    /// Weight per overlapping flight (finite, non-negative).
    pub conflict_penalty: f64,
}

impl Default for AssignerConfig {
    fn default() -> Self {
        Self {
            conflict_penalty: DEFAULT_CONFLICT_PENALTY,
        }
    }
}

impl AssignerConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the conflict penalty.
    pub fn with_conflict_penalty(mut self, penalty: f64) -> Self {
        self.conflict_penalty = penalty;
        self
    }

    /// Parses and validates a JSON configuration.
    ///
    /// Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, AssignError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| AssignError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks parameter ranges.
    pub fn validate(&self) -> Result<(), AssignError> {
        if !self.conflict_penalty.is_finite() || self.conflict_penalty < 0.0 {
            return Err(AssignError::InvalidConfig(format!(
                "conflict_penalty must be finite and non-negative, got {}",
                self.conflict_penalty
            )));
        }
        Ok(())
    }
}
