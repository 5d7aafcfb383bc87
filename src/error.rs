//! Error taxonomy.
//!
//! Structural and input errors abort a run before any scoring. A flight
//! that cannot be placed is not an error; it surfaces as
//! [`Outcome::Delayed`](crate::models::Outcome::Delayed) in the result.

use thiserror::Error;

/// Errors that abort a gate assignment run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AssignError {
    /// A flight's arrival is not strictly before its departure.
    #[error("flight '{flight_id}' has invalid window: arrival {arrival} is not before departure {departure}")]
    InvalidFlightWindow {
        flight_id: String,
        arrival: i64,
        departure: i64,
    },
    /// The gate set is empty.
    #[error("no gates available")]
    NoGatesAvailable,
    /// Two flights share an ID.
    #[error("duplicate flight ID: {0}")]
    DuplicateFlightId(String),
    /// Two gates share an ID.
    #[error("duplicate gate ID: {0}")]
    DuplicateGateId(String),
    /// A gate distance is negative or not finite.
    #[error("gate '{gate_id}' has invalid distance {distance}")]
    InvalidGateDistance { gate_id: String, distance: f64 },
    /// Configuration could not be parsed or is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// A problem document could not be parsed.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    /// Output could not be serialized.
    #[error("serialization failed: {0}")]
    Serialization(String),
}
