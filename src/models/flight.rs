//! Flight model.
//!
//! A flight is a request for exclusive use of one gate during its
//! `[arrival, departure)` window. Flights are immutable once created.

use serde::{Deserialize, Serialize};

use super::TimeWindow;

/// A flight requesting a gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flight {
    /// Unique flight identifier.
    pub id: String,
    /// Requested gate occupancy.
    #[serde(flatten)]
    pub window: TimeWindow,
}

impl Flight {
    /// Creates a flight occupying `[arrival, departure)`.
    pub fn new(id: impl Into<String>, arrival: i64, departure: i64) -> Self {
        Self {
            id: id.into(),
            window: TimeWindow::new(arrival, departure),
        }
    }

    /// Creates a flight from an existing window.
    pub fn with_window(id: impl Into<String>, window: TimeWindow) -> Self {
        Self {
            id: id.into(),
            window,
        }
    }

    /// Arrival time.
    #[inline]
    pub fn arrival(&self) -> i64 {
        self.window.arrival
    }

    /// Departure time.
    #[inline]
    pub fn departure(&self) -> i64 {
        self.window.departure
    }

    /// Whether this flight's window conflicts with another's.
    #[inline]
    pub fn conflicts_with(&self, other: &Flight) -> bool {
        self.window.overlaps(&other.window)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flight_accessors() {
        let f = Flight::new("F1", 800, 900);
        assert_eq!(f.id, "F1");
        assert_eq!(f.arrival(), 800);
        assert_eq!(f.departure(), 900);
        assert_eq!(f.window.duration(), 100);
    }

    #[test]
    fn test_flight_conflicts() {
        let f1 = Flight::new("F1", 800, 900);
        let f2 = Flight::new("F2", 830, 1000);
        let f3 = Flight::new("F3", 900, 950);
        assert!(f1.conflicts_with(&f2));
        assert!(!f1.conflicts_with(&f3));
    }

    #[test]
    fn test_flight_flat_json() {
        let f: Flight =
            serde_json::from_str(r#"{"id":"F9","arrival":1000,"departure":1100}"#).unwrap();
        assert_eq!(f, Flight::new("F9", 1000, 1100));
    }
}
