//! Time window model.
//!
//! # Time Model
//! All times are `i64` ticks relative to a scheduling epoch. The consumer
//! defines both the epoch and the unit (milliseconds, minutes, hundredths
//! of an hour). Only ordering and equality are interpreted here.

use serde::{Deserialize, Serialize};

/// An occupancy interval `[arrival, departure)`.
///
/// Half-open: includes `arrival`, excludes `departure`. A well-formed
/// window has `arrival < departure`; construction does not enforce this,
/// input validation does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeWindow {
    /// Interval start (inclusive).
    pub arrival: i64,
    /// Interval end (exclusive).
    pub departure: i64,
}

impl TimeWindow {
    /// Creates a new time window.
    pub fn new(arrival: i64, departure: i64) -> Self {
        Self { arrival, departure }
    }

    /// Whether the window has strictly positive duration.
    #[inline]
    pub fn is_well_formed(&self) -> bool {
        self.arrival < self.departure
    }

    /// Duration of this window; zero if malformed.
    ///
    /// Computed as an unsigned distance, so the full `i64` range fits.
    #[inline]
    pub fn duration(&self) -> u64 {
        if self.is_well_formed() {
            self.departure.abs_diff(self.arrival)
        } else {
            0
        }
    }

    /// Whether a timestamp falls within this window.
    #[inline]
    pub fn contains(&self, time: i64) -> bool {
        time >= self.arrival && time < self.departure
    }

    /// Whether two windows overlap.
    ///
    /// Touching endpoints (`a.departure == b.arrival`) do not overlap.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.departure > other.arrival && self.arrival < other.departure
    }
}
