//! Reporting views over a finished run.
//!
//! Two consumers read an [`AssignmentResult`]: a text report with one line
//! per flight, and a chart renderer that draws one row per gate with one
//! bar per assigned flight. Neither feeds back into the assigner.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::AssignError;
use crate::models::AssignmentResult;

/// Report heading.
pub const REPORT_TITLE: &str = "Greedy Best-First Gate Assignment";

/// One `"<flight> → <gate|Delayed>"` line per processed flight.
pub fn render_lines(result: &AssignmentResult) -> Vec<String> {
    result
        .assignments
        .iter()
        .map(|a| format!("{} → {}", a.flight_id, a.outcome))
        .collect()
}

impl fmt::Display for AssignmentResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{REPORT_TITLE}")?;
        writeln!(f, "{}", "-".repeat(REPORT_TITLE.chars().count()))?;
        for line in render_lines(self) {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// One bar on a gate row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineBar {
    /// Bar label.
    pub flight_id: String,
    /// Bar start (inclusive).
    pub start: i64,
    /// Bar end (exclusive).
    pub end: i64,
}

/// All bars on one gate, in commit order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineRow {
    /// Row label.
    pub gate_id: String,
    /// Gate distance (for ordering or colouring rows).
    pub distance: f64,
    /// Assigned flights, in commit order.
    pub bars: Vec<TimelineBar>,
}

/// Horizontal timeline: one row per gate, delayed flights omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    /// One row per gate, in input order.
    pub rows: Vec<TimelineRow>,
}

impl Timeline {
    /// Builds the chart model from final gate timetables.
    pub fn from_result(result: &AssignmentResult) -> Self {
        let rows = result
            .gates
            .iter()
            .map(|g| TimelineRow {
                gate_id: g.id.clone(),
                distance: g.distance,
                bars: g
                    .schedule()
                    .iter()
                    .map(|f| TimelineBar {
                        flight_id: f.id.clone(),
                        start: f.arrival(),
                        end: f.departure(),
                    })
                    .collect(),
            })
            .collect();
        Self { rows }
    }

    /// Row for a gate.
    pub fn row(&self, gate_id: &str) -> Option<&TimelineRow> {
        self.rows.iter().find(|r| r.gate_id == gate_id)
    }

    /// Total bar count across rows.
    pub fn bar_count(&self) -> usize {
        self.rows.iter().map(|r| r.bars.len()).sum()
    }

    /// Pretty JSON for external renderers.
    pub fn to_json(&self) -> Result<String, AssignError> {
        serde_json::to_string_pretty(self).map_err(|e| AssignError::Serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Flight, Gate};
    use crate::scheduler::GreedyAssigner;

    fn run() -> AssignmentResult {
        let flights = vec![
            Flight::new("F1", 800, 900),
            Flight::new("F2", 830, 1000),
            Flight::new("F3", 850, 950),
        ];
        let gates = vec![Gate::new("G1", 10.0), Gate::new("G2", 20.0)];
        GreedyAssigner::new().assign(&flights, gates).unwrap()
    }

    #[test]
    fn test_render_lines() {
        assert_eq!(
            render_lines(&run()),
            vec!["F1 → G1", "F2 → G2", "F3 → Delayed"]
        );
    }

    #[test]
    fn test_display_report() {
        let text = run().to_string();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some(REPORT_TITLE));
        assert!(lines.next().unwrap().chars().all(|c| c == '-'));
        assert_eq!(lines.next(), Some("F1 → G1"));
        assert_eq!(text.lines().count(), 5);
    }

    #[test]
    fn test_timeline_omits_delayed() {
        let t = Timeline::from_result(&run());
        assert_eq!(t.rows.len(), 2);
        assert_eq!(t.bar_count(), 2);
        assert_eq!(
            t.row("G1").unwrap().bars,
            vec![TimelineBar {
                flight_id: "F1".into(),
                start: 800,
                end: 900,
            }]
        );
        assert!(t.rows.iter().flat_map(|r| &r.bars).all(|b| b.flight_id != "F3"));
    }

    #[test]
    fn test_timeline_json() {
        let json = Timeline::from_result(&run()).to_json().unwrap();
        let back: Timeline = serde_json::from_str(&json).unwrap();
        assert_eq!(back.row("G2").unwrap().bars[0].flight_id, "F2");
    }
}
