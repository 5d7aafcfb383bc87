//! Greedy best-first gate assignment.
//!
//! Assigns each arriving flight to one of a fixed set of gates. The hard
//! constraint is that no gate hosts two flights with overlapping
//! `[arrival, departure)` windows; the soft objective is low gate
//! "distance" (walking distance or taxi time).
//!
//! # Modules
//!
//! - **`models`**: Domain types — `TimeWindow`, `Flight`, `Gate`,
//!   `Assignment`, `Outcome`, `AssignmentResult`
//! - **`heuristic`**: Gate scoring — overlap predicate, conflict-penalty
//!   cost, `(cost, gate_id)` min-priority queue
//! - **`scheduler`**: `GreedyAssigner`, the `GateBoard` arena, KPIs
//! - **`validation`**: Input integrity checks (empty gate set, duplicate
//!   IDs, malformed windows, bad distances)
//! - **`config`**: The conflict penalty and its JSON form
//! - **`report`**: Per-flight text report and gate timeline chart model
//!
//! # Example
//!
//! ```
//! use u_gate::models::{Flight, Gate};
//! use u_gate::report::render_lines;
//! use u_gate::scheduler::GreedyAssigner;
//!
//! let flights = vec![
//!     Flight::new("F1", 800, 900),
//!     Flight::new("F2", 830, 1000),
//!     Flight::new("F3", 910, 950),
//!     Flight::new("F4", 1000, 1100),
//!     Flight::new("F5", 930, 1020),
//! ];
//! let gates = vec![
//!     Gate::new("G1", 10.0),
//!     Gate::new("G2", 20.0),
//!     Gate::new("G3", 30.0),
//! ];
//!
//! let result = GreedyAssigner::new().assign(&flights, gates).unwrap();
//! assert_eq!(
//!     render_lines(&result),
//!     vec!["F1 → G1", "F2 → G2", "F3 → G1", "F5 → G3", "F4 → G1"],
//! );
//! ```
//!
//! # Properties
//!
//! Results are conflict-free and deterministic for identical input. They
//! are not optimal: committed flights are never revisited.

pub mod config;
pub mod error;
pub mod heuristic;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod validation;

pub use error::AssignError;
