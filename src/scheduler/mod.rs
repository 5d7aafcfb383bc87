//! Gate assignment and KPI evaluation.
//!
//! # Algorithm
//!
//! `GreedyAssigner` processes flights in arrival order and commits each to
//! the first gate that ranks best by heuristic cost and passes an exact
//! no-overlap check. It never backtracks.
//!
//! `GateBoard` is the arena that owns gate timetables during a run.
//!
//! # KPI
//!
//! `AssignmentKpi` summarizes a finished run: delays, distance cost, and
//! gate utilization.

mod board;
mod greedy;
mod kpi;

pub use board::{BoardSnapshot, GateBoard};
pub use greedy::{AssignmentRequest, GreedyAssigner};
pub use kpi::AssignmentKpi;
