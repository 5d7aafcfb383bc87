//! Gate assignment domain models.
//!
//! # Domain Mappings
//!
//! | u-gate | Airport | Port | Hospital |
//! |--------|---------|------|----------|
//! | Flight | Arriving aircraft | Vessel call | Surgery |
//! | Gate | Gate / stand | Berth | Operating room |
//! | distance | Walking / taxi cost | Quay distance | Transfer cost |
//! | Delayed | Remote stand / hold | Anchorage | Rescheduled |

mod assignment;
mod flight;
mod gate;
mod window;

pub use assignment::{Assignment, AssignmentResult, Outcome};
pub use flight::Flight;
pub use gate::Gate;
pub use window::TimeWindow;
