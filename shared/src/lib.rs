//! Types that cross the boundary between the dashboard client and the UI
//! that renders it.

pub mod protocol;

pub use protocol::{DashboardStats, Outcome, TrialStatus};
