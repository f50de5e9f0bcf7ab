//! Change signals describing the most recent step of a series.
//!
//! The recent-change signal compares `t_n` to `t_(n-1)` and reports the
//! direction and magnitude of that single step.

mod recent;

pub use recent::{RecentChangeResult, RecentChangeSignal};
