//! Signal implementations for narrate.
//!
//! This crate provides the descriptive signals computed over a short, ordered
//! time series:
//! - Change: how the most recent point moved relative to the one before it
//! - Trend: whether recent first differences kept their sign back to a
//!   lookback point, and how the latest value compares to that point
//!
//! [`SignalSet`] computes all of them together against one series.
//!
//! # Example
//!
//! ```
//! use narrate_signals::{SignalSet, SignalSetConfig};
//! use narrate_traits::{NarrateError, Observation, Series};
//!
//! let series = Series::new(vec![
//!     Observation::new("October", 2.04),
//!     Observation::new("November", 2.20),
//!     Observation::new("December", 2.11),
//! ]);
//!
//! // The default lookbacks reach back 12 points.
//! let err = SignalSet::default().compute(&series).unwrap_err();
//! assert!(matches!(err, NarrateError::LookbackOutOfRange { lookback: 6, len: 3 }));
//!
//! let set = SignalSet::new(SignalSetConfig {
//!     lookbacks: vec![2, 3],
//!     ..Default::default()
//! })
//! .unwrap();
//! let snapshot = set.compute(&series).unwrap();
//! assert!(snapshot.recent_change.decrease);
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod change;
pub mod registry;
pub mod set;
pub mod trend;

// Re-export key types
pub use change::{RecentChangeResult, RecentChangeSignal};
pub use registry::{SignalCategory, SignalInfo};
pub use set::{SignalSet, SignalSetConfig, SignalSnapshot};
pub use trend::{TrendKeeperConfig, TrendKeeperResult, TrendKeeperSignal};
