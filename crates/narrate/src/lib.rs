#![doc(issue_tracker_base_url = "https://github.com/factordynamics/narrate/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! # narrate
//!
//! Descriptive signals and natural-language summaries for short time series.
//!
//! narrate is an umbrella crate that re-exports the narrate sub-crates and
//! provides the [`Narrator`], which turns a series of labelled values into a
//! sentence or three about its latest point.
//!
//! ## Quick Start
//!
//! ```
//! use narrate::{Narrator, Result};
//!
//! # fn main() -> Result<()> {
//! let series = narrate::sample::monthly_series();
//! let narrative = Narrator::default().describe(&series)?;
//!
//! assert!(narrative.text.starts_with("The latest data point in December"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Crate Organization
//!
//! - [`traits`] - Core types and the [`Signal`] trait
//! - [`signals`] - Recent-change and trend-keeper signals, and the [`SignalSet`]
//! - [`narrator`] - Narrative text built from a [`SignalSnapshot`]
//! - [`sample`] - A twelve-month sample dataset
//!
//! ## Architecture
//!
//! 1. **Signals** turn a series into immutable result records
//! 2. **The signal set** computes every signal against the same series
//! 3. **The narrator** reads the snapshot and the raw series to build text

/// Version information for the narrate crate.
///
/// This constant contains the current version of narrate as specified in Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod narrator;
pub mod sample;

// ============================================================================
// Core Traits
// ============================================================================

/// Core types and trait definitions for narrate.
///
/// This module re-exports the foundational types:
///
/// - [`Series`] and [`Observation`] - the ordered input data
/// - [`Signal`] - a descriptive statistic computed over a series
/// - [`NarrateError`] - the error type
pub mod traits {
    pub use narrate_traits::*;
}

// Re-export core types at top level for convenience
pub use narrate_traits::{NarrateError, Observation, Result, Series, Signal};

// ============================================================================
// Signal Implementations
// ============================================================================

/// Signal implementations.
///
/// ## Change Signals
///
/// - **RecentChangeSignal**: direction and size of the last step
///
/// ## Trend Signals
///
/// - **TrendKeeperSignal**: sign consistency of recent differences back to a
///   lookback point, and the latest value against that point
///
/// # Example
///
/// ```
/// use narrate::signals::TrendKeeperSignal;
/// use narrate::Signal;
///
/// let result = TrendKeeperSignal::with_lookback(2)
///     .compute(&narrate::sample::monthly_series())
///     .unwrap();
/// assert_eq!(result.lookback_label(), Some("November"));
/// ```
pub mod signals {
    pub use narrate_signals::*;
}

pub use narrate_signals::{SignalSet, SignalSetConfig, SignalSnapshot};
pub use narrator::{Narrative, Narrator};

// ============================================================================
// Prelude
// ============================================================================

/// Prelude module for convenient imports.
///
/// ```
/// use narrate::prelude::*;
/// ```
///
/// This brings into scope:
/// - Core types: [`Series`], [`Observation`], [`Signal`]
/// - The aggregator and narrator: [`SignalSet`], [`Narrator`]
/// - Error types: [`Result`], [`NarrateError`]
pub mod prelude {
    pub use crate::{Narrative, Narrator, SignalSet, SignalSetConfig, SignalSnapshot};
    pub use crate::{NarrateError, Observation, Result, Series, Signal};
}

// ============================================================================
// Tests
// ============================================================================
