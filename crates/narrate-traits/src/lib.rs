#![doc(issue_tracker_base_url = "https://github.com/factordynamics/narrate/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core types and trait definitions for narrate.
//!
//! This crate provides the foundational abstractions shared by every narrate
//! crate: the ordered [`Series`] of [`Observation`]s that signals are computed
//! over, the [`Signal`] trait, and the [`NarrateError`] type.

/// The version of the narrate-traits crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Module declarations
pub mod error;
pub mod signal;
pub mod types;

// Re-exports
pub use error::{NarrateError, Result};
pub use signal::Signal;
pub use types::{Observation, Series};
