//! Error types for narrate.
//!
//! Degenerate input (fewer than two observations) is never an error: signals
//! fall back to their default results. The variants here cover contract
//! violations and invalid caller input.

use thiserror::Error;

/// The main error type for narrate operations.
#[derive(Debug, Error)]
pub enum NarrateError {
    /// The series has no observations where at least one is required.
    #[error("Empty series: at least one observation is required")]
    EmptySeries,

    /// A lookback distance does not address a point inside the series.
    ///
    /// Valid lookbacks satisfy `1 <= lookback <= len`.
    #[error("Lookback {lookback} out of range for series of length {len}")]
    LookbackOutOfRange {
        /// The requested lookback distance.
        lookback: usize,
        /// The length of the series it was applied to.
        len: usize,
    },

    /// Error due to invalid or malformed input data.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Error when a signal is not found.
    #[error("Signal not found: {0}")]
    SignalNotFound(String),
}

/// A specialized Result type for narrate operations.
///
/// This is a convenience type that uses [`NarrateError`] as the error type.
pub type Result<T> = std::result::Result<T, NarrateError>;
