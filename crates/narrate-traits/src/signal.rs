//! Signal trait for computing descriptive statistics over a series.
//!
//! A signal turns an ordered [`Series`] into an immutable result record. It
//! carries no state between calls: computing the same signal twice over the
//! same series yields identical results.

use crate::{Result, Series};
use std::fmt::Display;

/// A descriptive signal computed over a time series.
///
/// Implementations should be thread-safe (`Send + Sync`) and pure: every
/// call to [`compute`](Signal::compute) starts from scratch.
///
/// # Example
///
/// ```
/// use narrate_traits::{Observation, Result, Series, Signal};
///
/// struct LastValue;
///
/// impl Signal for LastValue {
///     type Output = f64;
///
///     fn name(&self) -> String {
///         "last_value".to_string()
///     }
///
///     fn compute(&self, series: &Series) -> Result<f64> {
///         Ok(series.last().map_or(0.0, |o| o.value))
///     }
/// }
///
/// let series = Series::new(vec![Observation::new("Jan", 2.5)]);
/// assert_eq!(LastValue.compute(&series).unwrap(), 2.5);
/// ```
pub trait Signal: Send + Sync {
    /// The result record produced by this signal.
    ///
    /// Its `Display` rendering is the signal's textual summary.
    type Output: Display;

    /// Returns the name of this signal.
    ///
    /// The name is used for identification in logging and summaries, e.g.
    /// `"trend_keeper_3"`.
    fn name(&self) -> String;

    /// Computes the signal over the given series.
    ///
    /// # Errors
    ///
    /// Returns an error if the signal's parameters do not fit the series
    /// (for example a lookback longer than the series).
    fn compute(&self, series: &Series) -> Result<Self::Output>;

    /// Returns how many points back this signal looks.
    ///
    /// Signals that only inspect the most recent step return 1.
    fn lookback(&self) -> usize {
        1
    }
}
