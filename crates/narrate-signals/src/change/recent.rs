//! Recent-change signal based on the last two observations.

use narrate_traits::{Result, Series, Signal};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

/// Result of the recent-change signal.
///
/// `increase` and `decrease` are mutually exclusive. Both are false when the
/// last two values are equal or when the series has fewer than two points,
/// in which case `delta` and `previous_value` stay at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RecentChangeResult {
    /// The latest value is above the previous one
    pub increase: bool,
    /// The latest value is below the previous one
    pub decrease: bool,
    /// Absolute difference between the last two values (always >= 0)
    pub delta: f64,
    /// Value at `t_(n-1)`
    pub previous_value: f64,
}

impl RecentChangeResult {
    /// Whether the last two values are equal (or nothing was computed).
    #[must_use]
    pub const fn is_unchanged(&self) -> bool {
        !self.increase && !self.decrease
    }
}

impl fmt::Display for RecentChangeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "RecentChange:")?;
        writeln!(f, "    Increase: {}", self.increase)?;
        writeln!(f, "    Decrease: {}", self.decrease)?;
        write!(f, "    Delta: {:.6}", self.delta)
    }
}

/// Recent-change signal.
///
/// Characterizes the single most recent step of a series: `t_n` against
/// `t_(n-1)`. Never fails; series shorter than two points yield the default
/// result.
///
/// # Example
///
/// ```
/// use narrate_signals::RecentChangeSignal;
/// use narrate_traits::{Observation, Series, Signal};
///
/// let series = Series::new(vec![
///     Observation::new("November", 2.20),
///     Observation::new("December", 2.11),
/// ]);
///
/// let result = RecentChangeSignal.compute(&series).unwrap();
/// assert!(result.decrease);
/// assert_eq!(result.previous_value, 2.20);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RecentChangeSignal;

impl Signal for RecentChangeSignal {
    type Output = RecentChangeResult;

    fn name(&self) -> String {
        "recent_change".to_string()
    }

    fn compute(&self, series: &Series) -> Result<RecentChangeResult> {
        let (Some(t_n1), Some(t_n)) = (series.nth_from_end(2), series.nth_from_end(1)) else {
            trace!(len = series.len(), "series too short for recent change");
            return Ok(RecentChangeResult::default());
        };

        let result = RecentChangeResult {
            increase: t_n.value > t_n1.value,
            decrease: t_n.value < t_n1.value,
            delta: (t_n.value - t_n1.value).abs(),
            previous_value: t_n1.value,
        };

        trace!(
            increase = result.increase,
            decrease = result.decrease,
            delta = result.delta,
            "computed recent change"
        );

        Ok(result)
    }
}
