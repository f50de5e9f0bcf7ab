//! Aggregation of every signal over one series.
//!
//! [`SignalSet`] owns one recent-change signal and one trend-keeper per
//! configured lookback. On each [`compute`](SignalSet::compute) it also builds
//! a max-lookback trend-keeper sized to the series, then returns an immutable
//! [`SignalSnapshot`] of every result.

use crate::{
    RecentChangeResult, RecentChangeSignal, TrendKeeperConfig, TrendKeeperResult,
    TrendKeeperSignal,
};
use narrate_traits::{NarrateError, Result, Series, Signal};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Configuration for a signal set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalSetConfig {
    /// Fixed trend-keeper lookbacks (default: 2, 3, 6, 9, 12)
    pub lookbacks: Vec<usize>,
    /// Leave out fixed lookbacks longer than the series instead of failing
    /// (default: false)
    #[serde(default)]
    pub skip_oversized: bool,
}

impl Default for SignalSetConfig {
    fn default() -> Self {
        Self {
            lookbacks: vec![2, 3, 6, 9, 12],
            skip_oversized: false,
        }
    }
}

/// Results of every signal in a [`SignalSet`], computed against one series.
///
/// The `Display` rendering is the per-signal dump: each result's summary in
/// computation order, separated by a blank line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalSnapshot {
    /// Recent-change result
    pub recent_change: RecentChangeResult,
    /// Fixed-lookback trend-keeper results, ascending by lookback
    pub trend_keepers: Vec<TrendKeeperResult>,
    /// Trend-keeper result with the lookback set to the series length
    pub trend_keeper_max: TrendKeeperResult,
}

impl SignalSnapshot {
    /// Returns the fixed-lookback trend-keeper result for `lookback`.
    ///
    /// Returns `None` if that lookback is not configured, or was skipped
    /// because it is longer than the series (see
    /// [`SignalSetConfig::skip_oversized`]).
    #[must_use]
    pub fn trend_keeper(&self, lookback: usize) -> Option<&TrendKeeperResult> {
        self.trend_keepers.iter().find(|r| r.lookback == lookback)
    }
}

impl fmt::Display for SignalSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.recent_change)?;
        for result in self.trend_keepers.iter().chain([&self.trend_keeper_max]) {
            write!(f, "\n\n{result}")?;
        }
        Ok(())
    }
}

/// A fixed collection of signals computed together.
///
/// Signals are computed in a fixed order: recent change, trend-keepers
/// ascending by lookback, then the max-lookback trend-keeper.
///
/// A configured lookback longer than a series of two or more points fails
/// with [`NarrateError::LookbackOutOfRange`], unless
/// [`SignalSetConfig::skip_oversized`] is set, in which case it is left out
/// of that series' snapshot. Series shorter than two points never fail. The
/// max-lookback trend-keeper always fits.
///
/// # Example
///
/// ```
/// use narrate_signals::{SignalSet, SignalSetConfig};
/// use narrate_traits::{Observation, Series};
///
/// let set = SignalSet::new(SignalSetConfig {
///     lookbacks: vec![3, 2],
///     ..Default::default()
/// })
/// .unwrap();
/// assert_eq!(set.lookbacks(), vec![2, 3]);
///
/// let series: Series = (0..4).map(|i| Observation::new(format!("t{i}"), f64::from(i))).collect();
/// let snapshot = set.compute(&series).unwrap();
/// assert_eq!(snapshot.trend_keeper_max.lookback, 4);
///
/// let short: Series = series.iter().take(2).cloned().collect();
/// assert!(set.compute(&short).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct SignalSet {
    recent_change: RecentChangeSignal,
    trend_keepers: Vec<TrendKeeperSignal>,
    skip_oversized: bool,
}

impl SignalSet {
    /// Create a new signal set with the given configuration.
    ///
    /// Lookbacks are sorted and deduplicated.
    ///
    /// # Errors
    ///
    /// Returns [`NarrateError::InvalidData`] if a lookback is zero.
    pub fn new(config: SignalSetConfig) -> Result<Self> {
        if config.lookbacks.contains(&0) {
            return Err(NarrateError::InvalidData(
                "trend lookbacks must be at least 1".to_string(),
            ));
        }
        Ok(Self::from_config(config))
    }

    fn from_config(config: SignalSetConfig) -> Self {
        let mut lookbacks = config.lookbacks;
        lookbacks.sort_unstable();
        lookbacks.dedup();

        Self {
            recent_change: RecentChangeSignal,
            trend_keepers: lookbacks
                .into_iter()
                .map(|lookback| TrendKeeperSignal::new(TrendKeeperConfig { lookback }))
                .collect(),
            skip_oversized: config.skip_oversized,
        }
    }

    /// Returns the fixed trend-keeper lookbacks, ascending.
    #[must_use]
    pub fn lookbacks(&self) -> Vec<usize> {
        self.trend_keepers.iter().map(|s| s.lookback()).collect()
    }

    /// Returns the names of every signal in computation order.
    ///
    /// The max-lookback trend-keeper is listed as `trend_keeper_max`.
    #[must_use]
    pub fn signal_names(&self) -> Vec<String> {
        std::iter::once(self.recent_change.name())
            .chain(self.trend_keepers.iter().map(|s| s.name()))
            .chain(std::iter::once("trend_keeper_max".to_string()))
            .collect()
    }

    /// Computes every signal against `series`.
    ///
    /// # Errors
    ///
    /// Returns [`NarrateError::LookbackOutOfRange`] if the series has two or
    /// more points and a fixed lookback is longer than it, unless the set
    /// skips oversized lookbacks.
    pub fn compute(&self, series: &Series) -> Result<SignalSnapshot> {
        let len = series.len();
        let trend_keeper_max = TrendKeeperSignal::with_lookback(len);

        let recent_change = self.recent_change.compute(series)?;

        let mut trend_keepers = Vec::with_capacity(self.trend_keepers.len());
        for signal in &self.trend_keepers {
            if self.skip_oversized && len >= 2 && signal.lookback() > len {
                debug!(
                    signal = %signal.name(),
                    len,
                    "skipping trend keeper longer than series"
                );
                continue;
            }
            trend_keepers.push(signal.compute(series)?);
        }

        let trend_keeper_max = trend_keeper_max.compute(series)?;

        debug!(
            len,
            computed = trend_keepers.len() + 2,
            "computed signal set"
        );

        Ok(SignalSnapshot {
            recent_change,
            trend_keepers,
            trend_keeper_max,
        })
    }
}

impl Default for SignalSet {
    fn default() -> Self {
        Self::from_config(SignalSetConfig::default())
    }
}
