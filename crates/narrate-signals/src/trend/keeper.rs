//! Trend-keeper signal based on the sign of recent first differences.

use narrate_traits::{NarrateError, Observation, Result, Series, Signal};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

/// Configuration for the trend-keeper signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendKeeperConfig {
    /// Number of points back from the end of the series (default: 2)
    pub lookback: usize,
}

impl Default for TrendKeeperConfig {
    fn default() -> Self {
        Self { lookback: 2 }
    }
}

/// Result of the trend-keeper signal.
///
/// For series shorter than two points every flag is false and
/// `lookback_point` is `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrendKeeperResult {
    /// Lookback distance this result was computed with
    pub lookback: usize,
    /// Observation `lookback` steps from the end (`series[-lookback]`)
    pub lookback_point: Option<Observation>,
    /// The latest value is strictly below the lookback value
    pub lower_than: bool,
    /// The latest value is not below the lookback value
    pub higher_than: bool,
    /// Recent differences kept their sign back to the lookback point
    pub keeps: bool,
    /// Negation of `keeps` once computed
    pub reverses: bool,
}

impl TrendKeeperResult {
    const fn empty(lookback: usize) -> Self {
        Self {
            lookback,
            lookback_point: None,
            lower_than: false,
            higher_than: false,
            keeps: false,
            reverses: false,
        }
    }

    /// Label of the lookback observation, if computed.
    #[must_use]
    pub fn lookback_label(&self) -> Option<&str> {
        self.lookback_point.as_ref().map(|o| o.label.as_str())
    }

    /// Value of the lookback observation, if computed.
    #[must_use]
    pub fn lookback_value(&self) -> Option<f64> {
        self.lookback_point.as_ref().map(|o| o.value)
    }
}

impl fmt::Display for TrendKeeperResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "TrendKeeper (lookback={}):", self.lookback)?;
        writeln!(f, "    Keeps: {}", self.keeps)?;
        writeln!(f, "    Reverses: {}", self.reverses)?;
        writeln!(f, "    Lower than lookback: {}", self.lower_than)?;
        write!(f, "    Higher than lookback: {}", self.higher_than)
    }
}

/// Trend-keeper signal.
///
/// Looks `lookback` points back from the end of the series and reports:
/// - how the latest value compares to the value at that point
/// - whether the sign of the first differences, scanned backward from the
///   one before the most recent, stayed consistent for up to `lookback`
///   steps (see [`keeps_trend`])
///
/// Valid lookbacks satisfy `1 <= lookback <= len`. Series shorter than two
/// points yield the default result whatever the lookback.
///
/// # Example
///
/// ```
/// use narrate_signals::TrendKeeperSignal;
/// use narrate_traits::{Observation, Series, Signal};
///
/// let series = Series::new(vec![
///     Observation::new("October", 2.04),
///     Observation::new("November", 2.20),
///     Observation::new("December", 2.11),
/// ]);
///
/// let result = TrendKeeperSignal::with_lookback(2).compute(&series).unwrap();
/// assert_eq!(result.lookback_label(), Some("November"));
/// assert!(result.lower_than);
/// ```
#[derive(Debug, Clone)]
pub struct TrendKeeperSignal {
    config: TrendKeeperConfig,
}

impl TrendKeeperSignal {
    /// Create a new trend-keeper signal with the given configuration.
    #[must_use]
    pub const fn new(config: TrendKeeperConfig) -> Self {
        Self { config }
    }

    /// Create a new trend-keeper signal looking `lookback` points back.
    #[must_use]
    pub const fn with_lookback(lookback: usize) -> Self {
        Self::new(TrendKeeperConfig { lookback })
    }
}

impl Default for TrendKeeperSignal {
    fn default() -> Self {
        Self::new(TrendKeeperConfig::default())
    }
}

impl Signal for TrendKeeperSignal {
    type Output = TrendKeeperResult;

    fn name(&self) -> String {
        format!("trend_keeper_{}", self.config.lookback)
    }

    fn compute(&self, series: &Series) -> Result<TrendKeeperResult> {
        let lookback = self.config.lookback;
        let len = series.len();

        let latest = match series.last() {
            Some(latest) if len >= 2 => latest.value,
            _ => {
                trace!(lookback, len, "series too short for trend keeper");
                return Ok(TrendKeeperResult::empty(lookback));
            }
        };

        let point = series
            .nth_from_end(lookback)
            .ok_or(NarrateError::LookbackOutOfRange { lookback, len })?;

        let lower_than = point.value - latest > 0.0;
        let keeps = keeps_trend(&series.values(), lookback);

        trace!(
            lookback,
            label = %point.label,
            lower_than,
            keeps,
            "computed trend keeper"
        );

        Ok(TrendKeeperResult {
            lookback,
            lookback_point: Some(point.clone()),
            lower_than,
            higher_than: !lower_than,
            keeps,
            reverses: !keeps,
        })
    }

    fn lookback(&self) -> usize {
        self.config.lookback
    }
}

/// Scans first differences backward and reports whether they kept a
/// consistent sign.
///
/// The differences are walked from newest to oldest, skipping the most
/// recent one. Each is compared against the sign of the *first* raw value of
/// the series (not against a difference): a strictly positive product keeps
/// the trend, anything else (opposite sign or a zero) ends the scan with
/// `false`. The scan also stops once more than `lookback` differences have
/// kept the trend.
///
/// Returns `false` when there is nothing to scan (fewer than three values).
#[must_use]
pub fn keeps_trend(values: &[f64], lookback: usize) -> bool {
    let Some(&reference) = values.first() else {
        return false;
    };

    let mut deltas: Vec<f64> = values.windows(2).map(|w| w[1] - w[0]).collect();
    deltas.reverse();

    let mut keeps = false;
    let mut count = 0;
    for &delta in deltas.iter().skip(1) {
        if delta * reference > 0.0 {
            keeps = true;
        } else {
            keeps = false;
            break;
        }

        count += 1;
        if count > lookback {
            break;
        }
    }

    keeps
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn series(values: &[f64]) -> Series {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| Observation::new(format!("t{i}"), v))
            .collect()
    }

    fn monthly() -> Series {
        [
            ("January", 2.50),
            ("February", 2.74),
            ("March", 2.38),
            ("April", 2.20),
            ("May", 1.87),
            ("June", 1.63),
            ("July", 1.73),
            ("August", 1.94),
            ("September", 2.23),
            ("October", 2.04),
            ("November", 2.20),
            ("December", 2.11),
        ]
        .into_iter()
        .map(|(label, value)| Observation::new(label, value))
        .collect()
    }

    #[test]
    fn test_default_config() {
        let config = TrendKeeperConfig::default();
        assert_eq!(config.lookback, 2);
    }

    #[test]
    fn test_name_includes_lookback() {
        assert_eq!(TrendKeeperSignal::with_lookback(9).name(), "trend_keeper_9");
        assert_eq!(TrendKeeperSignal::default().lookback(), 2);
    }

    #[test]
    fn test_short_series_yields_default_for_any_lookback() {
        for lookback in [0, 1, 2, 12, 100] {
            let signal = TrendKeeperSignal::with_lookback(lookback);
            for values in [&[][..], &[2.5][..]] {
                let result = signal.compute(&series(values)).unwrap();
                assert_eq!(result, TrendKeeperResult::empty(lookback));
                assert!(result.lookback_label().is_none());
            }
        }
    }

    #[test]
    fn test_lookback_longer_than_series_fails() {
        let err = TrendKeeperSignal::with_lookback(4)
            .compute(&series(&[1.0, 2.0, 3.0]))
            .unwrap_err();
        assert!(matches!(
            err,
            NarrateError::LookbackOutOfRange {
                lookback: 4,
                len: 3
            }
        ));
    }

    #[test]
    fn test_zero_lookback_fails() {
        let err = TrendKeeperSignal::with_lookback(0)
            .compute(&series(&[1.0, 2.0]))
            .unwrap_err();
        assert!(matches!(err, NarrateError::LookbackOutOfRange { lookback: 0, .. }));
    }

    #[test]
    fn test_monthly_lookback_two() {
        let result = TrendKeeperSignal::with_lookback(2).compute(&monthly()).unwrap();
        assert_eq!(result.lookback_label(), Some("November"));
        assert_relative_eq!(result.lookback_value().unwrap(), 2.20);
        assert!(result.lower_than);
        assert!(!result.higher_than);
        // November went up, October went down: the scan stops there.
        assert!(!result.keeps);
        assert!(result.reverses);
    }

    #[test]
    fn test_monthly_lookback_points() {
        let cases = [
            (3, "October", false),
            (6, "July", false),
            (9, "April", true),
            (12, "January", true),
        ];
        for (lookback, label, lower_than) in cases {
            let result = TrendKeeperSignal::with_lookback(lookback)
                .compute(&monthly())
                .unwrap();
            assert_eq!(result.lookback_label(), Some(label));
            assert_eq!(result.lower_than, lower_than, "lookback {lookback}");
            assert_ne!(result.lower_than, result.higher_than);
            assert_ne!(result.keeps, result.reverses);
        }
    }

    #[test]
    fn test_lookback_one_points_at_latest() {
        let result = TrendKeeperSignal::with_lookback(1)
            .compute(&series(&[1.0, 2.0]))
            .unwrap();
        assert_eq!(result.lookback_label(), Some("t1"));
        assert!(!result.lower_than);
        assert!(result.higher_than);
    }

    #[test]
    fn test_two_points_reverse() {
        // A single difference leaves nothing to scan.
        let result = TrendKeeperSignal::with_lookback(2)
            .compute(&series(&[1.0, 2.0]))
            .unwrap();
        assert!(!result.keeps);
        assert!(result.reverses);
    }

    #[test]
    fn test_rising_series_with_positive_start_keeps() {
        let result = TrendKeeperSignal::with_lookback(3)
            .compute(&series(&[1.0, 2.0, 3.0, 4.0, 5.0]))
            .unwrap();
        assert!(result.keeps);
        assert!(!result.reverses);
    }

    #[test]
    fn test_sign_reference_is_first_raw_value() {
        // Same rising shape, but the first value is negative: every
        // positive difference now counts as a sign change.
        let values = [-1.0, 0.0, 1.0, 2.0, 3.0];
        assert!(!keeps_trend(&values, 3));

        // Falling differences against a negative first value keep.
        let values = [-1.0, -2.0, -3.0, -4.0];
        assert!(keeps_trend(&values, 3));

        // A zero first value never keeps.
        let values = [0.0, 1.0, 2.0, 3.0];
        assert!(!keeps_trend(&values, 3));
    }

    #[test]
    fn test_zero_difference_breaks_the_trend() {
        assert!(!keeps_trend(&[1.0, 2.0, 2.0, 3.0], 3));
    }

    #[test]
    fn test_scan_stops_after_lookback() {
        // Reversed differences: [+1, +1, +1, +1, -1]
        let values = [5.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        assert!(keeps_trend(&values, 2));
        assert!(!keeps_trend(&values, 3));
        assert!(!keeps_trend(&values, 5));
    }

    #[test]
    fn test_keeps_trend_degenerate_inputs() {
        assert!(!keeps_trend(&[], 2));
        assert!(!keeps_trend(&[1.0], 2));
        assert!(!keeps_trend(&[1.0, 2.0], 2));
    }

    #[test]
    fn test_compute_is_idempotent() {
        let signal = TrendKeeperSignal::with_lookback(6);
        let series = monthly();
        assert_eq!(
            signal.compute(&series).unwrap(),
            signal.compute(&series).unwrap()
        );
    }

    #[test]
    fn test_display() {
        let result = TrendKeeperSignal::with_lookback(2).compute(&monthly()).unwrap();
        let text = result.to_string();
        assert!(text.starts_with("TrendKeeper (lookback=2):"));
        assert!(text.contains("Keeps: false"));
        assert!(text.contains("Reverses: true"));
        assert!(text.contains("Lower than lookback: true"));
        assert!(text.contains("Higher than lookback: false"));
    }
}
