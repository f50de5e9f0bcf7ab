//! Natural-language description of a series' latest point.
//!
//! The [`Narrator`] computes a [`SignalSnapshot`] and reads it, together with
//! the raw series, to produce up to three sentences:
//!
//! 1. the latest label and value
//! 2. the size and direction of the last step (series of two or more points)
//! 3. whether the latest point keeps or reverses the trend from the lookback-2
//!    point
//!
//! Values are rendered with six decimal places.

use narrate_signals::{SignalSet, SignalSnapshot};
use narrate_traits::{NarrateError, Observation, Result, Series};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Lookback of the trend-keeper the narrative reports on.
pub const NARRATIVE_LOOKBACK: usize = 2;

/// A rendered description together with the signals it was built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Narrative {
    /// The human-readable description
    pub text: String,
    /// Every signal result computed for the description
    pub snapshot: SignalSnapshot,
}

impl Narrative {
    /// Renders the per-signal dump: each signal's summary separated by a
    /// blank line.
    #[must_use]
    pub fn dump(&self) -> String {
        self.snapshot.to_string()
    }
}

/// Builds narratives from series.
///
/// The default narrator computes the default [`SignalSet`], whose fixed
/// lookbacks go up to 12: series of two to eleven points fail with
/// [`NarrateError::LookbackOutOfRange`]. Use a set with shorter lookbacks,
/// or one that skips oversized lookbacks, for shorter series.
///
/// # Example
///
/// ```
/// use narrate::{Narrator, Observation, Series, SignalSet, SignalSetConfig};
///
/// let series = Series::new(vec![
///     Observation::new("November", 2.20),
///     Observation::new("December", 2.11),
/// ]);
/// assert!(Narrator::default().describe(&series).is_err());
///
/// let signals = SignalSet::new(SignalSetConfig {
///     lookbacks: vec![2],
///     ..Default::default()
/// })
/// .unwrap();
/// let narrative = Narrator::new(signals).describe(&series).unwrap();
/// assert_eq!(
///     narrative.text,
///     "The latest data point in December was 2.110000. \
///      This is a 0.090000 decrease from the previous value of 2.200000. \
///      This reverses the trend from November, which recorded 2.200000."
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Narrator {
    signals: SignalSet,
}

impl Narrator {
    /// Create a narrator computing the given signal set.
    ///
    /// The trend sentence is only produced when the set includes
    /// [`NARRATIVE_LOOKBACK`].
    #[must_use]
    pub const fn new(signals: SignalSet) -> Self {
        Self { signals }
    }

    /// Returns the signal set this narrator computes.
    #[must_use]
    pub const fn signals(&self) -> &SignalSet {
        &self.signals
    }

    /// Describes the latest point of `series`.
    ///
    /// The per-signal dump is emitted as a `debug` event.
    ///
    /// # Errors
    ///
    /// Returns [`NarrateError::EmptySeries`] if `series` has no observations,
    /// and propagates [`NarrateError::LookbackOutOfRange`] from the signal set.
    pub fn describe(&self, series: &Series) -> Result<Narrative> {
        let latest = series.last().ok_or(NarrateError::EmptySeries)?;
        let snapshot = self.signals.compute(series)?;

        debug!("signal summary:\n{snapshot}");

        let text = render(latest, series.len(), &snapshot);
        Ok(Narrative { text, snapshot })
    }
}

/// Describes the latest point of `series` with the default signal set.
///
/// # Errors
///
/// Returns [`NarrateError::EmptySeries`] if `series` has no observations,
/// and [`NarrateError::LookbackOutOfRange`] if it has two to eleven.
pub fn describe(series: &Series) -> Result<Narrative> {
    Narrator::default().describe(series)
}

fn render(latest: &Observation, len: usize, snapshot: &SignalSnapshot) -> String {
    let mut text = format!(
        "The latest data point in {} was {:.6}.",
        latest.label, latest.value
    );

    // A single point has no previous value to compare with, so the change
    // sentence is left out rather than reporting a zero change. Equal last
    // values read "unchanged" instead of "a 0.000000 decrease".
    if len >= 2 {
        let recent = &snapshot.recent_change;
        if recent.is_unchanged() {
            text.push_str(&format!(
                " This is unchanged from the previous value of {:.6}.",
                recent.previous_value
            ));
        } else {
            let direction = if recent.increase { "increase" } else { "decrease" };
            text.push_str(&format!(
                " This is a {:.6} {} from the previous value of {:.6}.",
                recent.delta, direction, recent.previous_value
            ));
        }
    }

    if let Some(trend) = snapshot.trend_keeper(NARRATIVE_LOOKBACK)
        && let Some(point) = &trend.lookback_point
    {
        let verb = if trend.keeps { "keeps" } else { "reverses" };
        text.push_str(&format!(
            " This {} the trend from {}, which recorded {:.6}.",
            verb, point.label, point.value
        ));
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::monthly_series;
    use narrate_signals::SignalSetConfig;

    fn lenient() -> Narrator {
        let signals = SignalSet::new(SignalSetConfig {
            skip_oversized: true,
            ..Default::default()
        })
        .unwrap();
        Narrator::new(signals)
    }

    fn series(points: &[(&str, f64)]) -> Series {
        points
            .iter()
            .map(|&(label, value)| Observation::new(label, value))
            .collect()
    }

    #[test]
    fn test_empty_series_rejected() {
        let err = Narrator::default().describe(&Series::default()).unwrap_err();
        assert!(matches!(err, NarrateError::EmptySeries));
    }

    #[test]
    fn test_single_point() {
        let narrative = describe(&series(&[("January", 2.5)])).unwrap();
        assert_eq!(narrative.text, "The latest data point in January was 2.500000.");
    }

    #[test]
    fn test_monthly_sample() {
        let narrative = describe(&monthly_series()).unwrap();
        assert_eq!(
            narrative.text,
            "The latest data point in December was 2.110000. \
             This is a 0.090000 decrease from the previous value of 2.200000. \
             This reverses the trend from November, which recorded 2.200000."
        );
    }

    #[test]
    fn test_short_series_fails_with_default_lookbacks() {
        let err = describe(&series(&[("Q1", 1.0), ("Q2", 2.0), ("Q3", 3.5)])).unwrap_err();
        assert!(matches!(
            err,
            NarrateError::LookbackOutOfRange {
                lookback: 6,
                len: 3
            }
        ));
    }

    #[test]
    fn test_increase_that_keeps_the_trend() {
        let narrative = lenient().describe(&series(&[
            ("Q1", 1.0),
            ("Q2", 2.0),
            ("Q3", 3.5),
            ("Q4", 4.0),
        ]))
        .unwrap();
        assert_eq!(
            narrative.text,
            "The latest data point in Q4 was 4.000000. \
             This is a 0.500000 increase from the previous value of 3.500000. \
             This keeps the trend from Q3, which recorded 3.500000."
        );
    }

    #[test]
    fn test_unchanged_value() {
        let narrative = lenient()
            .describe(&series(&[("a", 1.0), ("b", 1.0)]))
            .unwrap();
        assert_eq!(
            narrative.text,
            "The latest data point in b was 1.000000. \
             This is unchanged from the previous value of 1.000000. \
             This reverses the trend from a, which recorded 1.000000."
        );
        assert!(!narrative.text.contains("decrease"));
    }

    #[test]
    fn test_trend_sentence_needs_lookback_two() {
        let signals = SignalSet::new(SignalSetConfig {
            lookbacks: vec![3, 6],
            ..Default::default()
        })
        .unwrap();
        let narrative = Narrator::new(signals).describe(&monthly_series()).unwrap();
        assert!(!narrative.text.contains("trend"));
        assert!(narrative.snapshot.trend_keeper(3).is_some());
    }

    #[test]
    fn test_dump_matches_snapshot() {
        let narrative = describe(&monthly_series()).unwrap();
        assert_eq!(narrative.dump(), narrative.snapshot.to_string());
        assert!(narrative.dump().starts_with("RecentChange:"));
    }

    #[test]
    fn test_narrative_serializes() {
        let narrative = describe(&monthly_series()).unwrap();
        let json = serde_json::to_value(&narrative).unwrap();
        assert_eq!(json["text"], narrative.text.as_str());
        assert_eq!(json["snapshot"]["recent_change"]["decrease"], true);
    }
}
