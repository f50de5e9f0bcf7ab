//! Common types used throughout narrate.
//!
//! This module defines the ordered time series that every signal is computed
//! over and the observations it is made of.

use serde::{Deserialize, Serialize};

/// A single labelled point of a time series.
///
/// Labels are free-form (e.g. month names) and carry no uniqueness
/// constraint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Label identifying the point, e.g. `"December"`.
    pub label: String,
    /// Observed value.
    pub value: f64,
}

impl Observation {
    /// Creates a new observation.
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// An ordered sequence of observations.
///
/// Index 0 is the earliest point and the last index is the most recent one
/// (`t_n`). A series may be empty.
///
/// # Example
///
/// ```
/// use narrate_traits::{Observation, Series};
///
/// let series = Series::new(vec![
///     Observation::new("January", 2.50),
///     Observation::new("February", 2.74),
/// ]);
///
/// assert_eq!(series.len(), 2);
/// assert_eq!(series.last().map(|o| o.label.as_str()), Some("February"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Series {
    observations: Vec<Observation>,
}

impl Series {
    /// Creates a new series from observations in chronological order.
    pub const fn new(observations: Vec<Observation>) -> Self {
        Self { observations }
    }

    /// Returns the number of observations.
    pub const fn len(&self) -> usize {
        self.observations.len()
    }

    /// Returns whether the series has no observations.
    pub const fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Returns the most recent observation.
    pub fn last(&self) -> Option<&Observation> {
        self.observations.last()
    }

    /// Returns the observation `k` steps from the end, counting the most
    /// recent observation as `k = 1`.
    ///
    /// Returns `None` when `k` is zero or larger than the series.
    pub fn nth_from_end(&self, k: usize) -> Option<&Observation> {
        if k == 0 {
            return None;
        }
        self.len()
            .checked_sub(k)
            .and_then(|idx| self.observations.get(idx))
    }

    /// Returns the observations as a slice.
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Returns the values in chronological order.
    pub fn values(&self) -> Vec<f64> {
        self.observations.iter().map(|o| o.value).collect()
    }

    /// Iterates over the observations in chronological order.
    pub fn iter(&self) -> std::slice::Iter<'_, Observation> {
        self.observations.iter()
    }
}

impl From<Vec<Observation>> for Series {
    fn from(observations: Vec<Observation>) -> Self {
        Self::new(observations)
    }
}

impl FromIterator<Observation> for Series {
    fn from_iter<I: IntoIterator<Item = Observation>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a Observation;
    type IntoIter = std::slice::Iter<'a, Observation>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
