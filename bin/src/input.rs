//! Series loading utilities for the narrate CLI.

use narrate::{NarrateError, Observation, Series, sample};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load the series to describe.
///
/// Uses, in order of preference: the JSON file at `input`, the
/// `LABEL=VALUE` points, or the monthly sample when neither is given.
pub(crate) fn load_series(points: &[String], input: Option<&Path>) -> anyhow::Result<Series> {
    if let Some(path) = input {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
        let series = parse_series_json(&content)?;
        debug!(path = %path.display(), len = series.len(), "loaded series from file");
        return Ok(series);
    }

    if points.is_empty() {
        debug!("no input given, using monthly sample");
        return Ok(sample::monthly_series());
    }

    let series = points
        .iter()
        .map(|p| parse_point(p))
        .collect::<Result<Series, _>>()?;
    Ok(series)
}

/// Parse a JSON array of `{"label": ..., "value": ...}` objects.
pub(crate) fn parse_series_json(content: &str) -> Result<Series, NarrateError> {
    serde_json::from_str(content)
        .map_err(|e| NarrateError::InvalidData(format!("Invalid series JSON: {}", e)))
}

/// Parse a point in `LABEL=VALUE` format.
///
/// The value is split at the last `=`, so labels may contain `=`.
pub(crate) fn parse_point(point: &str) -> Result<Observation, NarrateError> {
    let (label, value) = point.rsplit_once('=').ok_or_else(|| {
        NarrateError::InvalidData(format!("Expected LABEL=VALUE, got '{}'", point))
    })?;

    let label = label.trim();
    if label.is_empty() {
        return Err(NarrateError::InvalidData(format!(
            "Missing label in '{}'",
            point
        )));
    }

    let value: f64 = value
        .trim()
        .parse()
        .map_err(|e| NarrateError::InvalidData(format!("Invalid value in '{}': {}", point, e)))?;
    if !value.is_finite() {
        return Err(NarrateError::InvalidData(format!(
            "Value must be finite in '{}'",
            point
        )));
    }

    Ok(Observation::new(label, value))
}
