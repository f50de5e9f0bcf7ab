//! Describe command implementation.

use crate::OutputFormat;
use anyhow::Result;
use narrate::{Narrative, Narrator, Series, SignalSet, SignalSetConfig};
use tracing::debug;

/// Describe the latest point of `series` and print the result.
pub(crate) fn describe_series(
    series: &Series,
    config: SignalSetConfig,
    format: OutputFormat,
    dump: bool,
) -> Result<()> {
    let narrative = build_narrative(series, config)?;
    println!("{}", render(&narrative, format, dump)?);
    Ok(())
}

pub(crate) fn build_narrative(series: &Series, config: SignalSetConfig) -> Result<Narrative> {
    let signals = SignalSet::new(config)?;
    debug!(signals = ?signals.signal_names(), len = series.len(), "describing series");

    Ok(Narrator::new(signals).describe(series)?)
}

pub(crate) fn render(narrative: &Narrative, format: OutputFormat, dump: bool) -> Result<String> {
    let out = match format {
        OutputFormat::Json => serde_json::to_string_pretty(narrative)?,
        OutputFormat::Text if dump => format!("{}\n\n{}", narrative.dump(), narrative.text),
        OutputFormat::Text => narrative.text.clone(),
    };
    Ok(out)
}
