//! Sample command implementation.

use anyhow::Result;
use narrate::sample::monthly_series;

/// Print the monthly sample series as pretty JSON.
///
/// The output is accepted by `narrate describe --input`.
pub(crate) fn print_sample() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&monthly_series())?);
    Ok(())
}
