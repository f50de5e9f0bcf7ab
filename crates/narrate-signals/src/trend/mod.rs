//! Trend signals comparing the latest point against a lookback point.
//!
//! The trend-keeper signal is parametrized by a lookback distance. The same
//! type serves fixed lookbacks (2, 3, 6, ...) and the dynamic max-lookback
//! instance sized to the full series.

mod keeper;

pub use keeper::{TrendKeeperConfig, TrendKeeperResult, TrendKeeperSignal, keeps_trend};
