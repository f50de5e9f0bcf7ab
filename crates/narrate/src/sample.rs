//! Sample dataset.
//!
//! Twelve monthly values, January through December, used as the CLI default
//! input and in tests.

use narrate_traits::{Observation, Series};

const MONTHLY: [(&str, f64); 12] = [
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
];

/// Returns the twelve-month sample series.
#[must_use]
pub fn monthly_series() -> Series {
    MONTHLY
        .iter()
        .map(|&(label, value)| Observation::new(label, value))
        .collect()
}
