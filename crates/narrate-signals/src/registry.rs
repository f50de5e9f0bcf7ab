//! Signal registry for discovering and categorizing available signals.
//!
//! This module provides metadata and discovery functionality for the signal
//! kinds in narrate-signals.

use serde::{Deserialize, Serialize};

/// Signal category classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignalCategory {
    /// Single-step change signals
    Change,
    /// Trend continuation signals
    Trend,
}

impl SignalCategory {
    /// Get a human-readable description of the category.
    #[must_use]
    pub const fn description(&self) -> &str {
        match self {
            Self::Change => "Direction and size of the most recent step",
            Self::Trend => "Whether the latest point continues the trend to a lookback point",
        }
    }

    /// Get the category name used for filtering.
    #[must_use]
    pub const fn name(&self) -> &str {
        match self {
            Self::Change => "change",
            Self::Trend => "trend",
        }
    }
}

/// Metadata about a signal kind.
#[derive(Debug, Clone, Serialize)]
pub struct SignalInfo {
    /// Unique identifier for the signal kind
    pub name: &'static str,

    /// Category classification
    pub category: SignalCategory,

    /// Human-readable description
    pub description: &'static str,

    /// Lookbacks computed by a default signal set (empty if not parametrized)
    pub default_lookbacks: &'static [usize],
}

/// Get information about all available signal kinds.
#[must_use]
pub fn available_signals() -> Vec<SignalInfo> {
    vec![
        SignalInfo {
            name: "recent_change",
            category: SignalCategory::Change,
            description: "Latest value against the previous one: direction, delta and previous value",
            default_lookbacks: &[],
        },
        SignalInfo {
            name: "trend_keeper",
            category: SignalCategory::Trend,
            description: "Sign consistency of recent differences and comparison with a lookback point",
            default_lookbacks: &[2, 3, 6, 9, 12],
        },
        SignalInfo {
            name: "trend_keeper_max",
            category: SignalCategory::Trend,
            description: "Trend keeper with the lookback set to the full series length",
            default_lookbacks: &[],
        },
    ]
}

/// Get all signals in a specific category.
#[must_use]
pub fn signals_by_category(category: &SignalCategory) -> Vec<SignalInfo> {
    available_signals()
        .into_iter()
        .filter(|info| &info.category == category)
        .collect()
}

/// Get information about a specific signal by name.
///
/// Lookback-suffixed names such as `trend_keeper_6` resolve to their kind.
#[must_use]
pub fn get_signal_info(name: &str) -> Option<SignalInfo> {
    let kind = match name.strip_prefix("trend_keeper_") {
        Some(suffix) if suffix.parse::<usize>().is_ok() => "trend_keeper",
        _ => name,
    };
    available_signals()
        .into_iter()
        .find(|info| info.name == kind)
}

/// Get all signal categories with signals.
#[must_use]
pub fn available_categories() -> Vec<SignalCategory> {
    let mut categories: Vec<_> = available_signals()
        .into_iter()
        .map(|info| info.category)
        .collect();
    categories.sort_by_key(|c| c.name().to_string());
    categories.dedup();
    categories
}
