//! Signal listing command implementation.

use anyhow::Result;
use narrate::NarrateError;
use narrate::signals::SignalInfo;
use narrate::signals::registry::{available_categories, get_signal_info, signals_by_category};

/// List available signals, optionally filtered by category.
pub(crate) fn list_signals(category: Option<&str>, detailed: bool) {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Available Signals                         ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    for cat in available_categories() {
        if let Some(filter) = category
            && !cat.name().contains(&filter.to_lowercase())
        {
            continue;
        }

        println!("{}: {}", cat.name(), cat.description());
        println!("{}", "-".repeat(60));

        for info in signals_by_category(&cat) {
            if detailed {
                println!("  {}", detail_line(&info));
            } else {
                println!("  {}", info.name);
            }
        }
        println!();
    }

    if !detailed {
        println!("Use --detailed for signal descriptions.\n");
    }
}

/// Show a single signal by name.
pub(crate) fn show_signal(name: &str) -> Result<()> {
    let info = lookup_signal(name)?;
    println!("{}: {}", info.category.name(), detail_line(&info));
    Ok(())
}

/// Resolve a signal name, including lookback-suffixed names such as
/// `trend_keeper_6`.
pub(crate) fn lookup_signal(name: &str) -> Result<SignalInfo, NarrateError> {
    get_signal_info(name).ok_or_else(|| NarrateError::SignalNotFound(name.to_string()))
}

fn detail_line(info: &SignalInfo) -> String {
    let lookbacks = if info.default_lookbacks.is_empty() {
        String::new()
    } else {
        let joined: Vec<String> = info.default_lookbacks.iter().map(ToString::to_string).collect();
        format!(" (lookbacks: {})", joined.join(", "))
    };
    format!("{:18} - {}{}", info.name, info.description, lookbacks)
}
