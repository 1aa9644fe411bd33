//! Duration conversions
//!
//! HLTB reports completion times in seconds; callers want hours.

/// Convert seconds to hours rounded to two decimals.
///
/// Returns `None` for zero, negative or NaN input, and for times that round
/// to `0.0`, so "unknown" is never confused with "instant".
pub fn seconds_to_hours(seconds: f64) -> Option<f64> {
    if seconds.is_nan() || seconds <= 0.0 {
        return None;
    }
    let hours = (seconds / 3600.0 * 100.0).round() / 100.0;
    (hours > 0.0).then_some(hours)
}

/// Render hours as `"{H}h"` or `"{H}h {M}m"`.
///
/// Returns `None` for zero, negative or NaN input.
pub fn format_duration(hours: f64) -> Option<String> {
    if hours.is_nan() || hours <= 0.0 {
        return None;
    }

    let mut whole = hours.floor() as u64;
    let mut minutes = ((hours - hours.floor()) * 60.0).round() as u64;
    if minutes == 60 {
        whole += 1;
        minutes = 0;
    }

    if minutes == 0 {
        Some(format!("{}h", whole))
    } else {
        Some(format!("{}h {}m", whole, minutes))
    }
}
