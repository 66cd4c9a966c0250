//! Numeric and display formatting helpers.
//!
//! `round_dp` is the shared rounding primitive the engine stores values with;
//! the rest are pure presentation helpers for rendering collaborators: USD
//! amounts, signed percentages, abbreviated large numbers and relative
//! timestamps. None of them hold state.

use chrono::{DateTime, Utc};

/// Round `value` to `decimals` decimal places.
///
/// Infinite and NaN inputs pass through unchanged.
pub fn round_dp(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Abbreviate a large USD amount: `$2.92T`, `$61.50B`, `$28.74M`, `$58.39K`.
///
/// Amounts under a thousand fall back to a plain two-decimal dollar figure.
pub fn format_abbrev(amount: f64) -> String {
    if amount >= 1_000_000_000_000.0 {
        format!("${:.2}T", amount / 1_000_000_000_000.0)
    } else if amount >= 1_000_000_000.0 {
        format!("${:.2}B", amount / 1_000_000_000.0)
    } else if amount >= 1_000_000.0 {
        format!("${:.2}M", amount / 1_000_000.0)
    } else if amount >= 1_000.0 {
        format!("${:.2}K", amount / 1_000.0)
    } else {
        format!("${:.2}", amount)
    }
}

/// Format a percentage with an explicit plus sign on gains: `+0.69%`, `-1.35%`.
pub fn format_percent(percent: f64) -> String {
    let sign = if percent > 0.0 { "+" } else { "" };
    format!("{}{:.2}%", sign, percent)
}

/// Format a USD amount with thousands grouping: `$5,123.41`, `-$0.43`.
pub fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    let total_cents = (amount.abs() * 100.0).round() as u64;
    let whole = total_cents / 100;
    let cents = total_cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}${}.{:02}", if negative { "-" } else { "" }, grouped, cents)
}

/// Human-readable age of a timestamp relative to `now`.
///
/// Buckets: under a minute — `Just now`; under an hour — `Nm ago`; under a
/// day — `Nh ago`; older — a short date like `Mar 5`.
pub fn format_relative(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(at);
    if elapsed.num_seconds() < 60 {
        "Just now".to_string()
    } else if elapsed.num_minutes() < 60 {
        format!("{}m ago", elapsed.num_minutes())
    } else if elapsed.num_hours() < 24 {
        format!("{}h ago", elapsed.num_hours())
    } else {
        at.format("%b %-d").to_string()
    }
}
