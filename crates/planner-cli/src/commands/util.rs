//! Shared utilities for CLI commands.

use std::sync::LazyLock;

use anyhow::Context;
use chrono::{Duration, NaiveDate};
use planner_core::CategoryRegistry;
use regex::Regex;

/// Pre-compiled regex for signed day offsets ("+1", "-3").
static OFFSET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([+-])(\d+)$").expect("valid offset regex"));

/// Pre-compiled regex for relative day parsing.
static RELATIVE_DAY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)\s+(day|week)s?\s+(ago|ahead)$").expect("valid relative day regex")
});

/// Conservative bound for relative navigation (~1000 years in days).
const MAX_RELATIVE_DAYS: i64 = 1000 * 365;

/// Resolve a day argument relative to `today`.
///
/// Supports:
/// - ISO date: "2026-10-19"
/// - Named: "today", "yesterday", "tomorrow"
/// - Offset: "+1", "-3"
/// - Relative: "2 days ago", "1 week ahead"
pub fn parse_day(s: &str, today: NaiveDate) -> anyhow::Result<NaiveDate> {
    let s = s.trim();

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date);
    }

    let offset_days = match s.to_ascii_lowercase().as_str() {
        "today" => 0,
        "yesterday" => -1,
        "tomorrow" => 1,
        other => parse_offset(other)?,
    };

    today
        .checked_add_signed(Duration::days(offset_days))
        .with_context(|| format!("date out of range: {s}"))
}

fn parse_offset(s: &str) -> anyhow::Result<i64> {
    if let Some(caps) = OFFSET_RE.captures(s) {
        let n: i64 = caps[2].parse().context("failed to parse day offset")?;
        if n > MAX_RELATIVE_DAYS {
            anyhow::bail!("Day offset too large: {s}");
        }
        return Ok(if &caps[1] == "-" { -n } else { n });
    }

    let Some(caps) = RELATIVE_DAY_RE.captures(s) else {
        anyhow::bail!(
            "Invalid date: {s}. Use YYYY-MM-DD, today, yesterday, tomorrow, +N/-N, \
             or e.g. '2 days ago'"
        );
    };

    let n: i64 = caps[1]
        .parse()
        .context("failed to parse number in relative date")?;

    let (max_for_unit, days_per_unit) = match &caps[2] {
        "day" => (MAX_RELATIVE_DAYS, 1),
        "week" => (MAX_RELATIVE_DAYS / 7, 7),
        unit => anyhow::bail!("Unknown date unit: {unit}"),
    };

    if n > max_for_unit {
        anyhow::bail!("Relative date too large: {n} {}", &caps[2]);
    }

    let days = n * days_per_unit;
    Ok(if &caps[3] == "ago" { -days } else { days })
}

/// Warns when `category` is not in the registry. Such events are still
/// stored; they render with the fallback color and never count.
pub fn warn_unknown_category(registry: &CategoryRegistry, category: &str) -> bool {
    let unknown = registry.get(category).is_none();
    if unknown {
        tracing::warn!(%category, "category is not configured");
    }
    unknown
}
