//! Week command: the Monday-first week containing a day.

use std::fmt::Write as _;
use std::io::Write;

use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;

use planner_core::{CategoryRegistry, CategoryTotals, WeekSchedule, week_schedule};
use planner_db::Database;

use super::day::{JsonDay, format_date, format_events, format_totals};

/// Formats the human-readable week view.
pub fn format_week(week: &WeekSchedule) -> String {
    let mut output = String::new();
    writeln!(output, "WEEK OF {}", format_date(week.start)).unwrap();

    for day in &week.days {
        writeln!(output).unwrap();
        writeln!(output, "{}", format_date(day.date)).unwrap();
        output.push_str(&format_events(&day.events));
        writeln!(output, "{}", format_totals("  Totals", &day.totals)).unwrap();
    }

    writeln!(output).unwrap();
    writeln!(output, "{}", format_totals("Week totals", &week.totals)).unwrap();
    output
}

#[derive(Debug, Serialize)]
pub struct JsonWeek<'a> {
    pub start: NaiveDate,
    pub days: Vec<JsonDay<'a>>,
    pub totals: &'a CategoryTotals,
    pub total_minutes: u32,
}

impl<'a> JsonWeek<'a> {
    pub fn new(week: &'a WeekSchedule, registry: &'a CategoryRegistry) -> Self {
        Self {
            start: week.start,
            days: week
                .days
                .iter()
                .map(|day| JsonDay::new(day, registry))
                .collect(),
            totals: &week.totals,
            total_minutes: week.totals.total_minutes(),
        }
    }
}

/// Runs the week command.
pub fn run<W: Write>(
    writer: &mut W,
    db: &Database,
    date: NaiveDate,
    json: bool,
    registry: &CategoryRegistry,
) -> Result<()> {
    let week = week_schedule(db, date, registry)?;

    if json {
        let output = serde_json::to_string_pretty(&JsonWeek::new(&week, registry))?;
        writeln!(writer, "{output}")?;
    } else {
        write!(writer, "{}", format_week(&week))?;
    }

    Ok(())
}
