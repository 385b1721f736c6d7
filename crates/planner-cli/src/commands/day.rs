//! Day command: one day's events and category totals.
//!
//! Supports human-readable and JSON output.

use std::fmt::Write as _;
use std::io::Write;

use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;

use planner_core::{CategoryRegistry, CategoryTotals, DaySchedule, Event, day_schedule};
use planner_db::Database;

// ========== Text Output ==========

/// Day header, e.g. "Mon, Oct 19 2026".
pub fn format_date(date: NaiveDate) -> String {
    date.format("%a, %b %-d %Y").to_string()
}

/// Single-line totals summary.
pub fn format_totals(label: &str, totals: &CategoryTotals) -> String {
    if totals.is_empty() {
        format!("{label}: (no counted categories)")
    } else {
        format!("{label}: {}", totals.render())
    }
}

fn category_label(event: &Event) -> String {
    format!("[{}]", event.category)
}

/// Formats the event lines of a day, with category labels aligned.
pub fn format_events(events: &[Event]) -> String {
    let mut output = String::new();
    if events.is_empty() {
        writeln!(output, "  No events.").unwrap();
        return output;
    }

    let width = events
        .iter()
        .map(|e| category_label(e).chars().count())
        .max()
        .unwrap_or(0);

    for event in events {
        let label = category_label(event);
        let sub = event
            .sub_title
            .as_deref()
            .map(|s| format!(" ({s})"))
            .unwrap_or_default();
        writeln!(
            output,
            "  {}-{}  {label:<width$}  {}{sub}  {}",
            event.start, event.end, event.main_title, event.id
        )
        .unwrap();
    }
    output
}

/// Formats the human-readable day view.
pub fn format_day(schedule: &DaySchedule) -> String {
    let mut output = String::new();
    writeln!(output, "{}", format_date(schedule.date)).unwrap();
    output.push_str(&format_events(&schedule.events));
    writeln!(output, "{}", format_totals("Totals", &schedule.totals)).unwrap();
    output
}

// ========== JSON Output ==========

/// An event with its display color and duration.
#[derive(Debug, Serialize)]
pub struct JsonEvent<'a> {
    #[serde(flatten)]
    pub event: &'a Event,
    pub color: &'a str,
    pub duration_minutes: u32,
}

#[derive(Debug, Serialize)]
pub struct JsonDay<'a> {
    pub date: NaiveDate,
    pub events: Vec<JsonEvent<'a>>,
    pub totals: &'a CategoryTotals,
    pub total_minutes: u32,
}

impl<'a> JsonDay<'a> {
    pub fn new(schedule: &'a DaySchedule, registry: &'a CategoryRegistry) -> Self {
        let events = schedule
            .events
            .iter()
            .map(|event| JsonEvent {
                event,
                color: registry.color_for(&event.category),
                duration_minutes: event.duration_minutes(),
            })
            .collect();
        Self {
            date: schedule.date,
            events,
            totals: &schedule.totals,
            total_minutes: schedule.totals.total_minutes(),
        }
    }
}

// ========== Public Interface ==========

/// Runs the day command.
pub fn run<W: Write>(
    writer: &mut W,
    db: &Database,
    date: NaiveDate,
    json: bool,
    registry: &CategoryRegistry,
) -> Result<()> {
    let schedule = day_schedule(db, date, registry)?;

    if json {
        let output = serde_json::to_string_pretty(&JsonDay::new(&schedule, registry))?;
        writeln!(writer, "{output}")?;
    } else {
        write!(writer, "{}", format_day(&schedule))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use insta::assert_snapshot;
    use planner_core::EventStore;
    use planner_core::{EventDraft, EventId, aggregate_totals, validate};

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn event(
        id: &str,
        category: &str,
        title: &str,
        sub: Option<&str>,
        start: &str,
        end: &str,
    ) -> Event {
        Event {
            id: EventId::new(id).unwrap(),
            date: monday(),
            category: category.to_string(),
            main_title: title.to_string(),
            sub_title: sub.map(String::from),
            start: start.parse().unwrap(),
            end: end.parse().unwrap(),
        }
    }

    #[test]
    fn test_format_day_with_events() {
        let registry = CategoryRegistry::default();
        let events = vec![
            event("evt-a", "class", "Math", Some("Lecture 05"), "09:00", "10:30"),
            event("evt-b", "gym", "Legs", None, "13:00", "14:00"),
        ];
        let schedule = DaySchedule {
            date: monday(),
            totals: aggregate_totals(&events, &registry),
            events,
        };

        assert_snapshot!(format_day(&schedule), @r"
Mon, Oct 19 2026
  09:00-10:30  [class]  Math (Lecture 05)  evt-a
  13:00-14:00  [gym]    Legs  evt-b
Totals: job: 0min / class: 1h 30min / study: 0min
");
    }

    #[test]
    fn test_format_empty_day() {
        let registry = CategoryRegistry::default();
        let schedule = DaySchedule {
            date: monday(),
            events: Vec::new(),
            totals: aggregate_totals(&[], &registry),
        };

        assert_eq!(
            format_day(&schedule),
            "Mon, Oct 19 2026\n  No events.\nTotals: job: 0min / class: 0min / study: 0min\n"
        );
    }

    #[test]
    fn test_json_day_includes_colors_and_totals() {
        let registry = CategoryRegistry::default();
        let events = vec![
            event("evt-a", "class", "Math", None, "09:00", "10:30"),
            event("evt-x", "karaoke", "Night out", None, "20:00", "22:00"),
        ];
        let schedule = DaySchedule {
            date: monday(),
            totals: aggregate_totals(&events, &registry),
            events,
        };

        let json = serde_json::to_value(JsonDay::new(&schedule, &registry)).unwrap();
        assert_eq!(json["date"], "2026-10-19");
        assert_eq!(json["events"][0]["id"], "evt-a");
        assert_eq!(json["events"][0]["color"], "#33CFFF");
        assert_eq!(json["events"][0]["duration_minutes"], 90);
        assert_eq!(json["events"][1]["color"], "#FFFFFF");
        assert_eq!(json["totals"]["class"], 90);
        assert_eq!(json["totals"]["study"], 0);
        assert!(json["totals"].get("karaoke").is_none());
        assert_eq!(json["total_minutes"], 90);
    }

    #[test]
    fn test_run_reads_from_database() {
        let registry = CategoryRegistry::default();
        let mut db = Database::open_in_memory().unwrap();
        let draft = EventDraft {
            category: "study".to_string(),
            main_title: "Flashcards".to_string(),
            sub_title: None,
            start: "20:00".parse().unwrap(),
            end: "21:00".parse().unwrap(),
        };
        db.create(monday(), validate(&draft, &[], None).unwrap()).unwrap();

        let mut output = Vec::new();
        run(&mut output, &db, monday(), false, &registry).unwrap();
        let output = String::from_utf8(output).unwrap();

        assert!(output.starts_with("Mon, Oct 19 2026\n  20:00-21:00  [study]  Flashcards  "));
        assert!(output.ends_with("Totals: job: 0min / class: 0min / study: 1h\n"));
    }
}
