//! Edit command for changing an existing event.

use std::io::Write;

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;

use planner_core::{CategoryRegistry, EventId, EventPatch, edit_event};
use planner_db::Database;

use crate::EditArgs;

use super::day::format_events;
use super::util::{parse_day, warn_unknown_category};

/// Builds the patch described by the command-line flags.
fn patch_from_args(args: &EditArgs, today: NaiveDate) -> Result<EventPatch> {
    let date = args
        .date
        .as_deref()
        .map(|d| parse_day(d, today))
        .transpose()?;

    Ok(EventPatch {
        date,
        category: args.category.clone(),
        main_title: args.title.clone(),
        sub_title: args.sub.clone(),
        start: args.start,
        end: args.end,
    })
}

pub fn run<W: Write>(
    writer: &mut W,
    db: &mut Database,
    args: &EditArgs,
    today: NaiveDate,
    registry: &CategoryRegistry,
) -> Result<()> {
    let id = EventId::new(args.id.trim())?;
    let patch = patch_from_args(args, today)?;
    if patch.is_empty() {
        bail!(
            "nothing to change: pass at least one of --date, --category, --title, --sub, \
             --start, --end"
        );
    }
    if let Some(category) = &patch.category {
        warn_unknown_category(registry, category);
    }

    let event = edit_event(db, &id, &patch).context("cannot update event")?;
    writeln!(writer, "Updated event on {}", event.date)?;
    write!(writer, "{}", format_events(std::slice::from_ref(&event)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use planner_core::{EventDraft, EventStore, validate};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn seed(db: &mut Database, title: &str, start: &str, end: &str) -> EventId {
        let draft = EventDraft {
            category: "class".to_string(),
            main_title: title.to_string(),
            sub_title: Some("Room 101".to_string()),
            start: start.parse().unwrap(),
            end: end.parse().unwrap(),
        };
        db.create(today(), validate(&draft, &[], None).unwrap())
            .unwrap()
            .id
    }

    fn args(id: &EventId) -> EditArgs {
        EditArgs {
            id: id.to_string(),
            date: None,
            category: None,
            title: None,
            sub: None,
            start: None,
            end: None,
        }
    }

    #[test]
    fn edit_renames_event_in_place() {
        let mut db = Database::open_in_memory().unwrap();
        let id = seed(&mut db, "Math", "09:00", "10:00");
        let registry = CategoryRegistry::default();
        let mut output = Vec::new();

        let args = EditArgs {
            title: Some("Statistics".to_string()),
            sub: Some(String::new()),
            ..args(&id)
        };
        run(&mut output, &mut db, &args, today(), &registry).unwrap();

        let stored = db.get(&id).unwrap().unwrap();
        assert_eq!(stored.main_title, "Statistics");
        assert_eq!(stored.sub_title, None);

        let output = String::from_utf8(output).unwrap();
        assert_eq!(
            output,
            format!("Updated event on 2026-10-19\n  09:00-10:00  [class]  Statistics  {id}\n")
        );
    }

    #[test]
    fn edit_rejects_empty_patch() {
        let mut db = Database::open_in_memory().unwrap();
        let id = seed(&mut db, "Math", "09:00", "10:00");
        let registry = CategoryRegistry::default();
        let mut output = Vec::new();

        let err = run(&mut output, &mut db, &args(&id), today(), &registry).unwrap_err();
        assert!(err.to_string().contains("nothing to change"));
    }

    #[test]
    fn edit_rejects_overlap_and_keeps_original() {
        let mut db = Database::open_in_memory().unwrap();
        let first = seed(&mut db, "First", "09:00", "10:00");
        seed(&mut db, "Second", "10:00", "11:00");
        let registry = CategoryRegistry::default();
        let mut output = Vec::new();

        let args = EditArgs {
            end: Some("10:30".parse().unwrap()),
            ..args(&first)
        };
        let err = run(&mut output, &mut db, &args, today(), &registry).unwrap_err();
        assert_eq!(err.to_string(), "cannot update event");
        assert_eq!(db.get(&first).unwrap().unwrap().end.to_string(), "10:00");
    }

    #[test]
    fn edit_missing_event_fails() {
        let mut db = Database::open_in_memory().unwrap();
        let missing = EventId::new("missing").unwrap();
        let registry = CategoryRegistry::default();
        let mut output = Vec::new();

        let args = EditArgs {
            title: Some("X".to_string()),
            ..args(&missing)
        };
        let err = run(&mut output, &mut db, &args, today(), &registry).unwrap_err();
        assert!(format!("{err:#}").contains("event not found: missing"));
    }

    #[test]
    fn edit_moves_event_with_relative_date() {
        let mut db = Database::open_in_memory().unwrap();
        let id = seed(&mut db, "Math", "09:00", "10:00");
        let registry = CategoryRegistry::default();
        let mut output = Vec::new();

        let args = EditArgs {
            date: Some("+1".to_string()),
            ..args(&id)
        };
        run(&mut output, &mut db, &args, today(), &registry).unwrap();

        let moved = db.get(&id).unwrap().unwrap();
        assert_eq!(moved.date, today().succ_opt().unwrap());
    }

    #[test]
    fn edit_accepts_unconfigured_category() {
        let mut db = Database::open_in_memory().unwrap();
        let id = seed(&mut db, "Math", "09:00", "10:00");
        let registry = CategoryRegistry::default();
        let mut output = Vec::new();

        let args = EditArgs {
            category: Some("chores".to_string()),
            ..args(&id)
        };
        run(&mut output, &mut db, &args, today(), &registry).unwrap();

        assert_eq!(db.get(&id).unwrap().unwrap().category, "chores");
    }
}
