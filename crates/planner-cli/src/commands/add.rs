//! Add command for scheduling a new event.

use std::io::Write;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use planner_core::{CategoryRegistry, EventDraft, add_event};
use planner_db::Database;

use crate::AddArgs;

use super::util::{parse_day, warn_unknown_category};

/// Runs the add command, printing the new event's ID to stdout.
pub fn run<W: Write>(
    writer: &mut W,
    db: &mut Database,
    args: &AddArgs,
    today: NaiveDate,
    registry: &CategoryRegistry,
) -> Result<()> {
    let date = parse_day(&args.date, today)?;
    warn_unknown_category(registry, &args.category);

    let draft = EventDraft {
        category: args.category.clone(),
        main_title: args.title.clone(),
        sub_title: args.sub.clone().filter(|s| !s.trim().is_empty()),
        start: args.start,
        end: args.end,
    };

    let event = add_event(db, date, &draft).context("cannot save event")?;
    writeln!(writer, "{}", event.id)?;
    Ok(())
}
