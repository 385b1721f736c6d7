//! Delete command with interactive confirmation.

use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};

use planner_core::{EventId, EventStore, remove_event};
use planner_db::Database;

use crate::DeleteArgs;

use super::day::{format_date, format_events};

/// Reads a yes/no answer; anything but `y`/`yes` declines.
fn confirm<R: BufRead>(reader: &mut R) -> Result<bool> {
    let mut answer = String::new();
    reader
        .read_line(&mut answer)
        .context("failed to read confirmation")?;
    let answer = answer.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}

/// Runs the delete command.
///
/// Shows the event and asks for confirmation on `reader` unless `--yes` was given.
pub fn run<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    db: &mut Database,
    args: &DeleteArgs,
) -> Result<()> {
    let id = EventId::new(args.id.trim())?;
    let Some(event) = db.get(&id)? else {
        bail!("event not found: {id}");
    };

    writeln!(writer, "{}", format_date(event.date))?;
    write!(writer, "{}", format_events(std::slice::from_ref(&event)))?;

    if !args.yes {
        write!(writer, "Delete this event? [y/N] ")?;
        writer.flush()?;
        if !confirm(reader)? {
            writeln!(writer, "Cancelled.")?;
            return Ok(());
        }
    }

    remove_event(db, &id).context("cannot delete event")?;
    writeln!(writer, "Deleted.")?;
    Ok(())
}
