//! Schedule operations over an [`EventStore`].
//!
//! Creating and editing share one path: load the target day, run
//! [`validate`], then write. Reads return the day's events together with
//! their category totals.

use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;
use thiserror::Error;

use crate::category::CategoryRegistry;
use crate::event::{Event, EventDraft, EventPatch};
use crate::store::EventStore;
use crate::totals::{CategoryTotals, aggregate_totals};
use crate::types::EventId;
use crate::validation::{ValidationError, validate};

/// Days shown in a week view.
pub const DAYS_PER_WEEK: usize = 7;

/// Errors from schedule operations.
#[derive(Debug, Error)]
pub enum ScheduleError<E> {
    /// The draft was refused; the user can correct it and retry.
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("event not found: {0}")]
    NotFound(EventId),

    /// The week around this date falls outside the calendar range.
    #[error("no complete week around {0}")]
    OutOfRange(NaiveDate),

    #[error("storage error")]
    Store(#[source] E),
}

/// A day's events with their totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaySchedule {
    pub date: NaiveDate,
    pub events: Vec<Event>,
    pub totals: CategoryTotals,
}

/// Monday-first week of day schedules, with totals across the whole week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekSchedule {
    pub start: NaiveDate,
    pub days: Vec<DaySchedule>,
    pub totals: CategoryTotals,
}

/// Validates `draft` against `date` and persists it.
pub fn add_event<S: EventStore>(
    store: &mut S,
    date: NaiveDate,
    draft: &EventDraft,
) -> Result<Event, ScheduleError<S::Error>> {
    let same_day = store.list_by_date(date).map_err(ScheduleError::Store)?;
    let validated = validate(draft, &same_day, None).inspect_err(|err| {
        tracing::warn!(%date, error = %err, "rejected new event");
    })?;

    let event = store.create(date, validated).map_err(ScheduleError::Store)?;
    tracing::info!(id = %event.id, %date, "created event");
    Ok(event)
}

/// Applies `patch` to event `id`, re-validating against its target day.
pub fn edit_event<S: EventStore>(
    store: &mut S,
    id: &EventId,
    patch: &EventPatch,
) -> Result<Event, ScheduleError<S::Error>> {
    let existing = store
        .get(id)
        .map_err(ScheduleError::Store)?
        .ok_or_else(|| ScheduleError::NotFound(id.clone()))?;

    let (date, draft) = patch.apply(&existing);
    let same_day = store.list_by_date(date).map_err(ScheduleError::Store)?;
    let validated = validate(&draft, &same_day, Some(id)).inspect_err(|err| {
        tracing::warn!(%id, %date, error = %err, "rejected event edit");
    })?;

    let updated = store
        .update(id, date, validated)
        .map_err(ScheduleError::Store)?;
    if !updated {
        return Err(ScheduleError::NotFound(id.clone()));
    }
    tracing::info!(%id, %date, "updated event");

    Ok(Event::from_draft(id.clone(), date, draft))
}

/// Deletes event `id` without validation, returning what was removed.
pub fn remove_event<S: EventStore>(
    store: &mut S,
    id: &EventId,
) -> Result<Event, ScheduleError<S::Error>> {
    let existing = store
        .get(id)
        .map_err(ScheduleError::Store)?
        .ok_or_else(|| ScheduleError::NotFound(id.clone()))?;

    if !store.delete(id).map_err(ScheduleError::Store)? {
        return Err(ScheduleError::NotFound(id.clone()));
    }
    tracing::info!(%id, date = %existing.date, "deleted event");
    Ok(existing)
}

pub fn day_schedule<S: EventStore>(
    store: &S,
    date: NaiveDate,
    registry: &CategoryRegistry,
) -> Result<DaySchedule, ScheduleError<S::Error>> {
    let events = store.list_by_date(date).map_err(ScheduleError::Store)?;
    let totals = aggregate_totals(&events, registry);
    Ok(DaySchedule {
        date,
        events,
        totals,
    })
}

/// Monday of the week containing `date`, or `None` before the first
/// representable Monday.
pub fn week_start(date: NaiveDate) -> Option<NaiveDate> {
    date.checked_sub_days(Days::new(u64::from(date.weekday().num_days_from_monday())))
}

/// Loads the Monday-first week containing `date`.
pub fn week_schedule<S: EventStore>(
    store: &S,
    date: NaiveDate,
    registry: &CategoryRegistry,
) -> Result<WeekSchedule, ScheduleError<S::Error>> {
    let (start, end) = week_start(date)
        .and_then(|start| Some((start, start.checked_add_days(Days::new(7))?)))
        .ok_or(ScheduleError::OutOfRange(date))?;
    let events = store
        .list_in_range(start, end)
        .map_err(ScheduleError::Store)?;

    let days = start
        .iter_days()
        .take(DAYS_PER_WEEK)
        .map(|day| {
            let day_events: Vec<Event> =
                events.iter().filter(|e| e.date == day).cloned().collect();
            let totals = aggregate_totals(&day_events, registry);
            DaySchedule {
                date: day,
                events: day_events,
                totals,
            }
        })
        .collect();
    let totals = aggregate_totals(&events, registry);

    Ok(WeekSchedule {
        start,
        days,
        totals,
    })
}
