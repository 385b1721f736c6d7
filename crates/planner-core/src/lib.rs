//! Core domain logic for the schedule planner.
//!
//! This crate contains the fundamental types and logic for:
//! - Validation: deciding whether a new or edited event may be saved
//! - Totals: per-category time aggregation for a day or week
//! - Schedule: create/edit/delete/read operations over an [`EventStore`]

pub mod category;
pub mod event;
pub mod schedule;
pub mod store;
pub mod totals;
pub mod types;
pub mod validation;

pub use category::{Category, CategoryRegistry, FALLBACK_COLOR};
pub use event::{Event, EventDraft, EventPatch};
pub use schedule::{
    DaySchedule, ScheduleError, WeekSchedule, add_event, day_schedule, edit_event, remove_event,
    week_schedule, week_start,
};
pub use store::EventStore;
pub use totals::{CategoryTotals, aggregate_totals, format_duration};
pub use types::{ClockTime, EventId, TypeError};
pub use validation::{
    MIN_DURATION_MINUTES, ValidatedEvent, ValidationError, intervals_overlap, validate,
};
