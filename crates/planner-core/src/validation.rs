//! Save-time rules for new and edited events.
//!
//! Both the create and the update path go through [`validate`]. Checks run in
//! a fixed order so a malformed draft is rejected for its most fundamental
//! problem:
//!
//! 1. non-empty main title
//! 2. start strictly before end
//! 3. at least [`MIN_DURATION_MINUTES`] long
//! 4. no overlap with another event on the same day
//!
//! Intervals are half-open, so `[09:00, 10:00)` and `[10:00, 11:00)` do not
//! overlap.

use serde::Serialize;
use thiserror::Error;

use crate::event::{Event, EventDraft};
use crate::types::{ClockTime, EventId};

/// Shortest event that may be saved.
pub const MIN_DURATION_MINUTES: u16 = 30;

/// Why a draft was refused.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("main title cannot be empty")]
    EmptyTitle,

    /// End is not after start. Events cannot cross midnight.
    #[error("end time {end} must be after start time {start} (events cannot span midnight)")]
    InvertedInterval { start: ClockTime, end: ClockTime },

    #[error(
        "event lasts {minutes} minutes; the minimum is {min} minutes",
        min = MIN_DURATION_MINUTES
    )]
    TooShort { minutes: u16 },

    /// The draft collides with an existing event on the same day.
    #[error("overlaps \"{title}\" ({start}-{end}, id {conflicting})")]
    Overlap {
        conflicting: EventId,
        title: String,
        start: ClockTime,
        end: ClockTime,
    },
}

/// A draft that passed every rule in [`validate`].
///
/// Only this module can construct one, so store writes that take a
/// `ValidatedEvent` cannot bypass validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidatedEvent(EventDraft);

impl ValidatedEvent {
    pub const fn draft(&self) -> &EventDraft {
        &self.0
    }

    pub fn into_draft(self) -> EventDraft {
        self.0
    }
}

/// Half-open interval overlap: `[a_start, a_end)` and `[b_start, b_end)`.
pub fn intervals_overlap(
    a_start: ClockTime,
    a_end: ClockTime,
    b_start: ClockTime,
    b_end: ClockTime,
) -> bool {
    a_start < b_end && a_end > b_start
}

/// Decides whether `candidate` may be saved on a day holding `same_day`.
///
/// `exclude` is the id of the event being edited; it is skipped during the
/// overlap scan so an event never conflicts with its own previous interval.
/// When several events overlap, the one starting earliest (then lowest id) is
/// reported, which keeps the result independent of input order.
pub fn validate(
    candidate: &EventDraft,
    same_day: &[Event],
    exclude: Option<&EventId>,
) -> Result<ValidatedEvent, ValidationError> {
    if candidate.main_title.trim().is_empty() {
        return Err(ValidationError::EmptyTitle);
    }

    let (start, end) = (candidate.start, candidate.end);
    if start >= end {
        return Err(ValidationError::InvertedInterval { start, end });
    }

    let minutes = end.minutes() - start.minutes();
    if minutes < MIN_DURATION_MINUTES {
        return Err(ValidationError::TooShort { minutes });
    }

    let conflict = same_day
        .iter()
        .filter(|other| exclude != Some(&other.id))
        .filter(|other| intervals_overlap(start, end, other.start, other.end))
        .min_by(|a, b| a.start.cmp(&b.start).then_with(|| a.id.cmp(&b.id)));

    if let Some(other) = conflict {
        tracing::debug!(conflicting = %other.id, "draft overlaps existing event");
        return Err(ValidationError::Overlap {
            conflicting: other.id.clone(),
            title: other.main_title.clone(),
            start: other.start,
            end: other.end,
        });
    }

    Ok(ValidatedEvent(candidate.clone()))
}
