//! Scheduled time blocks and their pre-validation drafts.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{ClockTime, EventId};

/// Field values of an event before validation and persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDraft {
    /// Category name. Not checked against the registry.
    pub category: String,
    pub main_title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_title: Option<String>,
    pub start: ClockTime,
    pub end: ClockTime,
}

/// A scheduled time block on a specific day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub date: NaiveDate,
    pub category: String,
    pub main_title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_title: Option<String>,
    pub start: ClockTime,
    pub end: ClockTime,
}

impl Event {
    pub fn from_draft(id: EventId, date: NaiveDate, draft: EventDraft) -> Self {
        Self {
            id,
            date,
            category: draft.category,
            main_title: draft.main_title,
            sub_title: draft.sub_title,
            start: draft.start,
            end: draft.end,
        }
    }

    /// Length of the block in minutes; zero for a malformed stored interval.
    pub fn duration_minutes(&self) -> u32 {
        u32::from(self.end.minutes().saturating_sub(self.start.minutes()))
    }

    /// The editable fields of this event.
    pub fn to_draft(&self) -> EventDraft {
        EventDraft {
            category: self.category.clone(),
            main_title: self.main_title.clone(),
            sub_title: self.sub_title.clone(),
            start: self.start,
            end: self.end,
        }
    }
}

/// Partial replacement of an existing event's fields.
///
/// `None` keeps the current value. An empty `sub_title` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventPatch {
    pub date: Option<NaiveDate>,
    pub category: Option<String>,
    pub main_title: Option<String>,
    pub sub_title: Option<String>,
    pub start: Option<ClockTime>,
    pub end: Option<ClockTime>,
}

impl EventPatch {
    /// Merges the patch onto `event`, returning the target day and the draft to validate.
    pub fn apply(&self, event: &Event) -> (NaiveDate, EventDraft) {
        let mut draft = event.to_draft();
        if let Some(category) = &self.category {
            draft.category.clone_from(category);
        }
        if let Some(title) = &self.main_title {
            draft.main_title.clone_from(title);
        }
        if let Some(sub) = &self.sub_title {
            draft.sub_title = if sub.trim().is_empty() {
                None
            } else {
                Some(sub.clone())
            };
        }
        if let Some(start) = self.start {
            draft.start = start;
        }
        if let Some(end) = self.end {
            draft.end = end;
        }
        (self.date.unwrap_or(event.date), draft)
    }

    pub const fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.category.is_none()
            && self.main_title.is_none()
            && self.sub_title.is_none()
            && self.start.is_none()
            && self.end.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_event() -> Event {
        Event {
            id: EventId::new("evt-1").unwrap(),
            date: NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
            category: "class".to_string(),
            main_title: "Math".to_string(),
            sub_title: Some("Lecture 05".to_string()),
            start: "09:00".parse().unwrap(),
            end: "10:30".parse().unwrap(),
        }
    }

    #[test]
    fn duration_is_end_minus_start() {
        assert_eq!(sample_event().duration_minutes(), 90);
    }

    #[test]
    fn event_json_uses_clock_strings() {
        let json = serde_json::to_value(sample_event()).unwrap();
        assert_eq!(json["start"], "09:00");
        assert_eq!(json["end"], "10:30");
        assert_eq!(json["date"], "2026-10-19");
    }

    #[test]
    fn empty_patch_keeps_event() {
        let event = sample_event();
        let patch = EventPatch::default();
        assert!(patch.is_empty());

        let (date, draft) = patch.apply(&event);
        assert_eq!(date, event.date);
        assert_eq!(draft, event.to_draft());
    }

    #[test]
    fn patch_replaces_given_fields_only() {
        let event = sample_event();
        let patch = EventPatch {
            main_title: Some("Physics".to_string()),
            end: Some("11:00".parse().unwrap()),
            ..EventPatch::default()
        };

        let (_, draft) = patch.apply(&event);
        assert_eq!(draft.main_title, "Physics");
        assert_eq!(draft.end.to_string(), "11:00");
        assert_eq!(draft.start, event.start);
        assert_eq!(draft.sub_title.as_deref(), Some("Lecture 05"));
    }

    #[test]
    fn blank_sub_title_clears_it() {
        let patch = EventPatch {
            sub_title: Some(String::new()),
            ..EventPatch::default()
        };
        let (_, draft) = patch.apply(&sample_event());
        assert_eq!(draft.sub_title, None);
    }

    #[test]
    fn patch_can_move_event_to_another_day() {
        let target = NaiveDate::from_ymd_opt(2026, 10, 20).unwrap();
        let patch = EventPatch {
            date: Some(target),
            ..EventPatch::default()
        };
        let (date, _) = patch.apply(&sample_event());
        assert_eq!(date, target);
    }
}
