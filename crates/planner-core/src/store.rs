//! Persistence contract for events.

use chrono::NaiveDate;

use crate::event::Event;
use crate::types::EventId;
use crate::validation::ValidatedEvent;

/// Durable, day-indexed event storage.
///
/// The store owns identity: `create` assigns the id. Writes take a
/// [`ValidatedEvent`], so only drafts that passed validation can be saved.
pub trait EventStore {
    /// Storage failure, opaque to the schedule logic.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Events on `date`, ordered by start time then id.
    fn list_by_date(&self, date: NaiveDate) -> Result<Vec<Event>, Self::Error>;

    /// Events with `start <= date < end`, ordered by date, start time, then id.
    fn list_in_range(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<Event>, Self::Error>;

    fn get(&self, id: &EventId) -> Result<Option<Event>, Self::Error>;

    /// Persists a new event on `date` and returns it with its assigned id.
    fn create(&mut self, date: NaiveDate, event: ValidatedEvent) -> Result<Event, Self::Error>;

    /// Replaces the fields of `id`. Returns `false` when no such event exists.
    fn update(
        &mut self,
        id: &EventId,
        date: NaiveDate,
        event: ValidatedEvent,
    ) -> Result<bool, Self::Error>;

    /// Removes `id`. Returns `false` when no such event exists.
    fn delete(&mut self, id: &EventId) -> Result<bool, Self::Error>;
}
