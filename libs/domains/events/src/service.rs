use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::instrument;

use crate::clock::Clock;
use crate::counter::SharedCounter;
use crate::error::{EventError, EventResult};
use crate::models::{Event, EventStatus};
use crate::notifier::Notifier;
use crate::repository::EventRepository;

/// Service layer for Event business logic
pub struct EventService<R: EventRepository> {
    repository: Arc<R>,
    clock: Arc<dyn Clock>,
    notifier: Arc<dyn Notifier>,
    counter: Arc<SharedCounter>,
}

impl<R: EventRepository> Clone for EventService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
            notifier: Arc::clone(&self.notifier),
            counter: Arc::clone(&self.counter),
        }
    }
}

impl<R: EventRepository> EventService<R> {
    pub fn new(
        repository: R,
        clock: Arc<dyn Clock>,
        notifier: Arc<dyn Notifier>,
        counter: Arc<SharedCounter>,
    ) -> Self {
        Self {
            repository: Arc::new(repository),
            clock,
            notifier,
            counter,
        }
    }

    /// Persist a new `Scheduled` event and count it.
    ///
    /// The counter moves only after the store accepted the event.
    #[instrument(skip(self))]
    pub async fn create_event(
        &self,
        name: String,
        scheduled_time: DateTime<Utc>,
    ) -> EventResult<Event> {
        let saved = self.repository.save(Event::new(name, scheduled_time)).await?;
        let total = self.counter.increment_and_get();

        tracing::debug!(event_id = ?saved.id, total, "Event created");
        Ok(saved)
    }

    /// Scheduled events whose time is strictly before the clock's now
    #[instrument(skip(self))]
    pub async fn get_due_events(&self) -> EventResult<Vec<Event>> {
        let now = self.clock.now();
        self.repository
            .find_by_status_and_scheduled_time_before(EventStatus::Scheduled, now)
            .await
    }

    /// Mark an event completed, then notify the user.
    ///
    /// Notification is best-effort: a failure is logged and the completed
    /// status stays persisted.
    #[instrument(skip(self))]
    pub async fn complete_event(&self, id: i64) -> EventResult<()> {
        let mut event = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(EventError::NotFound(id))?;

        let message = format!("Event completed: {}", event.name);

        event.complete();
        self.repository.save(event).await?;

        if let Err(e) = self.notifier.notify_user(&message).await {
            tracing::warn!(event_id = id, error = %e, "Failed to notify user");
        }

        Ok(())
    }

    /// Number of events created through this service's counter
    pub fn created_count(&self) -> u64 {
        self.counter.get()
    }
}
