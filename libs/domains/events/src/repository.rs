use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

use crate::error::{EventError, EventResult};
use crate::models::{Event, EventStatus};

/// Repository trait for Event persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Insert when `event.id` is `None`, otherwise overwrite the stored record.
    ///
    /// Returns the stored event with its id populated. Overwriting an id the
    /// store has never assigned fails with [`EventError::NotFound`].
    async fn save(&self, event: Event) -> EventResult<Event>;

    /// Get an event by ID
    async fn find_by_id(&self, id: i64) -> EventResult<Option<Event>>;

    /// Events in `status` whose scheduled time is strictly before `before`,
    /// ordered by ascending id
    async fn find_by_status_and_scheduled_time_before(
        &self,
        status: EventStatus,
        before: DateTime<Utc>,
    ) -> EventResult<Vec<Event>>;
}

/// In-memory implementation of EventRepository (for development/testing)
#[derive(Debug, Clone)]
pub struct InMemoryEventRepository {
    events: Arc<RwLock<BTreeMap<i64, Event>>>,
    next_id: Arc<AtomicI64>,
}

impl InMemoryEventRepository {
    pub fn new() -> Self {
        Self {
            events: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }
}

impl Default for InMemoryEventRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn save(&self, mut event: Event) -> EventResult<Event> {
        let mut events = self.events.write().await;

        match event.id {
            Some(id) => {
                let slot = events.get_mut(&id).ok_or(EventError::NotFound(id))?;
                *slot = event.clone();
                tracing::info!(event_id = id, status = %event.status, "Updated event");
            }
            None => {
                let id = self.next_id.fetch_add(1, Ordering::SeqCst);
                event.id = Some(id);
                events.insert(id, event.clone());
                tracing::info!(event_id = id, "Created event");
            }
        }

        Ok(event)
    }

    async fn find_by_id(&self, id: i64) -> EventResult<Option<Event>> {
        let events = self.events.read().await;
        Ok(events.get(&id).cloned())
    }

    async fn find_by_status_and_scheduled_time_before(
        &self,
        status: EventStatus,
        before: DateTime<Utc>,
    ) -> EventResult<Vec<Event>> {
        let events = self.events.read().await;

        // BTreeMap iteration is already ascending by id
        Ok(events
            .values()
            .filter(|e| e.status == status && e.scheduled_time < before)
            .cloned()
            .collect())
    }
}
