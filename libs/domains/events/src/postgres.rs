use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Database, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::{
    entity,
    error::{EventError, EventResult},
    models::{Event, EventStatus},
    repository::EventRepository,
};

/// Postgres-backed store over the `events` table.
///
/// The table and the `event_status` enum type are expected to exist:
///
/// ```sql
/// CREATE TYPE event_status AS ENUM ('SCHEDULED', 'COMPLETED', 'CANCELLED');
/// CREATE TABLE events (
///     id             BIGSERIAL PRIMARY KEY,
///     name           TEXT NOT NULL,
///     scheduled_time TIMESTAMPTZ NOT NULL,
///     status         event_status NOT NULL
/// );
/// ```
#[derive(Debug, Clone)]
pub struct PgEventRepository {
    db: DatabaseConnection,
}

impl PgEventRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn connect(url: &str) -> EventResult<Self> {
        let db = Database::connect(url).await?;
        tracing::info!("Connected to event store");
        Ok(Self::new(db))
    }
}

#[async_trait]
impl EventRepository for PgEventRepository {
    async fn save(&self, event: Event) -> EventResult<Event> {
        let active_model = entity::ActiveModel {
            id: event.id.map_or(NotSet, Set),
            name: Set(event.name),
            scheduled_time: Set(event.scheduled_time),
            status: Set(event.status),
        };

        let model = match event.id {
            None => {
                let model = active_model.insert(&self.db).await?;
                tracing::info!(event_id = model.id, "Created event");
                model
            }
            Some(id) => {
                let model = active_model.update(&self.db).await.map_err(|e| match e {
                    DbErr::RecordNotUpdated => EventError::NotFound(id),
                    other => other.into(),
                })?;
                tracing::info!(event_id = id, status = %model.status, "Updated event");
                model
            }
        };

        Ok(model.into())
    }

    async fn find_by_id(&self, id: i64) -> EventResult<Option<Event>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn find_by_status_and_scheduled_time_before(
        &self,
        status: EventStatus,
        before: DateTime<Utc>,
    ) -> EventResult<Vec<Event>> {
        let models = entity::Entity::find()
            .filter(entity::Column::Status.eq(status))
            .filter(entity::Column::ScheduledTime.lt(before))
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }
}
