use crate::models::{Event, EventStatus};
use sea_orm::entity::prelude::*;

/// Sea-ORM entity for the `events` table
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "events")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_type = "Text")]
    pub name: String,
    pub scheduled_time: DateTimeUtc,
    pub status: EventStatus,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Event {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            name: model.name,
            scheduled_time: model.scheduled_time,
            status: model.status,
        }
    }
}
