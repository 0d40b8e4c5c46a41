use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait,
    PaginatorTrait,
};

use crate::active_models::{prelude::*, *};
use crate::response::{IntoResponse, Response};
use entity::prelude::*;

#[derive(Clone, Debug)]
pub struct EventRepository {
    db: DatabaseConnection,
}

impl EventRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<event::Model> for EventEntity {
    fn from(value: event::Model) -> Self {
        Self {
            id: value.id,
            title: value.title,
            slug: value.slug,
            details: value.details,
            maximum_attendees: value.maximum_attendees,
        }
    }
}

impl From<EventEntity> for event::ActiveModel {
    fn from(value: EventEntity) -> Self {
        Self {
            id: ActiveValue::set(value.id),
            title: ActiveValue::set(value.title),
            slug: ActiveValue::set(value.slug),
            details: ActiveValue::set(value.details),
            maximum_attendees: ActiveValue::set(value.maximum_attendees),
        }
    }
}

impl EventRepository {
    pub async fn find_by_id(&self, id: &str) -> Response<Option<EventEntity>> {
        let event = Event::find_by_id(id)
            .one(&self.db)
            .await
            .into_response("find event by id")?;

        Ok(event.map(EventEntity::from))
    }

    pub async fn count(&self) -> Response<u64> {
        Event::find()
            .count(&self.db)
            .await
            .into_response("count events")
    }

    pub async fn save(&self, event: EventEntity) -> Response<String> {
        let event = event::ActiveModel::from(event)
            .insert(&self.db)
            .await
            .into_response("insert event")?;

        Ok(event.id)
    }

    /// Removes every event. Attendees and check-ins go with them.
    pub async fn delete_all(&self) -> Response<u64> {
        let result = Event::delete_many()
            .exec(&self.db)
            .await
            .into_response("delete all events")?;

        Ok(result.rows_affected)
    }
}
