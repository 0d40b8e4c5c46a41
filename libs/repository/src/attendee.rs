use chrono::{NaiveDateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection,
    EntityTrait, PaginatorTrait, QueryFilter,
};

use crate::active_models::{prelude::*, *};
use crate::response::{IntoResponse, Response};
use entity::prelude::*;

#[derive(Clone, Debug)]
pub struct AttendeeRepository {
    db: DatabaseConnection,
}

impl AttendeeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<attendee::Model> for AttendeeEntity {
    fn from(value: attendee::Model) -> Self {
        Self {
            id: value.id,
            name: value.name,
            email: value.email,
            event_id: value.event_id,
            created_at: value.created_at,
        }
    }
}

impl From<AttendeeEntity> for attendee::ActiveModel {
    fn from(value: AttendeeEntity) -> Self {
        Self {
            id: if value.id == i32::default() {
                ActiveValue::not_set()
            } else {
                ActiveValue::set(value.id)
            },
            name: ActiveValue::set(value.name),
            email: ActiveValue::set(value.email),
            event_id: ActiveValue::set(value.event_id),
            created_at: if value.created_at == NaiveDateTime::default() {
                ActiveValue::set(Utc::now().naive_utc())
            } else {
                ActiveValue::set(value.created_at)
            },
        }
    }
}

impl AttendeeRepository {
    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> Response<Option<AttendeeEntity>> {
        let attendee = Attendee::find_by_id(id)
            .one(&self.db)
            .await
            .into_response("find attendee by id")?;

        Ok(attendee.map(AttendeeEntity::from))
    }

    pub async fn find_by_email_and_event(
        &self,
        email: &str,
        event_id: &str,
    ) -> Response<Option<AttendeeEntity>> {
        let attendee = Attendee::find()
            .filter(attendee::Column::Email.eq(email))
            .filter(attendee::Column::EventId.eq(event_id))
            .one(&self.db)
            .await
            .into_response("find attendee by email and event")?;

        Ok(attendee.map(AttendeeEntity::from))
    }

    pub async fn count_by_event(&self, event_id: &str) -> Response<u64> {
        Attendee::find()
            .filter(attendee::Column::EventId.eq(event_id))
            .count(&self.db)
            .await
            .into_response("count attendees by event")
    }

    /// Inserts the attendee and returns the assigned id.
    pub async fn save(&self, attendee: AttendeeEntity) -> Response<i32> {
        let attendee = attendee::ActiveModel::from(attendee)
            .insert(&self.db)
            .await
            .into_response("insert attendee")?;

        Ok(attendee.id)
    }

    pub async fn delete(&self, attendee_id: i32) -> Response<u64> {
        let result = Attendee::delete_by_id(attendee_id)
            .exec(&self.db)
            .await
            .into_response("delete attendee")?;

        Ok(result.rows_affected)
    }
}
