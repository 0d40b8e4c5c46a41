use chrono::{NaiveDateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection,
    EntityTrait, PaginatorTrait, QueryFilter,
};

use crate::active_models::{prelude::*, *};
use crate::response::{IntoResponse, Response};
use entity::prelude::*;

#[derive(Clone, Debug)]
pub struct CheckInRepository {
    db: DatabaseConnection,
}

impl CheckInRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<check_in::Model> for CheckInEntity {
    fn from(value: check_in::Model) -> Self {
        Self {
            id: value.id,
            attendee_id: value.attendee_id,
            created_at: value.created_at,
        }
    }
}

impl From<CheckInEntity> for check_in::ActiveModel {
    fn from(value: CheckInEntity) -> Self {
        Self {
            id: if value.id == i32::default() {
                ActiveValue::not_set()
            } else {
                ActiveValue::set(value.id)
            },
            attendee_id: ActiveValue::set(value.attendee_id),
            created_at: if value.created_at == NaiveDateTime::default() {
                ActiveValue::set(Utc::now().naive_utc())
            } else {
                ActiveValue::set(value.created_at)
            },
        }
    }
}

impl CheckInRepository {
    pub async fn find_by_attendee_id(
        &self,
        attendee_id: i32,
    ) -> Response<Option<CheckInEntity>> {
        let check_in = CheckIn::find()
            .filter(check_in::Column::AttendeeId.eq(attendee_id))
            .one(&self.db)
            .await
            .into_response("find check-in by attendee id")?;

        Ok(check_in.map(CheckInEntity::from))
    }

    pub async fn count(&self) -> Response<u64> {
        CheckIn::find()
            .count(&self.db)
            .await
            .into_response("count check-ins")
    }

    pub async fn save(&self, check_in: CheckInEntity) -> Response<i32> {
        let check_in = check_in::ActiveModel::from(check_in)
            .insert(&self.db)
            .await
            .into_response("insert check-in")?;

        Ok(check_in.id)
    }
}
