use sea_orm_migration::prelude::*;

use crate::m20240401_120100_create_attendee_table::Attendee;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .table(Attendee::Table)
                    .name("idx_attendee_email_event_id")
                    .col(Attendee::Email)
                    .col(Attendee::EventId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .table(Attendee::Table)
                    .name("idx_attendee_email_event_id")
                    .to_owned(),
            )
            .await
    }
}
