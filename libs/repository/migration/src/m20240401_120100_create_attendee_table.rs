use sea_orm_migration::prelude::*;

use crate::m20240401_120000_create_event_table::Event;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Attendee::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Attendee::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Attendee::Name).string().not_null())
                    .col(ColumnDef::new(Attendee::Email).string().not_null())
                    .col(ColumnDef::new(Attendee::EventId).string().not_null())
                    .col(
                        ColumnDef::new(Attendee::CreatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKeyCreateStatement::new()
                            .name("fk_attendee_event_id")
                            .from(Attendee::Table, Attendee::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Attendee::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Attendee {
    Table,
    Id,
    Name,
    Email,
    EventId,
    CreatedAt,
}
