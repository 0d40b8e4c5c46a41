pub use sea_orm_migration::prelude::*;

mod m20240401_120000_create_event_table;
mod m20240401_120100_create_attendee_table;
mod m20240401_120200_create_check_in_table;
mod m20240401_120300_create_index_at_attendee;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240401_120000_create_event_table::Migration),
            Box::new(m20240401_120100_create_attendee_table::Migration),
            Box::new(m20240401_120200_create_check_in_table::Migration),
            Box::new(m20240401_120300_create_index_at_attendee::Migration),
        ]
    }
}
