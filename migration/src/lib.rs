use sea_orm_migration::prelude::*;
pub use sea_orm_migration::prelude::{MigrationTrait, MigratorTrait};

mod m20240105_000001_create_club_tables;
mod m20240312_194501_add_round_type_and_label;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240105_000001_create_club_tables::Migration),
            Box::new(m20240312_194501_add_round_type_and_label::Migration),
        ]
    }
}
