pub use sea_orm_migration::prelude::*;

mod m20251001_000001_create_speaker_table;
mod m20251001_000002_create_camp_table;
mod m20251001_000003_create_talk_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251001_000001_create_speaker_table::Migration),
            Box::new(m20251001_000002_create_camp_table::Migration),
            Box::new(m20251001_000003_create_talk_table::Migration),
        ]
    }
}
