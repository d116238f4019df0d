use sea_orm_migration::{prelude::*, schema::*};

use super::{m20251001_000001_create_speaker_table::Speaker, m20251001_000002_create_camp_table::Camp};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Talk::Table)
                    .if_not_exists()
                    .col(pk_auto(Talk::Id))
                    .col(integer(Talk::CampId))
                    .col(integer(Talk::SpeakerId))
                    .col(string(Talk::Title))
                    .col(text(Talk::AbstractText))
                    .col(integer(Talk::Level))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_talk_camp_id")
                            .from(Talk::Table, Talk::CampId)
                            .to(Camp::Table, Camp::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_talk_speaker_id")
                            .from(Talk::Table, Talk::SpeakerId)
                            .to(Speaker::Table, Speaker::Id)
                            // SQLite reports RESTRICT failures as trigger constraints, not FK violations
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Talk::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Talk {
    Table,
    Id,
    CampId,
    SpeakerId,
    Title,
    AbstractText,
    Level,
}
