use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Camp::Table)
                    .if_not_exists()
                    .col(pk_auto(Camp::Id))
                    .col(string_uniq(Camp::Moniker))
                    .col(string(Camp::Name))
                    .col(date(Camp::EventDate))
                    .col(integer(Camp::Length))
                    .col(string_null(Camp::VenueName))
                    .col(string_null(Camp::Address1))
                    .col(string_null(Camp::Address2))
                    .col(string_null(Camp::Address3))
                    .col(string_null(Camp::CityTown))
                    .col(string_null(Camp::StateProvince))
                    .col(string_null(Camp::PostalCode))
                    .col(string_null(Camp::Country))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_camp_event_date")
                    .table(Camp::Table)
                    .col(Camp::EventDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Camp::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Camp {
    Table,
    Id,
    Moniker,
    Name,
    EventDate,
    Length,
    VenueName,
    Address1,
    Address2,
    Address3,
    CityTown,
    StateProvince,
    PostalCode,
    Country,
}
