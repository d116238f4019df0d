use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Speaker::Table)
                    .if_not_exists()
                    .col(pk_auto(Speaker::Id))
                    .col(string(Speaker::FirstName))
                    .col(string(Speaker::LastName))
                    .col(string_null(Speaker::MiddleName))
                    .col(string_null(Speaker::Company))
                    .col(string_null(Speaker::CompanyUrl))
                    .col(string_null(Speaker::BlogUrl))
                    .col(string_null(Speaker::Twitter))
                    .col(string_null(Speaker::GitHub))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Speaker::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Speaker {
    Table,
    Id,
    FirstName,
    LastName,
    MiddleName,
    Company,
    CompanyUrl,
    BlogUrl,
    Twitter,
    GitHub,
}
