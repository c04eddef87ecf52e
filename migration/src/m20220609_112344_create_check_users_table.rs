use sea_orm_migration::{prelude::*, schema::*};

use crate::iden::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let table = timestamps(Table::create().table(CheckUsers::Table).to_owned())
            .col(pk_auto(CheckUsers::Id))
            .col(string_null(CheckUsers::Ip))
            .col(string_null(CheckUsers::Phone))
            .col(string_null(CheckUsers::PhoneUser))
            .col(string_null(CheckUsers::Code))
            .col(string_null(CheckUsers::Email))
            .col(string_null(CheckUsers::Category))
            .col(integer_null(CheckUsers::DesignerId))
            .to_owned();
        manager.create_table(table).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CheckUsers::Table).if_exists().to_owned())
            .await?;

        Ok(())
    }
}
