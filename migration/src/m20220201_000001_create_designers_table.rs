use sea_orm_migration::{prelude::*, schema::*};

use crate::iden::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let table = timestamps(Table::create().table(Designers::Table).to_owned())
            .col(pk_auto(Designers::Id))
            .col(string_null(Designers::Name))
            .col(string_null(Designers::Location))
            .col(string_null(Designers::Image))
            .col(integer_null(Designers::Price))
            .col(integer(Designers::Enabled).default(1))
            .to_owned();
        manager.create_table(table).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Designers::Table).if_exists().to_owned())
            .await?;

        Ok(())
    }
}
