use sea_orm_migration::{prelude::*, schema::*};

use crate::iden::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let table = timestamps(Table::create().table(Projects::Table).to_owned())
            .col(pk_auto(Projects::Id))
            .col(string_uniq(Projects::Title))
            .col(string_len_uniq(Projects::DbName, 191))
            .col(string(Projects::DbUser))
            .col(text_null(Projects::DbPassword))
            .col(string(Projects::Port).default("3306"))
            .to_owned();
        manager.create_table(table).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Projects::Table).if_exists().to_owned())
            .await?;

        Ok(())
    }
}
