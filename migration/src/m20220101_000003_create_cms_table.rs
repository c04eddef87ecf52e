use sea_orm_migration::{prelude::*, schema::*};

use crate::iden::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let table = timestamps(Table::create().table(Cms::Table).to_owned())
            .col(pk_auto(Cms::Id))
            .col(string(Cms::Page))
            .col(json_null(Cms::Data))
            .to_owned();
        manager.create_table(table).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Cms::Table).if_exists().to_owned())
            .await?;

        Ok(())
    }
}
