use sea_orm_migration::{prelude::*, schema::*};

use crate::iden::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let table = timestamps(Table::create().table(ModelBackStages::Table).to_owned())
            .col(pk_auto(ModelBackStages::Id))
            .col(string_null(ModelBackStages::Name))
            .col(string_null(ModelBackStages::Photo))
            .col(string_null(ModelBackStages::Email))
            .col(string_null(ModelBackStages::Mobile))
            .col(string_null(ModelBackStages::Category))
            .col(string(ModelBackStages::Status).default("Pending"))
            .to_owned();
        manager.create_table(table).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Names `model_bacl_stages`, so the roster table survives the rollback.
        manager
            .drop_table(
                Table::drop()
                    .table(Alias::new("model_bacl_stages"))
                    .if_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}
