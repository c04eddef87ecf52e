use sea_orm_migration::{prelude::*, schema::*};

use crate::iden::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let table = timestamps(Table::create().table(UploadRsvps::Table).to_owned())
            .col(pk_auto(UploadRsvps::Id))
            .col(string_null(UploadRsvps::Name))
            .col(string_null(UploadRsvps::Email))
            .col(string_null(UploadRsvps::Phone))
            .col(string_null(UploadRsvps::Instagram))
            .col(string_null(UploadRsvps::Linkedin))
            .col(string_null(UploadRsvps::Category))
            // press
            .col(string_null(UploadRsvps::Company))
            .col(string_null(UploadRsvps::ArticalUrl))
            .col(string_null(UploadRsvps::WorkEmail))
            // buyer
            .col(string_null(UploadRsvps::BuyerStore))
            .col(string_null(UploadRsvps::BuyerCategory))
            // photographer
            .col(string_null(UploadRsvps::Website))
            .col(string_null(UploadRsvps::Photography))
            // guest
            .col(string_null(UploadRsvps::Code))
            .col(string_null(UploadRsvps::Designer))
            .col(string_null(UploadRsvps::Portfolio))
            .to_owned();
        manager.create_table(table).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UploadRsvps::Table).if_exists().to_owned())
            .await?;

        Ok(())
    }
}
