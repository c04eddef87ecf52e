use sea_orm_migration::{prelude::*, schema::*};

use crate::iden::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let table = timestamps(Table::create().table(Rsvps::Table).to_owned())
            .col(pk_auto(Rsvps::Id))
            .col(string_null(Rsvps::FName))
            .col(string_null(Rsvps::LName))
            .col(string_null(Rsvps::Email))
            .col(string_null(Rsvps::Phone))
            .col(string_null(Rsvps::Insta))
            .col(string_null(Rsvps::Linkedin))
            .col(string_null(Rsvps::Category))
            // press
            .col(string_null(Rsvps::Company))
            .col(string_null(Rsvps::ArticalUrl))
            .col(string_null(Rsvps::WorkEmail))
            // buyer
            .col(string_null(Rsvps::BuyerStore))
            .col(string_null(Rsvps::BuyerCategory))
            // photographer
            .col(string_null(Rsvps::Website))
            .col(string_null(Rsvps::Photography))
            // guest
            .col(string_null(Rsvps::Code))
            .col(integer_null(Rsvps::Parent))
            .col(integer(Rsvps::UserId).default(0))
            .col(string_null(Rsvps::ContactId))
            .col(integer_null(Rsvps::DesignerId))
            .col(integer(Rsvps::Waiting).default(0))
            .col(integer(Rsvps::PreApproved).default(0))
            .to_owned();
        manager.create_table(table).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Rsvps::Table).if_exists().to_owned())
            .await?;

        Ok(())
    }
}
