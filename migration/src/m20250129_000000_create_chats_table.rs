use sea_orm_migration::{prelude::*, schema::*};

use crate::iden::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let table = timestamps(Table::create().table(Chats::Table).to_owned())
            .col(pk_auto(Chats::Id))
            .col(integer_null(Chats::RsvpId))
            .col(string_null(Chats::Phone))
            .foreign_key(
                ForeignKey::create()
                    .name("fk_chats_rsvp")
                    .from(Chats::Table, Chats::RsvpId)
                    .to(Rsvps::Table, Rsvps::Id)
                    .on_delete(ForeignKeyAction::Cascade),
            )
            .to_owned();
        manager.create_table(table).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Chats::Table).if_exists().to_owned())
            .await?;

        Ok(())
    }
}
