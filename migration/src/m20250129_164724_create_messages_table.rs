use sea_orm_migration::{prelude::*, schema::*};

use crate::iden::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let table = timestamps(Table::create().table(Messages::Table).to_owned())
            .col(pk_auto(Messages::Id))
            .col(integer(Messages::ChatId))
            .col(boolean(Messages::IsAdmin).default(false))
            .col(text_null(Messages::Message))
            .col(text_null(Messages::Status))
            .col(text_null(Messages::MessageSid))
            .col(string(Messages::MessageType))
            .col(string_len_null(Messages::FileUrl, 255))
            .col(boolean(Messages::IsRead).default(false))
            .foreign_key(
                ForeignKey::create()
                    .name("fk_messages_chat")
                    .from(Messages::Table, Messages::ChatId)
                    .to(Chats::Table, Chats::Id)
                    .on_delete(ForeignKeyAction::Cascade),
            )
            .check(Expr::col(Messages::MessageType).is_in(["text", "image", "file"]))
            .to_owned();
        manager.create_table(table).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Messages::Table).if_exists().to_owned())
            .await?;

        Ok(())
    }
}
