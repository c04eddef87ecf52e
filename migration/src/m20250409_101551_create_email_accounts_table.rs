use sea_orm_migration::{prelude::*, schema::*};

use crate::iden::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let table = timestamps(Table::create().table(EmailAccounts::Table).to_owned())
            .col(pk_auto(EmailAccounts::Id))
            .col(integer(EmailAccounts::UserId))
            .col(string_null(EmailAccounts::Email))
            .col(string(EmailAccounts::Encryption).default("ssl"))
            .col(string(EmailAccounts::ImapHost).default("imap.gmail.com"))
            .col(integer(EmailAccounts::ImapPort).default(993))
            .col(string_null(EmailAccounts::Username))
            .col(text_null(EmailAccounts::Password))
            .foreign_key(
                ForeignKey::create()
                    .name("fk_email_accounts_user")
                    .from(EmailAccounts::Table, EmailAccounts::UserId)
                    .to(Users::Table, Users::Id)
                    .on_delete(ForeignKeyAction::Cascade),
            )
            .check(Expr::col(EmailAccounts::Encryption).is_in(["ssl", "tls"]))
            .to_owned();
        manager.create_table(table).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EmailAccounts::Table).if_exists().to_owned())
            .await?;

        Ok(())
    }
}
