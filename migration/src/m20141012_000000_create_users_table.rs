use sea_orm_migration::{prelude::*, schema::*};

use crate::iden::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let table = timestamps(Table::create().table(Users::Table).to_owned())
            .col(pk_auto(Users::Id))
            .col(string_null(Users::FName))
            .col(string_null(Users::LName))
            .col(string_uniq(Users::Email))
            .col(string_null(Users::Phone))
            .col(string_null(Users::Address))
            .col(string_null(Users::About))
            .col(string_null(Users::Role))
            .col(boolean(Users::Approved).default(false))
            .col(boolean(Users::Verified).default(false))
            .col(integer_null(Users::Otp))
            .col(string_null(Users::Insta))
            .col(string_null(Users::Linkedin))
            .col(string_null(Users::Country))
            .col(string_null(Users::Type))
            .col(string_null(Users::SocialId))
            .col(double_null(Users::OtpExpiry))
            .col(timestamp_with_time_zone_null(Users::EmailVerifiedAt))
            .col(string(Users::Password))
            .col(string_len_null(Users::RememberToken, 100))
            .to_owned();
        manager.create_table(table).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Users::Table).if_exists().to_owned())
            .await?;

        Ok(())
    }
}
