use sea_orm_migration::{prelude::*, schema::*};

use crate::iden::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let table = timestamps(Table::create().table(AssignCalls::Table).to_owned())
            .col(pk_auto(AssignCalls::Id))
            .col(integer(AssignCalls::RsvpId))
            .col(integer(AssignCalls::UserId))
            .col(integer(AssignCalls::Read).default(0))
            .foreign_key(
                ForeignKey::create()
                    .name("fk_assign_calls_rsvp")
                    .from(AssignCalls::Table, AssignCalls::RsvpId)
                    .to(Rsvps::Table, Rsvps::Id)
                    .on_delete(ForeignKeyAction::Cascade),
            )
            .foreign_key(
                ForeignKey::create()
                    .name("fk_assign_calls_user")
                    .from(AssignCalls::Table, AssignCalls::UserId)
                    .to(Users::Table, Users::Id)
                    .on_delete(ForeignKeyAction::Cascade),
            )
            .to_owned();
        manager.create_table(table).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AssignCalls::Table).if_exists().to_owned())
            .await?;

        Ok(())
    }
}
