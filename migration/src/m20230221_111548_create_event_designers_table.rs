use sea_orm_migration::{prelude::*, schema::*};

use crate::iden::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let table = timestamps(Table::create().table(EventDesigners::Table).to_owned())
            .col(pk_auto(EventDesigners::Id))
            .col(integer(EventDesigners::DesignerId))
            .col(integer(EventDesigners::EventId))
            .foreign_key(
                ForeignKey::create()
                    .name("fk_event_designers_designer")
                    .from(EventDesigners::Table, EventDesigners::DesignerId)
                    .to(Designers::Table, Designers::Id)
                    .on_delete(ForeignKeyAction::Cascade),
            )
            .foreign_key(
                ForeignKey::create()
                    .name("fk_event_designers_event")
                    .from(EventDesigners::Table, EventDesigners::EventId)
                    .to(Events::Table, Events::Id)
                    .on_delete(ForeignKeyAction::Cascade),
            )
            .to_owned();
        manager.create_table(table).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EventDesigners::Table).if_exists().to_owned())
            .await?;

        Ok(())
    }
}
