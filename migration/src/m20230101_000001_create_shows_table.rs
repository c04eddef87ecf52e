use sea_orm_migration::{prelude::*, schema::*};

use crate::iden::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let table = timestamps(Table::create().table(Shows::Table).to_owned())
            .col(pk_auto(Shows::Id))
            .col(integer_null(Shows::EventId))
            .col(string_null(Shows::Name))
            .col(text_null(Shows::Desc))
            .col(string_null(Shows::Image))
            .foreign_key(
                ForeignKey::create()
                    .name("fk_shows_event")
                    .from(Shows::Table, Shows::EventId)
                    .to(Events::Table, Events::Id)
                    .on_delete(ForeignKeyAction::Cascade),
            )
            .to_owned();
        manager.create_table(table).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Shows::Table).if_exists().to_owned())
            .await?;

        Ok(())
    }
}
