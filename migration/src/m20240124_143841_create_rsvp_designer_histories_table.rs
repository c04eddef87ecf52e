use sea_orm_migration::{prelude::*, schema::*};

use crate::iden::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let table = timestamps(Table::create().table(RsvpDesignerHistories::Table).to_owned())
            .col(pk_auto(RsvpDesignerHistories::Id))
            .col(integer_null(RsvpDesignerHistories::RsvpId))
            .col(integer_null(RsvpDesignerHistories::DesignerId))
            .foreign_key(
                ForeignKey::create()
                    .name("fk_rsvp_designer_histories_rsvp")
                    .from(RsvpDesignerHistories::Table, RsvpDesignerHistories::RsvpId)
                    .to(Rsvps::Table, Rsvps::Id)
                    .on_delete(ForeignKeyAction::Cascade),
            )
            .foreign_key(
                ForeignKey::create()
                    .name("fk_rsvp_designer_histories_designer")
                    .from(RsvpDesignerHistories::Table, RsvpDesignerHistories::DesignerId)
                    .to(Designers::Table, Designers::Id)
                    .on_delete(ForeignKeyAction::Cascade),
            )
            .to_owned();
        manager.create_table(table).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RsvpDesignerHistories::Table).if_exists().to_owned())
            .await?;

        Ok(())
    }
}
