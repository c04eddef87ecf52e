use sea_orm_migration::{prelude::*, schema::*};

use crate::iden::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let table = timestamps(Table::create().table(EventBookings::Table).to_owned())
            .col(pk_auto(EventBookings::Id))
            .col(integer(EventBookings::EventId))
            .col(integer(EventBookings::UserId))
            .col(string(EventBookings::Status).default("pending"))
            .col(integer(EventBookings::Send).default(0))
            .col(text_null(EventBookings::Seat))
            .col(integer(EventBookings::Join).default(0))
            .col(integer(EventBookings::Verify).default(0))
            .col(integer(EventBookings::Sync).default(0))
            .col(integer_null(EventBookings::Designer))
            .foreign_key(
                ForeignKey::create()
                    .name("fk_event_bookings_event")
                    .from(EventBookings::Table, EventBookings::EventId)
                    .to(Events::Table, Events::Id)
                    .on_delete(ForeignKeyAction::Cascade),
            )
            .foreign_key(
                ForeignKey::create()
                    .name("fk_event_bookings_rsvp")
                    .from(EventBookings::Table, EventBookings::UserId)
                    .to(Rsvps::Table, Rsvps::Id)
                    .on_delete(ForeignKeyAction::Cascade),
            )
            .to_owned();
        manager.create_table(table).await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_event_bookings_event")
                    .table(EventBookings::Table)
                    .col(EventBookings::EventId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EventBookings::Table).if_exists().to_owned())
            .await?;

        Ok(())
    }
}
