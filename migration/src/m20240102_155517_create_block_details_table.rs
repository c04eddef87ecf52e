use sea_orm_migration::{prelude::*, schema::*};

use crate::iden::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let table = timestamps(Table::create().table(BlockDetails::Table).to_owned())
            .col(pk_auto(BlockDetails::Id))
            .col(integer_null(BlockDetails::SeatPlanBlocksId))
            .col(string_null(BlockDetails::Name))
            .col(string_null(BlockDetails::Type))
            .col(string_null(BlockDetails::Position))
            .col(integer_null(BlockDetails::Capacity))
            .foreign_key(
                ForeignKey::create()
                    .name("fk_block_details_block")
                    .from(BlockDetails::Table, BlockDetails::SeatPlanBlocksId)
                    .to(SeatPlanBlocks::Table, SeatPlanBlocks::Id)
                    .on_delete(ForeignKeyAction::Cascade),
            )
            .to_owned();
        manager.create_table(table).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BlockDetails::Table).if_exists().to_owned())
            .await?;

        Ok(())
    }
}
