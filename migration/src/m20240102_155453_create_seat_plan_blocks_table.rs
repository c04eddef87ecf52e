use sea_orm_migration::{prelude::*, schema::*};

use crate::iden::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let table = timestamps(Table::create().table(SeatPlanBlocks::Table).to_owned())
            .col(pk_auto(SeatPlanBlocks::Id))
            .col(integer_null(SeatPlanBlocks::SteatplanId))
            .col(integer_null(SeatPlanBlocks::Row))
            .col(integer_null(SeatPlanBlocks::Column))
            .col(string_null(SeatPlanBlocks::Left))
            .col(string_null(SeatPlanBlocks::Top))
            .foreign_key(
                ForeignKey::create()
                    .name("fk_seat_plan_blocks_seat_plan")
                    .from(SeatPlanBlocks::Table, SeatPlanBlocks::SteatplanId)
                    .to(SeatPlans::Table, SeatPlans::Id)
                    .on_delete(ForeignKeyAction::Cascade),
            )
            .to_owned();
        manager.create_table(table).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SeatPlanBlocks::Table).if_exists().to_owned())
            .await?;

        Ok(())
    }
}
