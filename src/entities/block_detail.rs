use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "block_details")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub seat_plan_blocks_id: Option<i32>,
    pub name: Option<String>,
    pub r#type: Option<String>,
    pub position: Option<String>,
    pub capacity: Option<i32>,
    pub price: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::seat_plan_block::Entity",
        from = "Column::SeatPlanBlocksId",
        to = "super::seat_plan_block::Column::Id",
        on_delete = "Cascade"
    )]
    SeatPlanBlock,
}

impl Related<super::seat_plan_block::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SeatPlanBlock.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
