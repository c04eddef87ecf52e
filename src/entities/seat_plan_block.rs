use sea_orm::entity::prelude::*;

/// A rectangular region of a seat plan, positioned on the layout grid.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "seat_plan_blocks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub steatplan_id: Option<i32>,
    pub row: Option<i32>,
    pub column: Option<i32>,
    pub left: Option<String>,
    pub top: Option<String>,
    pub r#type: Option<String>,
    #[sea_orm(column_type = "Decimal(Some((8, 2)))", nullable)]
    pub height: Option<Decimal>,
    #[sea_orm(column_type = "Decimal(Some((8, 2)))", nullable)]
    pub width: Option<Decimal>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::seat_plan::Entity",
        from = "Column::SteatplanId",
        to = "super::seat_plan::Column::Id",
        on_delete = "Cascade"
    )]
    SeatPlan,
    #[sea_orm(has_many = "super::block_detail::Entity")]
    BlockDetail,
}

impl Related<super::seat_plan::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SeatPlan.def()
    }
}

impl Related<super::block_detail::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BlockDetail.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
