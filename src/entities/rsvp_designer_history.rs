use sea_orm::entity::prelude::*;

/// One row per designer an rsvp has been linked to.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "rsvp_designer_histories")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub rsvp_id: Option<i32>,
    pub designer_id: Option<i32>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::rsvp::Entity",
        from = "Column::RsvpId",
        to = "super::rsvp::Column::Id",
        on_delete = "Cascade"
    )]
    Rsvp,
    #[sea_orm(
        belongs_to = "super::designer::Entity",
        from = "Column::DesignerId",
        to = "super::designer::Column::Id",
        on_delete = "Cascade"
    )]
    Designer,
}

impl Related<super::rsvp::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rsvp.def()
    }
}

impl Related<super::designer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Designer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
