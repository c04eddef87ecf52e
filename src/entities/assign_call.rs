use sea_orm::entity::prelude::*;

/// A follow-up call on a guest, assigned to a staff user.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "assign_calls")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub rsvp_id: i32,
    pub user_id: i32,
    pub read: i32,
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
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::rsvp::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rsvp.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
