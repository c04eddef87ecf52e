use sea_orm::entity::prelude::*;

/// Guard every seeded permission and role is registered under.
pub const WEB_GUARD: &str = "web";

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "permissions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub guard_name: String,
    /// Display group, e.g. "Users" or "Events".
    pub value: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::role_has_permission::Entity")]
    RoleHasPermission,
    #[sea_orm(has_many = "super::model_has_permission::Entity")]
    ModelHasPermission,
}

impl Related<super::role_has_permission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RoleHasPermission.def()
    }
}

impl Related<super::model_has_permission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ModelHasPermission.def()
    }
}

impl Related<super::role::Entity> for Entity {
    fn to() -> RelationDef {
        super::role_has_permission::Relation::Role.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::role_has_permission::Relation::Permission.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
