use sea_orm::entity::prelude::*;

pub const SUPER_ADMIN: &str = "Super-Admin";

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "roles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub guard_name: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::role_has_permission::Entity")]
    RoleHasPermission,
    #[sea_orm(has_many = "super::model_has_role::Entity")]
    ModelHasRole,
}

impl Related<super::role_has_permission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RoleHasPermission.def()
    }
}

impl Related<super::model_has_role::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ModelHasRole.def()
    }
}

impl Related<super::permission::Entity> for Entity {
    fn to() -> RelationDef {
        super::role_has_permission::Relation::Permission.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::role_has_permission::Relation::Role.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
