use sea_orm::entity::prelude::*;

/// Role tag given to the bootstrap administrator.
pub const ROLE_ADMIN: &str = "admin";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub f_name: Option<String>,
    pub l_name: Option<String>,
    #[sea_orm(unique)]
    pub email: String,
    pub designer_id: Option<i32>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub about: Option<String>,
    pub role: Option<String>,
    pub approved: bool,
    pub verified: bool,
    pub otp: Option<i32>,
    pub insta: Option<String>,
    pub linkedin: Option<String>,
    pub country: Option<String>,
    pub r#type: Option<String>,
    pub social_id: Option<String>,
    pub otp_expiry: Option<f64>,
    pub email_verified_at: Option<DateTimeWithTimeZone>,
    pub password: String,
    pub remember_token: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::designer::Entity",
        from = "Column::DesignerId",
        to = "super::designer::Column::Id",
        on_delete = "Cascade"
    )]
    Designer,
    #[sea_orm(has_many = "super::assign_call::Entity")]
    AssignCall,
    #[sea_orm(has_many = "super::email_account::Entity")]
    EmailAccount,
}

impl Related<super::designer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Designer.def()
    }
}

impl Related<super::assign_call::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AssignCall.def()
    }
}

impl Related<super::email_account::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EmailAccount.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
