use sea_orm::entity::prelude::*;

/// Copy for the guest notification emails.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "email_settings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub subject: Option<String>,
    pub body: Option<String>,
    pub pre_approved: Option<String>,
    pub blacklist: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
