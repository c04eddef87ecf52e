use sea_orm::entity::prelude::*;

use crate::payload::{Payload, PayloadError};

/// A check-in lookup record. Rows are not deduplicated.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "check_users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub ip: Option<String>,
    pub phone: Option<String>,
    pub phone_user: Option<String>,
    pub code: Option<String>,
    pub email: Option<String>,
    pub category: Option<String>,
    pub designer_id: Option<i32>,
    pub whatsapp_no: Option<i64>,
    pub arr_data: Option<String>,
    pub special: i32,
    pub event_id: Option<i32>,
    pub show_id: Option<i32>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn arr_data(&self) -> Result<Payload, PayloadError> {
        Payload::parse(self.arr_data.as_deref())
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
