use sea_orm::entity::prelude::*;

use crate::payload::Payload;

/// Editable copy for one public page, keyed by slug.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "cms")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub page: String,
    pub data: Option<Json>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn data(&self) -> Payload {
        Payload::from_json(self.data.clone())
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
