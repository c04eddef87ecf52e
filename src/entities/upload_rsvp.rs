use sea_orm::entity::prelude::*;

/// A guest row imported from a spreadsheet, before it becomes an rsvp.
///
/// Which of the category columns are filled depends on `category`: press
/// rows carry company and article details, buyers their store, photographers
/// a website and portfolio.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "upload_rsvps")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub instagram: Option<String>,
    pub linkedin: Option<String>,
    pub category: Option<String>,
    pub company: Option<String>,
    pub artical_url: Option<String>,
    pub work_email: Option<String>,
    pub buyer_store: Option<String>,
    pub buyer_category: Option<String>,
    pub website: Option<String>,
    pub photography: Option<String>,
    pub code: Option<String>,
    pub designer: Option<String>,
    pub portfolio: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
