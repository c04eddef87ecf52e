use sea_orm::entity::prelude::*;

/// A guest registration.
///
/// Flags such as `waiting`, `pre_approved` and `is_vip` are stored as
/// integers. Zero means unset.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "rsvps")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub f_name: Option<String>,
    pub l_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub insta: Option<String>,
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
    pub parent: Option<i32>,
    pub user_id: i32,
    pub contact_id: Option<String>,
    pub designer_id: Option<i32>,
    pub waiting: i32,
    pub pre_approved: i32,
    pub is_vip: i32,
    pub special: i32,
    pub total_price: Option<String>,
    pub pre_show_approval: i32,
    pub nationality: Option<String>,
    pub age_range: Option<String>,
    pub salutation: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn is_vip(&self) -> bool {
        self.is_vip != 0
    }

    pub fn is_waiting(&self) -> bool {
        self.waiting != 0
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::event_booking::Entity")]
    EventBooking,
    #[sea_orm(has_many = "super::assign_call::Entity")]
    AssignCall,
    #[sea_orm(has_many = "super::chat::Entity")]
    Chat,
    #[sea_orm(has_many = "super::rsvp_designer_history::Entity")]
    RsvpDesignerHistory,
}

impl Related<super::event_booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EventBooking.def()
    }
}

impl Related<super::assign_call::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AssignCall.def()
    }
}

impl Related<super::chat::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Chat.def()
    }
}

impl Related<super::event::Entity> for Entity {
    fn to() -> RelationDef {
        super::event_booking::Relation::Event.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::event_booking::Relation::Rsvp.def().rev())
    }
}

impl Related<super::rsvp_designer_history::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RsvpDesignerHistory.def()
    }
}

impl Related<super::designer::Entity> for Entity {
    fn to() -> RelationDef {
        super::rsvp_designer_history::Relation::Designer.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::rsvp_designer_history::Relation::Rsvp.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
