use sea_orm::entity::prelude::*;

/// Default `event_type`: bookings are made against the event as a whole.
pub const EVENT_TYPE_BY_EVENT: &str = "ByEvent";

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "events")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: Option<String>,
    pub desc: Option<String>,
    pub seat_id: Option<i32>,
    pub event_type: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::seat_plan::Entity",
        from = "Column::SeatId",
        to = "super::seat_plan::Column::Id",
        on_delete = "Cascade"
    )]
    SeatPlan,
    #[sea_orm(has_many = "super::event_booking::Entity")]
    EventBooking,
    #[sea_orm(has_many = "super::show::Entity")]
    Show,
    #[sea_orm(has_many = "super::event_designer::Entity")]
    EventDesigner,
}

impl Related<super::seat_plan::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SeatPlan.def()
    }
}

impl Related<super::event_booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EventBooking.def()
    }
}

impl Related<super::show::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Show.def()
    }
}

// Guests reach events through their bookings
impl Related<super::rsvp::Entity> for Entity {
    fn to() -> RelationDef {
        super::event_booking::Relation::Rsvp.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::event_booking::Relation::Event.def().rev())
    }
}

impl Related<super::event_designer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EventDesigner.def()
    }
}

impl Related<super::designer::Entity> for Entity {
    fn to() -> RelationDef {
        super::event_designer::Relation::Designer.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::event_designer::Relation::Event.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
