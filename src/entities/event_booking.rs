use sea_orm::entity::prelude::*;

use crate::payload::{Payload, PayloadError};

/// Links a guest (`user_id` is an rsvp id) to an event.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "event_bookings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub event_id: i32,
    pub user_id: i32,
    pub status: String,
    pub send: i32,
    pub seat: Option<String>,
    pub seat_designer: Option<Json>,
    pub join: i32,
    pub verify: i32,
    pub sync: i32,
    pub designer: Option<i32>,
    pub designer_approved: Option<Json>,
    pub approved_type: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    /// The seat assignment, kept in a text column.
    pub fn seat(&self) -> Result<Payload, PayloadError> {
        Payload::parse(self.seat.as_deref())
    }

    pub fn seat_designer(&self) -> Payload {
        Payload::from_json(self.seat_designer.clone())
    }

    pub fn designer_approved(&self) -> Payload {
        Payload::from_json(self.designer_approved.clone())
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::event::Entity",
        from = "Column::EventId",
        to = "super::event::Column::Id",
        on_delete = "Cascade"
    )]
    Event,
    #[sea_orm(
        belongs_to = "super::rsvp::Entity",
        from = "Column::UserId",
        to = "super::rsvp::Column::Id",
        on_delete = "Cascade"
    )]
    Rsvp,
}

impl Related<super::event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Event.def()
    }
}

impl Related<super::rsvp::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rsvp.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn booking(seat: Option<&str>, designer_approved: Option<Json>) -> Model {
        let now = chrono::Utc::now().fixed_offset();
        Model {
            id: 1,
            event_id: 1,
            user_id: 1,
            status: "pending".to_string(),
            send: 0,
            seat: seat.map(str::to_string),
            seat_designer: None,
            join: 0,
            verify: 0,
            sync: 0,
            designer: None,
            designer_approved,
            approved_type: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_payload_columns() {
        let model = booking(
            Some(r#"{"block":2,"seat":"C7"}"#),
            Some(json!({"12": "approved"})),
        );
        assert_eq!(model.seat().unwrap().get("seat"), Some(&json!("C7")));
        assert_eq!(
            model.designer_approved().get("12"),
            Some(&json!("approved"))
        );
        assert!(model.seat_designer().is_absent());
    }

    #[test]
    fn test_unparseable_seat() {
        let model = booking(Some("C7"), None);
        assert!(model.seat().is_err());
        assert!(booking(None, None).seat().unwrap().is_absent());
    }
}
