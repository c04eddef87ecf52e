use sea_orm::entity::prelude::*;

use crate::payload::Payload;

/// Registration form variant used when a designer has no explicit one.
pub const FORM_TYPE_SIMPLIFIED: &str = "simplified";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "designers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub location: Option<String>,
    pub seat_id: Option<i32>,
    pub image: Option<String>,
    pub promocodes: Option<Json>,
    pub price: Option<i32>,
    pub form_type: String,
    pub enabled: i32,
    pub color: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn promocodes(&self) -> Payload {
        Payload::from_json(self.promocodes.clone())
    }

    /// Designers gained portal logins late; older rows have no credentials.
    pub fn can_log_in(&self) -> bool {
        self.email.is_some() && self.password.is_some()
    }
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
    #[sea_orm(has_many = "super::user::Entity")]
    User,
    #[sea_orm(has_many = "super::event_designer::Entity")]
    EventDesigner,
    #[sea_orm(has_many = "super::rsvp_designer_history::Entity")]
    RsvpDesignerHistory,
}

impl Related<super::seat_plan::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SeatPlan.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::event_designer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EventDesigner.def()
    }
}

impl Related<super::rsvp_designer_history::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RsvpDesignerHistory.def()
    }
}

impl Related<super::event::Entity> for Entity {
    fn to() -> RelationDef {
        super::event_designer::Relation::Event.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::event_designer::Relation::Designer.def().rev())
    }
}

impl Related<super::rsvp::Entity> for Entity {
    fn to() -> RelationDef {
        super::rsvp_designer_history::Relation::Rsvp.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::rsvp_designer_history::Relation::Designer.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct PromoCode {
        code: String,
    }

    #[test]
    fn test_promocodes_and_login() {
        let now = chrono::Utc::now().fixed_offset();
        let mut designer = Model {
            id: 1,
            name: Some("Maison A".to_string()),
            email: Some("studio@example.com".to_string()),
            password: None,
            location: None,
            seat_id: None,
            image: None,
            promocodes: Some(json!([{"code": "PRESS24"}])),
            price: None,
            form_type: FORM_TYPE_SIMPLIFIED.to_string(),
            enabled: 1,
            color: None,
            created_at: now,
            updated_at: now,
        };

        let codes: Vec<PromoCode> = designer.promocodes().decode().unwrap().unwrap();
        assert_eq!(codes[0].code, "PRESS24");
        assert!(!designer.can_log_in());

        designer.password = Some("$argon2id$...".to_string());
        assert!(designer.can_log_in());
    }
}
