use sea_orm::entity::prelude::*;

pub const DEFAULT_IMAP_HOST: &str = "imap.gmail.com";
pub const DEFAULT_IMAP_PORT: i32 = 993;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Encryption {
    #[default]
    #[sea_orm(string_value = "ssl")]
    Ssl,
    #[sea_orm(string_value = "tls")]
    Tls,
}

/// IMAP mailbox credentials owned by a staff user.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "email_accounts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub email: Option<String>,
    pub encryption: Encryption,
    pub imap_host: String,
    pub imap_port: i32,
    pub username: Option<String>,
    pub password: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encryption_values() {
        assert_eq!(Encryption::default().to_value(), "ssl");
        assert_eq!(
            Encryption::try_from_value(&"tls".to_string()).unwrap(),
            Encryption::Tls
        );
        assert!(Encryption::try_from_value(&"starttls".to_string()).is_err());
    }
}
