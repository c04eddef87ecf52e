use sea_orm::{ActiveValue::Set, DatabaseConnection, EntityTrait, PaginatorTrait};
use tracing::{debug, info};

use super::SeedError;
use crate::access::USER_MODEL;
use crate::entities::{model_has_role, permission, role, role_has_permission, user};

const SEEDER: &str = "permissions";

/// Id of the account the super admin role is assigned to.
pub const BOOTSTRAP_USER_ID: i32 = 1;

/// Every permission name, paired with the group it is listed under.
pub const PERMISSIONS: [(&str, &str); 71] = [
    ("view-Counter", "Counter"),
    ("create-Counter", "Counter"),
    ("edit-Counter", "Counter"),
    ("delete-Counter", "Counter"),
    ("view-Role", "Role"),
    ("create-Role", "Role"),
    ("edit-Role", "Role"),
    ("delete-Role", "Role"),
    ("view-Administator", "Administator"),
    ("create-Administator", "Administator"),
    ("edit-Administator", "Administator"),
    ("delete-Administator", "Administator"),
    ("view-Show", "Show"),
    ("create-Show", "Show"),
    ("edit-Show", "Show"),
    ("delete-Show", "Show"),
    ("view-Event", "Event"),
    ("create-Event", "Event"),
    ("edit-Event", "Event"),
    ("delete-Event", "Event"),
    ("view-Designer", "Designer"),
    ("create-Designer", "Designer"),
    ("edit-Designer", "Designer"),
    ("delete-Designer", "Designer"),
    ("view-Seating-Plan", "Seating Plan"),
    ("create-Seating-Plan", "Seating Plan"),
    ("edit-Seating-Plan", "Seating Plan"),
    ("delete-Seating-Plan", "Seating Plan"),
    ("view-cms", "CMS"),
    ("create-cms", "CMS"),
    ("edit-cms", "CMS"),
    ("delete-cms", "CMS"),
    ("view-Model-Staff", "Models & back stage"),
    ("create-Model-Staff", "Models & back stage"),
    ("edit-Model-Staff", "Models & back stage"),
    ("delete-Model-Staff", "Models & back stage"),
    ("view-Seat", "Seat"),
    ("create-Seat", "Seat"),
    ("edit-Seat", "Seat"),
    ("delete-Seat", "Seat"),
    ("view-Pending-Rsvp", "Pending-Rsvp"),
    ("action-Pending-Rsvp", "Pending-Rsvp"),
    ("view-notifications", "Alerts-&-Notification"),
    ("action-notifications", "Alerts-&-Notification"),
    ("view-Rejected-Rsvp", "Rejected-Rsvp"),
    ("action-Rejected-Rsvp", "Rejected-Rsvp"),
    ("view-Rsvp-List", "Rsvp-List"),
    ("view-Rsvp-email", "Rsvp-List"),
    ("view-Rsvp-phone", "Rsvp-List"),
    ("action-Rsvp-List", "Rsvp-List"),
    ("view-Waiting-List", "Waiting-List"),
    ("action-Waiting-List", "Waiting-List"),
    ("view-Pre-Approved-List", "Pre-Approved-List"),
    ("action-Pre-Approved-List", "Pre-Approved-List"),
    ("view-Event-Report", "Event-Report"),
    ("action-Event-Report", "Event-Report"),
    ("view-Person-Report", "Person-Report"),
    ("action-Person-Report", "Person-Report"),
    ("view-sub-event-report", "Sub-Event-Report"),
    ("action-sub-event-report", "Sub-Event-Report"),
    ("view-Rsvp-Report", "Rsvp-Report"),
    ("action-Rsvp-Report", "Rsvp-Report"),
    ("view-Event-History", "Event-History"),
    ("action-Event-History", "Event-History"),
    ("view-Promo-Code", "Promo-Code"),
    ("action-Promo-Code", "Promo-Code"),
    ("view-Projects", "Projects"),
    ("view-subscribe-email", "subscribe-email"),
    ("action-subscribe-email", "subscribe-email"),
    ("view-setting", "setting"),
    ("app-access", "App-Access"),
];

/// Inserts the permission catalogue, grants all of it to the super admin
/// role and assigns that role to the bootstrap user.
///
/// Rows go in one at a time. Running this against a table that already
/// holds the catalogue stops at the first duplicate and keeps whatever
/// was there.
pub async fn seed(db: &DatabaseConnection) -> Result<(), SeedError> {
    let mut permission_ids = Vec::with_capacity(PERMISSIONS.len());
    for (name, group) in PERMISSIONS {
        let permission_model = permission::ActiveModel {
            name: Set(name.to_string()),
            guard_name: Set(permission::WEB_GUARD.to_string()),
            value: Set(Some(group.to_string())),
            ..Default::default()
        };
        let inserted = permission::Entity::insert(permission_model)
            .exec(db)
            .await
            .map_err(SeedError::on_insert(SEEDER))?;
        permission_ids.push(inserted.last_insert_id);
    }
    info!("Created {} permissions", permission_ids.len());

    let role_model = role::ActiveModel {
        name: Set(role::SUPER_ADMIN.to_string()),
        guard_name: Set(permission::WEB_GUARD.to_string()),
        ..Default::default()
    };
    let role_id = role::Entity::insert(role_model)
        .exec(db)
        .await
        .map_err(SeedError::on_insert(SEEDER))?
        .last_insert_id;

    debug!("Granting {} permissions to role {}", permission_ids.len(), role_id);
    let grants = permission_ids
        .into_iter()
        .map(|permission_id| role_has_permission::ActiveModel {
            permission_id: Set(permission_id),
            role_id: Set(role_id),
        });
    role_has_permission::Entity::insert_many(grants)
        .exec_without_returning(db)
        .await
        .map_err(SeedError::on_insert(SEEDER))?;

    let bootstrap_users = user::Entity::find_by_id(BOOTSTRAP_USER_ID).count(db).await?;
    if bootstrap_users == 0 {
        return Err(SeedError::MissingBootstrapUser);
    }

    let assignment = model_has_role::ActiveModel {
        role_id: Set(role_id),
        model_type: Set(USER_MODEL.to_string()),
        model_id: Set(BOOTSTRAP_USER_ID),
    };
    model_has_role::Entity::insert(assignment)
        .exec_without_returning(db)
        .await
        .map_err(SeedError::on_insert(SEEDER))?;
    info!("Assigned {} to user {}", role::SUPER_ADMIN, BOOTSTRAP_USER_ID);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    use crate::access;
    use crate::schema_store::SchemaStore;
    use crate::seed::{BootstrapAdmin, bootstrap};
    use sea_orm::Database;
    use tempfile::TempDir;

    struct PlainHasher;

    impl crate::seed::CredentialHasher for PlainHasher {
        fn hash(&self, password: &str) -> Result<String, SeedError> {
            Ok(format!("plain:{password}"))
        }
    }

    async fn migrated() -> (DatabaseConnection, TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite:{}?mode=rwc", dir.path().join("seed.db").display());
        let db = Database::connect(&url).await.unwrap();
        SchemaStore::new(db.clone()).apply_pending().await.unwrap();
        (db, dir)
    }

    #[test]
    fn test_catalogue_has_no_duplicates() {
        let names: BTreeSet<&str> = PERMISSIONS.iter().map(|(name, _)| *name).collect();
        assert_eq!(names.len(), PERMISSIONS.len());
    }

    #[tokio::test]
    async fn test_seed_grants_everything_to_bootstrap_user() {
        let (db, _dir) = migrated().await;
        let admin = BootstrapAdmin {
            email: "admin@example.com".to_string(),
            password: "pw".to_string(),
        };
        bootstrap::seed_admin(&db, &admin, &PlainHasher).await.unwrap();

        seed(&db).await.unwrap();

        assert_eq!(
            permission::Entity::find().count(&db).await.unwrap(),
            PERMISSIONS.len() as u64
        );
        assert_eq!(
            role_has_permission::Entity::find().count(&db).await.unwrap(),
            PERMISSIONS.len() as u64
        );
        assert_eq!(
            access::roles_of(&db, BOOTSTRAP_USER_ID).await.unwrap(),
            vec![role::SUPER_ADMIN.to_string()]
        );
        assert!(
            access::has_permission(&db, BOOTSTRAP_USER_ID, "app-access")
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn test_missing_bootstrap_user() {
        let (db, _dir) = migrated().await;

        let result = seed(&db).await;
        assert!(matches!(result, Err(SeedError::MissingBootstrapUser)));

        // The catalogue and grants are kept
        assert_eq!(
            permission::Entity::find().count(&db).await.unwrap(),
            PERMISSIONS.len() as u64
        );
        assert_eq!(model_has_role::Entity::find().count(&db).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_second_run_hits_uniqueness() {
        let (db, _dir) = migrated().await;
        let admin = BootstrapAdmin {
            email: "admin@example.com".to_string(),
            password: "pw".to_string(),
        };
        bootstrap::seed_admin(&db, &admin, &PlainHasher).await.unwrap();
        seed(&db).await.unwrap();

        match seed(&db).await {
            Err(SeedError::Uniqueness { seeder, .. }) => assert_eq!(seeder, SEEDER),
            other => panic!("expected Uniqueness, got {:?}", other),
        }
        assert_eq!(
            permission::Entity::find().count(&db).await.unwrap(),
            PERMISSIONS.len() as u64
        );
        assert_eq!(role::Entity::find().count(&db).await.unwrap(), 1);
        assert_eq!(
            role_has_permission::Entity::find().count(&db).await.unwrap(),
            PERMISSIONS.len() as u64
        );
    }
}
