use migration::{Migrator, MigratorTrait};
use runway_admin::{
    access, database,
    entities::{
        check_user, cms, designer, email_account, email_setting, event, event_booking,
        event_designer, prelude::*, role, rsvp, rsvp_designer_history, template, upload_rsvp,
        user,
    },
    payload::Payload,
    schema_store::SchemaStore,
    seed::{
        self, BootstrapAdmin, CredentialHasher, SeedError, Seeder, cms::HeaderCopy,
        role_permission::PERMISSIONS,
    },
};
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, prelude::Json,
};
use tempfile::TempDir;

struct PlainHasher;

impl CredentialHasher for PlainHasher {
    fn hash(&self, password: &str) -> Result<String, SeedError> {
        Ok(format!("plain:{password}"))
    }
}

fn admin() -> BootstrapAdmin {
    BootstrapAdmin {
        email: "Info@ohvu.io".to_string(),
        password: "PentaGrama_March".to_string(),
    }
}

async fn migrated() -> (SchemaStore, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite:{}?mode=rwc", dir.path().join("runway.db").display());
    let store = database::setup_database(&url).await.unwrap();
    (store, dir)
}

async fn seeded() -> (SchemaStore, TempDir) {
    let (store, dir) = migrated().await;
    seed::seed_all(store.connection(), &admin(), &PlainHasher)
        .await
        .unwrap();
    (store, dir)
}

async fn insert_rsvp(db: &DatabaseConnection, email: &str) -> i32 {
    Rsvp::insert(rsvp::ActiveModel {
        email: Set(Some(email.to_string())),
        ..Default::default()
    })
    .exec(db)
    .await
    .unwrap()
    .last_insert_id
}

async fn cms_pages(db: &DatabaseConnection) -> Vec<(i32, String)> {
    Cms::find()
        .select_only()
        .column(cms::Column::Id)
        .column(cms::Column::Page)
        .order_by_asc(cms::Column::Id)
        .into_tuple()
        .all(db)
        .await
        .unwrap()
}

#[tokio::test]
async fn test_migrate_reaches_last_registered_step() {
    let (store, _dir) = migrated().await;
    let last = Migrator::migrations().last().unwrap().name().to_string();

    assert_eq!(store.current_version().await.unwrap(), Some(last.clone()));
    assert!(store.apply_pending().await.unwrap().is_empty());
    assert_eq!(store.current_version().await.unwrap(), Some(last));
}

#[tokio::test]
async fn test_seed_creates_one_admin_and_one_super_admin() {
    let (store, _dir) = seeded().await;
    let db = store.connection();

    let admins = User::find()
        .filter(user::Column::Role.eq(user::ROLE_ADMIN))
        .count(db)
        .await
        .unwrap();
    assert_eq!(admins, 1);
    let email: String = User::find_by_id(1)
        .select_only()
        .column(user::Column::Email)
        .into_tuple()
        .one(db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(email, "Info@ohvu.io");
    let password: String = User::find_by_id(1)
        .select_only()
        .column(user::Column::Password)
        .into_tuple()
        .one(db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(password, "plain:PentaGrama_March");

    let super_admins = Role::find()
        .filter(role::Column::Name.eq(role::SUPER_ADMIN))
        .count(db)
        .await
        .unwrap();
    assert_eq!(super_admins, 1);

    for (name, _) in PERMISSIONS {
        assert!(access::has_permission(db, 1, name).await.unwrap(), "{name}");
    }
    assert_eq!(Template::find().count(db).await.unwrap(), 4);
    assert_eq!(Setting::find().count(db).await.unwrap(), 1);
    assert_eq!(Country::find().count(db).await.unwrap(), 1);
}

#[tokio::test]
async fn test_templates_follow_naming() {
    let (store, _dir) = seeded().await;
    let rows: Vec<(Option<String>, Option<String>, Option<String>)> = Template::find()
        .select_only()
        .column(template::Column::Name)
        .column(template::Column::File)
        .column(template::Column::Image)
        .order_by_asc(template::Column::Id)
        .into_tuple()
        .all(store.connection())
        .await
        .unwrap();

    assert_eq!(rows.len(), 4);
    assert_eq!(
        rows[2],
        (
            Some("Template 3".to_string()),
            Some("temp3".to_string()),
            Some("templates/temp3.jpg".to_string())
        )
    );
}

#[tokio::test]
async fn test_header_copy_round_trips() {
    let (store, _dir) = seeded().await;
    let data: Option<Json> = Cms::find()
        .select_only()
        .column(cms::Column::Data)
        .filter(cms::Column::Page.eq("header"))
        .into_tuple()
        .one(store.connection())
        .await
        .unwrap()
        .unwrap();

    let payload = Payload::from_json(data);
    let header: HeaderCopy = payload.decode().unwrap().unwrap();
    assert_eq!(header.list1, "HOME");
    assert_eq!(header.list1_url, "https://dubaifashionweek.org/");

    let encoded = Payload::encode(&header).unwrap();
    assert_eq!(encoded, payload);
}

#[tokio::test]
async fn test_cms_reseed_replaces_pages() {
    let (store, _dir) = seeded().await;
    let db = store.connection();
    let before = cms_pages(db).await;

    Seeder::Cms.run(db).await.unwrap();

    // Same rows under the same ids as the first seed
    let after = cms_pages(db).await;
    assert_eq!(after, before);
    assert_eq!(after.first().map(|(id, _)| *id), Some(1));
    let headers = Cms::find()
        .filter(cms::Column::Page.eq("header"))
        .count(db)
        .await
        .unwrap();
    assert_eq!(headers, 1);
}

#[tokio::test]
async fn test_permission_reseed_keeps_first_grants() {
    let (store, _dir) = seeded().await;
    let db = store.connection();

    let result = Seeder::Permissions.run(db).await;
    assert!(matches!(
        result,
        Err(SeedError::Uniqueness {
            seeder: "permissions",
            ..
        })
    ));

    assert_eq!(
        Permission::find().count(db).await.unwrap(),
        PERMISSIONS.len() as u64
    );
    assert_eq!(
        RoleHasPermission::find().count(db).await.unwrap(),
        PERMISSIONS.len() as u64
    );
    assert_eq!(
        access::roles_of(db, 1).await.unwrap(),
        vec![role::SUPER_ADMIN.to_string()]
    );
}

#[tokio::test]
async fn test_second_admin_seed_is_a_uniqueness_error() {
    let (store, _dir) = seeded().await;
    let result = seed::seed_all(store.connection(), &admin(), &PlainHasher).await;
    assert!(matches!(
        result,
        Err(SeedError::Uniqueness { seeder: "admin", .. })
    ));
}

#[tokio::test]
async fn test_check_users_accept_duplicates() {
    let (store, _dir) = migrated().await;
    let db = store.connection();

    for _ in 0..2 {
        CheckUser::insert(check_user::ActiveModel {
            ip: Set(Some("10.0.0.1".to_string())),
            phone: Set(Some("+971500000000".to_string())),
            email: Set(Some("guest@example.com".to_string())),
            ..Default::default()
        })
        .exec(db)
        .await
        .unwrap();
    }

    let rows = CheckUser::find()
        .filter(check_user::Column::Phone.eq("+971500000000"))
        .count(db)
        .await
        .unwrap();
    assert_eq!(rows, 2);
}

#[tokio::test]
async fn test_deleting_an_event_removes_its_bookings() {
    let (store, _dir) = migrated().await;
    let db = store.connection();

    let event_id = Event::insert(event::ActiveModel {
        name: Set(Some("Opening night".to_string())),
        ..Default::default()
    })
    .exec(db)
    .await
    .unwrap()
    .last_insert_id;
    let guest = insert_rsvp(db, "guest@example.com").await;

    EventBooking::insert(event_booking::ActiveModel {
        event_id: Set(event_id),
        user_id: Set(guest),
        seat: Set(Some(r#"{"row":"A","seat":4}"#.to_string())),
        ..Default::default()
    })
    .exec(db)
    .await
    .unwrap();
    assert_eq!(EventBooking::find().count(db).await.unwrap(), 1);

    let deleted = Event::delete_by_id(event_id).exec(db).await.unwrap();
    assert_eq!(deleted.rows_affected, 1);
    assert_eq!(EventBooking::find().count(db).await.unwrap(), 0);
    assert_eq!(Rsvp::find().count(db).await.unwrap(), 1);
}

#[tokio::test]
async fn test_guests_reach_events_through_bookings() {
    let (store, _dir) = migrated().await;
    let db = store.connection();

    let event_id = Event::insert(event::ActiveModel {
        name: Set(Some("Closing show".to_string())),
        ..Default::default()
    })
    .exec(db)
    .await
    .unwrap()
    .last_insert_id;
    let booked = insert_rsvp(db, "booked@example.com").await;
    insert_rsvp(db, "unbooked@example.com").await;

    EventBooking::insert(event_booking::ActiveModel {
        event_id: Set(event_id),
        user_id: Set(booked),
        ..Default::default()
    })
    .exec(db)
    .await
    .unwrap();

    let guests: Vec<Option<String>> = Rsvp::find()
        .select_only()
        .column(rsvp::Column::Email)
        .inner_join(Event)
        .filter(event::Column::Id.eq(event_id))
        .into_tuple()
        .all(db)
        .await
        .unwrap();
    assert_eq!(guests, vec![Some("booked@example.com".to_string())]);
}

#[tokio::test]
async fn test_designer_links_follow_their_rows() {
    let (store, _dir) = migrated().await;
    let db = store.connection();

    let event_id = Event::insert(event::ActiveModel {
        name: Set(Some("Resort collections".to_string())),
        ..Default::default()
    })
    .exec(db)
    .await
    .unwrap()
    .last_insert_id;
    let mut designers = Vec::new();
    for name in ["Maison A", "Maison B"] {
        let id = Designer::insert(designer::ActiveModel {
            name: Set(Some(name.to_string())),
            ..Default::default()
        })
        .exec(db)
        .await
        .unwrap()
        .last_insert_id;
        EventDesigner::insert(event_designer::ActiveModel {
            designer_id: Set(id),
            event_id: Set(event_id),
            ..Default::default()
        })
        .exec(db)
        .await
        .unwrap();
        designers.push(id);
    }
    let guest = insert_rsvp(db, "guest@example.com").await;
    RsvpDesignerHistory::insert(rsvp_designer_history::ActiveModel {
        rsvp_id: Set(Some(guest)),
        designer_id: Set(Some(designers[0])),
        ..Default::default()
    })
    .exec(db)
    .await
    .unwrap();

    let lineup: Vec<Option<String>> = Designer::find()
        .select_only()
        .column(designer::Column::Name)
        .inner_join(Event)
        .filter(event::Column::Id.eq(event_id))
        .order_by_asc(designer::Column::Id)
        .into_tuple()
        .all(db)
        .await
        .unwrap();
    assert_eq!(
        lineup,
        vec![Some("Maison A".to_string()), Some("Maison B".to_string())]
    );
    let invited_by: Vec<i32> = Designer::find()
        .select_only()
        .column(designer::Column::Id)
        .inner_join(Rsvp)
        .filter(rsvp::Column::Id.eq(guest))
        .into_tuple()
        .all(db)
        .await
        .unwrap();
    assert_eq!(invited_by, vec![designers[0]]);

    Designer::delete_by_id(designers[0]).exec(db).await.unwrap();
    assert_eq!(EventDesigner::find().count(db).await.unwrap(), 1);
    assert_eq!(RsvpDesignerHistory::find().count(db).await.unwrap(), 0);
    assert_eq!(Event::find().count(db).await.unwrap(), 1);
    assert_eq!(Rsvp::find().count(db).await.unwrap(), 1);

    Event::delete_by_id(event_id).exec(db).await.unwrap();
    assert_eq!(EventDesigner::find().count(db).await.unwrap(), 0);
}

#[tokio::test]
async fn test_standalone_tables_store_rows() {
    let (store, _dir) = migrated().await;
    let db = store.connection();

    let setting = EmailSetting::insert(email_setting::ActiveModel {
        subject: Set(Some("You are invited".to_string())),
        blacklist: Set(Some("spam@example.com".to_string())),
        ..Default::default()
    })
    .exec(db)
    .await
    .unwrap()
    .last_insert_id;
    let blacklist: Option<String> = EmailSetting::find_by_id(setting)
        .select_only()
        .column(email_setting::Column::Blacklist)
        .into_tuple()
        .one(db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(blacklist.as_deref(), Some("spam@example.com"));

    UploadRsvp::insert(upload_rsvp::ActiveModel {
        name: Set(Some("Press guest".to_string())),
        category: Set(Some("press".to_string())),
        company: Set(Some("Daily Runway".to_string())),
        ..Default::default()
    })
    .exec(db)
    .await
    .unwrap();
    let press = UploadRsvp::find()
        .filter(upload_rsvp::Column::Category.eq("press"))
        .count(db)
        .await
        .unwrap();
    assert_eq!(press, 1);
}

#[tokio::test]
async fn test_version_marker_survives_rollback_of_irreversible_step() {
    let (store, _dir) = migrated().await;

    let report = store.rollback_last(1).await.unwrap();
    assert!(report.warnings.is_empty());
    assert_eq!(
        store.current_version().await.unwrap().as_deref(),
        Some("m20250409_101551_create_email_accounts_table")
    );

    let report = store.rollback_last(2).await.unwrap();
    assert_eq!(report.warnings.len(), 1);
    assert_eq!(
        report.warnings[0].step,
        "m20250306_120912_add_dimensions_to_seat_plan_blocks"
    );

    // Re-applying over the columns the empty inverse left behind is a conflict
    assert!(store.apply_pending().await.is_err());
    assert_eq!(
        store.current_version().await.unwrap().as_deref(),
        Some("m20250129_164724_create_messages_table")
    );
}

#[tokio::test]
async fn test_defaults_encode_initial_states() {
    let (store, _dir) = migrated().await;
    let db = store.connection();

    let event_id = Event::insert(event::ActiveModel {
        name: Set(Some("Press preview".to_string())),
        ..Default::default()
    })
    .exec(db)
    .await
    .unwrap()
    .last_insert_id;
    let event_type: String = Event::find_by_id(event_id)
        .select_only()
        .column(event::Column::EventType)
        .into_tuple()
        .one(db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(event_type, event::EVENT_TYPE_BY_EVENT);

    let staff = User::insert(user::ActiveModel {
        email: Set("staff@example.com".to_string()),
        password: Set("plain:pw".to_string()),
        ..Default::default()
    })
    .exec(db)
    .await
    .unwrap()
    .last_insert_id;
    let account = EmailAccount::insert(email_account::ActiveModel {
        user_id: Set(staff),
        ..Default::default()
    })
    .exec(db)
    .await
    .unwrap()
    .last_insert_id;

    let (encryption, host, port): (email_account::Encryption, String, i32) =
        EmailAccount::find_by_id(account)
            .select_only()
            .column(email_account::Column::Encryption)
            .column(email_account::Column::ImapHost)
            .column(email_account::Column::ImapPort)
            .into_tuple()
            .one(db)
            .await
            .unwrap()
            .unwrap();
    assert_eq!(encryption, email_account::Encryption::Ssl);
    assert_eq!(host, email_account::DEFAULT_IMAP_HOST);
    assert_eq!(port, email_account::DEFAULT_IMAP_PORT);
}
