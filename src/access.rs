//! Read-only permission checks over the role and permission tables.

use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait,
};

use crate::entities::{model_has_permission, model_has_role, permission, role, role_has_permission};

/// Type tag recorded for user accounts in the polymorphic assignment tables.
pub const USER_MODEL: &str = "App\\Models\\User";

/// Role names assigned to a user, sorted.
pub async fn roles_of(db: &DatabaseConnection, user_id: i32) -> Result<Vec<String>, DbErr> {
    role::Entity::find()
        .select_only()
        .column(role::Column::Name)
        .inner_join(model_has_role::Entity)
        .filter(model_has_role::Column::ModelType.eq(USER_MODEL))
        .filter(model_has_role::Column::ModelId.eq(user_id))
        .order_by_asc(role::Column::Name)
        .into_tuple::<String>()
        .all(db)
        .await
}

/// Whether a user holds a permission, either directly or through a role.
pub async fn has_permission(
    db: &DatabaseConnection,
    user_id: i32,
    name: &str,
) -> Result<bool, DbErr> {
    let direct = model_has_permission::Entity::find()
        .inner_join(permission::Entity)
        .filter(permission::Column::Name.eq(name))
        .filter(model_has_permission::Column::ModelType.eq(USER_MODEL))
        .filter(model_has_permission::Column::ModelId.eq(user_id))
        .count(db)
        .await?;
    if direct > 0 {
        return Ok(true);
    }

    let through_roles = role_has_permission::Entity::find()
        .inner_join(permission::Entity)
        .join(JoinType::InnerJoin, role_has_permission::Relation::Role.def())
        .join(JoinType::InnerJoin, role::Relation::ModelHasRole.def())
        .filter(permission::Column::Name.eq(name))
        .filter(model_has_role::Column::ModelType.eq(USER_MODEL))
        .filter(model_has_role::Column::ModelId.eq(user_id))
        .count(db)
        .await?;

    Ok(through_roles > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema_store::SchemaStore;
    use sea_orm::{ActiveValue::Set, Database};
    use tempfile::TempDir;

    async fn migrated() -> (DatabaseConnection, TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite:{}?mode=rwc", dir.path().join("access.db").display());
        let db = Database::connect(&url).await.unwrap();
        SchemaStore::new(db.clone()).apply_pending().await.unwrap();
        (db, dir)
    }

    async fn create_permission(db: &DatabaseConnection, name: &str) -> i32 {
        permission::Entity::insert(permission::ActiveModel {
            name: Set(name.to_string()),
            guard_name: Set(permission::WEB_GUARD.to_string()),
            ..Default::default()
        })
        .exec(db)
        .await
        .unwrap()
        .last_insert_id
    }

    #[tokio::test]
    async fn test_direct_grant() {
        let (db, _dir) = migrated().await;
        let view = create_permission(&db, "view-Event").await;
        create_permission(&db, "edit-Event").await;

        model_has_permission::Entity::insert(model_has_permission::ActiveModel {
            permission_id: Set(view),
            model_type: Set(USER_MODEL.to_string()),
            model_id: Set(7),
        })
        .exec_without_returning(&db)
        .await
        .unwrap();

        assert!(has_permission(&db, 7, "view-Event").await.unwrap());
        assert!(!has_permission(&db, 7, "edit-Event").await.unwrap());
        assert!(!has_permission(&db, 8, "view-Event").await.unwrap());
        assert!(roles_of(&db, 7).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_grant_through_role() {
        let (db, _dir) = migrated().await;
        let view = create_permission(&db, "view-Show").await;

        let editor = role::Entity::insert(role::ActiveModel {
            name: Set("Editor".to_string()),
            guard_name: Set(permission::WEB_GUARD.to_string()),
            ..Default::default()
        })
        .exec(&db)
        .await
        .unwrap()
        .last_insert_id;

        role_has_permission::Entity::insert(role_has_permission::ActiveModel {
            permission_id: Set(view),
            role_id: Set(editor),
        })
        .exec_without_returning(&db)
        .await
        .unwrap();

        // Assignments recorded for other model types are ignored
        for model_type in [USER_MODEL, "App\\Models\\Designer"] {
            model_has_role::Entity::insert(model_has_role::ActiveModel {
                role_id: Set(editor),
                model_type: Set(model_type.to_string()),
                model_id: Set(if model_type == USER_MODEL { 3 } else { 4 }),
            })
            .exec_without_returning(&db)
            .await
            .unwrap();
        }

        assert_eq!(roles_of(&db, 3).await.unwrap(), vec!["Editor".to_string()]);
        assert!(has_permission(&db, 3, "view-Show").await.unwrap());
        assert!(!has_permission(&db, 4, "view-Show").await.unwrap());
        assert!(!has_permission(&db, 3, "delete-Show").await.unwrap());
    }
}
