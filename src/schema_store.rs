use std::collections::{BTreeMap, BTreeSet};

use migration::{Downgrade, Migrator, MigratorTrait};
use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr, Statement};
use tracing::{debug, info, warn};

/// Live schema as table name to column names. The migration log is excluded.
pub type SchemaShape = BTreeMap<String, BTreeSet<String>>;

const MIGRATION_TABLE: &str = "seaql_migrations";

#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("step {step} failed to apply")]
    Conflict {
        step: String,
        #[source]
        source: DbErr,
    },

    #[error("step {step} failed to roll back")]
    Rollback {
        step: String,
        #[source]
        source: DbErr,
    },

    #[error("step {next} is registered after {previous}")]
    OutOfOrder { previous: String, next: String },

    #[error(transparent)]
    Db(#[from] DbErr),
}

/// A rolled back step whose inverse left its changes in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IrreversibleStepWarning {
    pub step: String,
    pub reason: Downgrade,
}

impl std::fmt::Display for IrreversibleStepWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.reason {
            Downgrade::Reversible => write!(f, "{} was rolled back", self.step),
            Downgrade::Empty => write!(f, "{} has an empty inverse", self.step),
            Downgrade::MissingTarget(target) => {
                write!(f, "{} rolls back `{}`, which does not exist", self.step, target)
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct RollbackReport {
    /// Newest first.
    pub rolled_back: Vec<String>,
    pub warnings: Vec<IrreversibleStepWarning>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepStatus {
    pub name: String,
    pub applied: bool,
    pub downgrade: Downgrade,
}

/// Applies and rolls back the registered migration steps against one database.
///
/// Steps run one at a time so a failure can be attributed to the step that
/// caused it. The version marker only ever moves past committed steps.
#[derive(Clone)]
pub struct SchemaStore {
    db: DatabaseConnection,
}

impl SchemaStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    pub async fn apply_pending(&self) -> Result<Vec<String>, SchemaError> {
        self.apply(None).await
    }

    /// Applies at most `limit` pending steps, returning the names applied.
    pub async fn apply(&self, limit: Option<u32>) -> Result<Vec<String>, SchemaError> {
        verify_order()?;

        let pending = self.pending().await?;
        let take = limit.map_or(pending.len(), |limit| limit as usize);
        let mut applied = Vec::new();

        for step in pending.into_iter().take(take) {
            debug!("Applying {}", step);
            Migrator::up(&self.db, Some(1))
                .await
                .map_err(|source| SchemaError::Conflict {
                    step: step.clone(),
                    source,
                })?;
            info!("Applied {}", step);
            applied.push(step);
        }

        Ok(applied)
    }

    /// Runs the inverses of the last `n` applied steps, newest first.
    pub async fn rollback_last(&self, n: u32) -> Result<RollbackReport, SchemaError> {
        let mut applied = self.applied().await?;
        let mut report = RollbackReport::default();

        for _ in 0..n {
            let Some(step) = applied.pop() else {
                break;
            };

            debug!("Rolling back {}", step);
            Migrator::down(&self.db, Some(1))
                .await
                .map_err(|source| SchemaError::Rollback {
                    step: step.clone(),
                    source,
                })?;

            let reason = Migrator::downgrade_of(&step).unwrap_or(Downgrade::Reversible);
            if !reason.is_reversible() {
                let warning = IrreversibleStepWarning {
                    step: step.clone(),
                    reason,
                };
                warn!("{}", warning);
                report.warnings.push(warning);
            } else {
                info!("Rolled back {}", step);
            }
            report.rolled_back.push(step);
        }

        Ok(report)
    }

    pub async fn current_version(&self) -> Result<Option<String>, SchemaError> {
        Ok(self.applied().await?.pop())
    }

    pub async fn applied(&self) -> Result<Vec<String>, SchemaError> {
        Ok(Migrator::get_applied_migrations(&self.db)
            .await?
            .iter()
            .map(|migration| migration.name().to_string())
            .collect())
    }

    pub async fn pending(&self) -> Result<Vec<String>, SchemaError> {
        Ok(Migrator::get_pending_migrations(&self.db)
            .await?
            .iter()
            .map(|migration| migration.name().to_string())
            .collect())
    }

    /// Every registered step in order, marked applied or pending.
    pub async fn status(&self) -> Result<Vec<StepStatus>, SchemaError> {
        let applied: BTreeSet<String> = self.applied().await?.into_iter().collect();

        Ok(Migrator::steps()
            .into_iter()
            .map(|(step, downgrade)| {
                let name = step.name().to_string();
                StepStatus {
                    applied: applied.contains(&name),
                    name,
                    downgrade,
                }
            })
            .collect())
    }

    pub async fn shape(&self) -> Result<SchemaShape, SchemaError> {
        let backend = self.db.get_database_backend();
        let sql = match backend {
            DatabaseBackend::Sqlite => {
                "SELECT m.name AS table_name, p.name AS column_name \
                 FROM sqlite_master m JOIN pragma_table_info(m.name) p \
                 WHERE m.type = 'table' AND m.name NOT LIKE 'sqlite_%'"
            }
            DatabaseBackend::Postgres => {
                "SELECT table_name::text AS table_name, column_name::text AS column_name \
                 FROM information_schema.columns WHERE table_schema = current_schema()"
            }
            DatabaseBackend::MySql => {
                "SELECT table_name AS table_name, column_name AS column_name \
                 FROM information_schema.columns WHERE table_schema = DATABASE()"
            }
        };

        let rows = self
            .db
            .query_all(Statement::from_string(backend, sql))
            .await?;

        let mut shape = SchemaShape::new();
        for row in rows {
            let table: String = row.try_get("", "table_name")?;
            let column: String = row.try_get("", "column_name")?;
            if table == MIGRATION_TABLE {
                continue;
            }
            shape.entry(table).or_default().insert(column);
        }

        Ok(shape)
    }
}

/// Rejects a registry whose version keys are not strictly increasing.
pub fn verify_order() -> Result<(), SchemaError> {
    let names: Vec<String> = Migrator::migrations()
        .iter()
        .map(|step| step.name().to_string())
        .collect();
    check_order(&names)
}

fn check_order(names: &[String]) -> Result<(), SchemaError> {
    for pair in names.windows(2) {
        if pair[0] >= pair[1] {
            return Err(SchemaError::OutOfOrder {
                previous: pair[0].clone(),
                next: pair[1].clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::Database;
    use tempfile::TempDir;

    async fn store() -> (SchemaStore, TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite:{}?mode=rwc", dir.path().join("schema.db").display());
        let db = Database::connect(&url).await.unwrap();
        (SchemaStore::new(db), dir)
    }

    async fn exec(store: &SchemaStore, sql: &str) -> Result<(), DbErr> {
        store
            .connection()
            .execute(Statement::from_string(DatabaseBackend::Sqlite, sql))
            .await
            .map(|_| ())
    }

    fn names_through(last: &str) -> u32 {
        let position = Migrator::migrations()
            .iter()
            .position(|step| step.name() == last)
            .unwrap();
        position as u32 + 1
    }

    #[test]
    fn test_check_order() {
        let ordered = vec!["m2022_a".to_string(), "m2023_a".to_string()];
        assert!(check_order(&ordered).is_ok());

        let swapped = vec!["m2023_a".to_string(), "m2022_a".to_string()];
        match check_order(&swapped) {
            Err(SchemaError::OutOfOrder { previous, next }) => {
                assert_eq!(previous, "m2023_a");
                assert_eq!(next, "m2022_a");
            }
            other => panic!("expected OutOfOrder, got {:?}", other),
        }

        let duplicated = vec!["m2022_a".to_string(), "m2022_a".to_string()];
        assert!(check_order(&duplicated).is_err());
        assert!(verify_order().is_ok());
    }

    #[tokio::test]
    async fn test_apply_pending_reaches_last_step() {
        let (store, _dir) = store().await;
        assert_eq!(store.current_version().await.unwrap(), None);

        let applied = store.apply_pending().await.unwrap();
        let last = Migrator::migrations().last().unwrap().name().to_string();
        assert_eq!(applied.len(), Migrator::migrations().len());
        assert_eq!(store.current_version().await.unwrap(), Some(last));

        // Nothing left to do
        assert!(store.apply_pending().await.unwrap().is_empty());
        assert!(store.pending().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_apply_with_limit() {
        let (store, _dir) = store().await;
        let applied = store.apply(Some(3)).await.unwrap();
        assert_eq!(applied.len(), 3);
        assert_eq!(
            store.current_version().await.unwrap().as_deref(),
            Some("m20220101_000001_create_settings_table")
        );

        let status = store.status().await.unwrap();
        assert_eq!(status.iter().filter(|s| s.applied).count(), 3);
        assert!(!status[3].applied);
    }

    #[tokio::test]
    async fn test_rollback_round_trip_keeps_irreversible_columns() {
        let (store, _dir) = store().await;
        let checkpoint = "m20241230_111518_add_designer_id_to_users";
        store.apply(Some(names_through(checkpoint))).await.unwrap();
        let before = store.shape().await.unwrap();

        store.apply_pending().await.unwrap();
        let report = store.rollback_last(8).await.unwrap();

        assert_eq!(report.rolled_back.len(), 8);
        assert_eq!(
            report.rolled_back.first().map(String::as_str),
            Some("m20250421_182036_create_projects_table")
        );
        let warned: Vec<&str> = report.warnings.iter().map(|w| w.step.as_str()).collect();
        assert_eq!(
            warned,
            vec![
                "m20250306_120912_add_dimensions_to_seat_plan_blocks",
                "m20250122_171135_add_demographics_to_rsvps",
                "m20250120_153712_add_pre_show_approval_to_rsvps",
                "m20250120_152912_add_show_type_to_shows",
            ]
        );
        assert_eq!(report.warnings[3].reason, Downgrade::MissingTarget("show"));
        assert_eq!(
            store.current_version().await.unwrap().as_deref(),
            Some(checkpoint)
        );

        let mut expected = before.clone();
        let leftovers = [
            ("rsvps", "pre_show_approval"),
            ("rsvps", "nationality"),
            ("rsvps", "age_range"),
            ("rsvps", "salutation"),
            ("seat_plan_blocks", "type"),
            ("seat_plan_blocks", "height"),
            ("seat_plan_blocks", "width"),
            ("shows", "show_type"),
        ];
        for (table, column) in leftovers {
            expected
                .get_mut(table)
                .unwrap()
                .insert(column.to_string());
        }

        let after = store.shape().await.unwrap();
        assert!(!after.contains_key("messages"));
        assert!(!after.contains_key("projects"));
        assert_eq!(after, expected);
    }

    #[tokio::test]
    async fn test_rollback_past_the_first_step_stops() {
        let (store, _dir) = store().await;
        store.apply(Some(2)).await.unwrap();

        let report = store.rollback_last(5).await.unwrap();
        assert_eq!(report.rolled_back.len(), 2);
        assert!(report.warnings.is_empty());
        assert_eq!(store.current_version().await.unwrap(), None);
        assert!(store.shape().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_seat_id_applies_over_existing_designers() {
        let (store, _dir) = store().await;
        let step = "m20240104_154651_add_seat_id_to_designers";
        store.apply(Some(names_through(step) - 1)).await.unwrap();

        exec(&store, "INSERT INTO designers (name) VALUES ('Maison A')")
            .await
            .unwrap();

        let applied = store.apply(Some(1)).await.unwrap();
        assert_eq!(applied, vec![step.to_string()]);
        let shape = store.shape().await.unwrap();
        assert!(shape["designers"].contains("seat_id"));
    }

    #[tokio::test]
    async fn test_conflicting_step_leaves_marker_in_place() {
        let (store, _dir) = store().await;
        let step = "m20240104_154651_add_seat_id_to_designers";
        store.apply(Some(names_through(step) - 1)).await.unwrap();
        let marker = store.current_version().await.unwrap();

        exec(&store, "ALTER TABLE designers ADD COLUMN seat_id integer")
            .await
            .unwrap();
        exec(&store, "INSERT INTO designers (name, seat_id) VALUES ('Maison B', 99)")
            .await
            .unwrap();

        match store.apply_pending().await {
            Err(SchemaError::Conflict { step: failed, .. }) => assert_eq!(failed, step),
            other => panic!("expected Conflict, got {:?}", other),
        }
        assert_eq!(store.current_version().await.unwrap(), marker);
        assert_eq!(store.pending().await.unwrap().first().map(String::as_str), Some(step));
    }

    #[tokio::test]
    async fn test_existing_table_conflicts_with_create_step() {
        let (store, _dir) = store().await;
        let step = "m20230222_142659_create_model_back_stages_table";
        store.apply(Some(names_through(step) - 1)).await.unwrap();
        let marker = store.current_version().await.unwrap();

        exec(&store, "CREATE TABLE model_back_stages (legacy text)")
            .await
            .unwrap();

        match store.apply(Some(1)).await {
            Err(SchemaError::Conflict { step: failed, .. }) => assert_eq!(failed, step),
            other => panic!("expected Conflict, got {:?}", other),
        }
        assert_eq!(store.current_version().await.unwrap(), marker);

        // The table that was already there is left alone
        let shape = store.shape().await.unwrap();
        assert_eq!(
            shape["model_back_stages"],
            BTreeSet::from(["legacy".to_string()])
        );
    }
}
