use sea_orm::{ConnectionTrait, Database, DatabaseConnection};
use tracing::info;

use crate::schema_store::SchemaStore;

pub async fn connect(db_url: &str) -> anyhow::Result<DatabaseConnection> {
    let db = Database::connect(db_url).await?;
    info!("Connected to {:?}", db.get_database_backend());
    Ok(db)
}

/// Connects and brings the schema up to date.
pub async fn setup_database(db_url: &str) -> anyhow::Result<SchemaStore> {
    let store = SchemaStore::new(connect(db_url).await?);
    let applied = store.apply_pending().await?;
    info!("Applied {} pending steps", applied.len());
    Ok(store)
}
