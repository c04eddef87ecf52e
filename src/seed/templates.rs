use sea_orm::{ActiveValue::Set, DatabaseConnection, EntityTrait};
use tracing::info;

use super::SeedError;
use crate::entities::template;

pub const TEMPLATE_COUNT: usize = 4;

/// Inserts the ticket page templates `Template 1` to `Template 4`.
pub async fn seed(db: &DatabaseConnection) -> Result<(), SeedError> {
    let templates = (1..=TEMPLATE_COUNT).map(|n| template::ActiveModel {
        name: Set(Some(format!("Template {n}"))),
        file: Set(Some(format!("temp{n}"))),
        image: Set(Some(format!("templates/temp{n}.jpg"))),
        ..Default::default()
    });

    template::Entity::insert_many(templates)
        .exec_without_returning(db)
        .await
        .map_err(SeedError::on_insert("templates"))?;
    info!("Created {} templates", TEMPLATE_COUNT);

    Ok(())
}
