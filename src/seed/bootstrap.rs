use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHasher, SaltString};
use sea_orm::{ActiveValue::Set, DatabaseConnection, EntityTrait};
use tracing::{debug, info};

use super::SeedError;
use crate::entities::{country, setting, user};

pub const DEFAULT_ADMIN_EMAIL: &str = "Info@ohvu.io";

/// Turns a plaintext password into the string stored in `users.password`.
pub trait CredentialHasher {
    fn hash(&self, password: &str) -> Result<String, SeedError>;
}

/// Argon2id with default parameters, stored in PHC format.
#[derive(Debug, Default, Clone, Copy)]
pub struct Argon2Hasher;

impl CredentialHasher for Argon2Hasher {
    fn hash(&self, password: &str) -> Result<String, SeedError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| SeedError::Hash(e.to_string()))?;
        Ok(hash.to_string())
    }
}

#[derive(Clone)]
pub struct BootstrapAdmin {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for BootstrapAdmin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BootstrapAdmin")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Inserts the administrator account and returns its id.
pub async fn seed_admin<H: CredentialHasher>(
    db: &DatabaseConnection,
    admin: &BootstrapAdmin,
    hasher: &H,
) -> Result<i32, SeedError> {
    let password = hasher.hash(&admin.password)?;
    let admin_model = user::ActiveModel {
        f_name: Set(Some("admin".to_string())),
        email: Set(admin.email.clone()),
        password: Set(password),
        role: Set(Some(user::ROLE_ADMIN.to_string())),
        ..Default::default()
    };
    debug!("Creating admin user {}", admin.email);

    let inserted = user::Entity::insert(admin_model)
        .exec(db)
        .await
        .map_err(SeedError::on_insert("admin"))?;
    info!("Created admin user {}", inserted.last_insert_id);

    Ok(inserted.last_insert_id)
}

pub async fn seed_settings(db: &DatabaseConnection) -> Result<(), SeedError> {
    let settings_model = setting::ActiveModel {
        heading: Set(Some("dummy text".to_string())),
        ..Default::default()
    };
    setting::Entity::insert(settings_model)
        .exec(db)
        .await
        .map_err(SeedError::on_insert("settings"))?;
    Ok(())
}

pub async fn seed_countries(db: &DatabaseConnection) -> Result<(), SeedError> {
    let country_model = country::ActiveModel {
        name: Set("Pakistan".to_string()),
        ..Default::default()
    };
    country::Entity::insert(country_model)
        .exec(db)
        .await
        .map_err(SeedError::on_insert("countries"))?;
    Ok(())
}
