//! Reference data inserted once after the schema is in place.

pub mod bootstrap;
pub mod cms;
pub mod role_permission;
pub mod templates;

use std::{fmt, str::FromStr};

use sea_orm::{DatabaseConnection, DbErr, SqlErr};
use tracing::info;

pub use bootstrap::{Argon2Hasher, BootstrapAdmin, CredentialHasher};

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("{seeder} seeder ran into an existing row")]
    Uniqueness {
        seeder: &'static str,
        #[source]
        source: DbErr,
    },

    #[error("user 1 does not exist, so no role can be assigned to it")]
    MissingBootstrapUser,

    #[error("could not hash the admin password: {0}")]
    Hash(String),

    #[error(transparent)]
    Db(#[from] DbErr),
}

impl SeedError {
    /// Classifies a failed insert, separating duplicate keys from other failures.
    pub(crate) fn on_insert(seeder: &'static str) -> impl Fn(DbErr) -> SeedError {
        move |source| match source.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => SeedError::Uniqueness { seeder, source },
            _ => SeedError::Db(source),
        }
    }
}

/// Seeders that can be run on their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seeder {
    Permissions,
    Templates,
    Cms,
}

impl Seeder {
    pub async fn run(self, db: &DatabaseConnection) -> Result<(), SeedError> {
        match self {
            Seeder::Permissions => role_permission::seed(db).await,
            Seeder::Templates => templates::seed(db).await,
            Seeder::Cms => cms::seed(db).await,
        }
    }
}

impl fmt::Display for Seeder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Seeder::Permissions => "permissions",
            Seeder::Templates => "templates",
            Seeder::Cms => "cms",
        };
        f.write_str(name)
    }
}

impl FromStr for Seeder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "permissions" => Ok(Seeder::Permissions),
            "templates" => Ok(Seeder::Templates),
            "cms" => Ok(Seeder::Cms),
            other => Err(format!("unknown seeder `{other}`")),
        }
    }
}

/// Runs every seeder in order, starting with the bootstrap administrator.
///
/// Nothing is wrapped in a transaction. A failure part way through leaves
/// the rows written by earlier seeders in place.
pub async fn seed_all<H: CredentialHasher>(
    db: &DatabaseConnection,
    admin: &BootstrapAdmin,
    hasher: &H,
) -> Result<(), SeedError> {
    bootstrap::seed_admin(db, admin, hasher).await?;
    bootstrap::seed_settings(db).await?;
    bootstrap::seed_countries(db).await?;

    for seeder in [Seeder::Permissions, Seeder::Templates, Seeder::Cms] {
        seeder.run(db).await?;
        info!("Seeded {}", seeder);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeder_names() {
        for seeder in [Seeder::Permissions, Seeder::Templates, Seeder::Cms] {
            assert_eq!(seeder.to_string().parse::<Seeder>(), Ok(seeder));
        }
        assert!("countries".parse::<Seeder>().is_err());
    }
}
