use runway_admin::{
    cli::Command,
    config::Config,
    database,
    schema_store::SchemaStore,
    seed::{self, Argon2Hasher},
};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = Command::parse(&args)?;

    let config = Config::from_env()?;
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.rust_log))
        .with(tracing_subscriber::fmt::layer())
        .init();
    debug!("Service credentials set for {:?}", config.services.configured());

    let store = SchemaStore::new(database::connect(&config.database_url).await?);

    match command {
        Command::Migrate { steps } => {
            let applied = store.apply(steps).await?;
            info!("Applied {} steps", applied.len());
            println!("{}", version_line(&store).await?);
        }
        Command::Rollback { steps } => {
            let report = store.rollback_last(steps).await?;
            for step in &report.rolled_back {
                println!("rolled back {}", step);
            }
            for warning in &report.warnings {
                println!("warning: {}", warning);
            }
            println!("{}", version_line(&store).await?);
        }
        Command::Status => {
            for step in store.status().await? {
                let mark = if step.applied { "applied" } else { "pending" };
                let note = if step.downgrade.is_reversible() {
                    ""
                } else {
                    " (irreversible)"
                };
                println!("{:<8} {}{}", mark, step.name, note);
            }
            println!("{}", version_line(&store).await?);
        }
        Command::Seed { seeder } => {
            let db = store.connection();
            match seeder {
                Some(seeder) => {
                    seeder.run(db).await?;
                    info!("Seeded {}", seeder);
                }
                None => {
                    let admin = config.bootstrap_admin()?;
                    seed::seed_all(db, &admin, &Argon2Hasher).await?;
                }
            }
        }
    }

    Ok(())
}

async fn version_line(store: &SchemaStore) -> anyhow::Result<String> {
    Ok(match store.current_version().await? {
        Some(version) => format!("current version: {}", version),
        None => "current version: none".to_string(),
    })
}
