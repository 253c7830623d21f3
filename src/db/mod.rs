use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DbErr};
use tracing::info;

pub mod manager;

pub use manager::{DatabaseManager, ProcParams};

/// Applies pending migrations over a short-lived startup connection. Request
/// handling never reuses this connection; each request opens its own through
/// [`DatabaseManager`].
pub async fn migrate(url: &str) -> Result<(), DbErr> {
    info!("Connecting to PostgreSQL...");
    let db = Database::connect(url).await?;
    info!("Running migrations...");
    Migrator::up(&db, None).await?;
    info!("Migrations finished.");
    db.close().await?;
    Ok(())
}
