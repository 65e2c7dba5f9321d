pub mod models;
pub mod test_utils;

use migration::Migrator;
use sea_orm::{Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use util::config;

/// Connects to the configured store and applies any pending migrations.
///
/// `DATABASE_PATH` may be a full DSN (`sqlite:`, `postgres://`, `mysql://`)
/// or a plain SQLite file path, in which case the parent directory is
/// created and the file is opened in read-write-create mode.
pub async fn connect() -> Result<DatabaseConnection, DbErr> {
    // SQLite won't create intermediate dirs.
    if let Some(parent) = config::database_file().as_deref().and_then(|f| f.parent()) {
        let _ = std::fs::create_dir_all(parent);
    }
    let url = config::database_url();

    let db = Database::connect(&url).await?;
    Migrator::up(&db, None).await?;
    tracing::info!(url = %url, "Connected to store");
    Ok(db)
}
