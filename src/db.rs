//! Database connection pool and migration management.

use sqlx::{Pool, Sqlite, sqlite::SqlitePoolOptions};

/// Type alias for the SQLite connection pool.
pub type DbPool = Pool<Sqlite>;

/// Create a new SQLite connection pool.
///
/// Connections are created lazily and reused across requests. The default
/// connection string (`sqlite://school_payments.db?mode=rwc`) creates the
/// database file on first run.
///
/// # Errors
///
/// Returns an error if the connection string is invalid or the database
/// file cannot be opened.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await
}

/// Run database migrations from the `migrations/` directory.
///
/// Migration files are embedded at compile time and tracked in the
/// `_sqlx_migrations` table, so each one runs exactly once per database.
///
/// # Errors
///
/// Returns an error if a migration fails to apply or a previously applied
/// migration has been modified.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
