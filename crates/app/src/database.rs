//! Database connection management

use std::str::FromStr;

use sqlx::{
    Error, Sqlite, SqlitePool, Transaction,
    error::{DatabaseError, ErrorKind},
    migrate::MigrateError,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use tracing::{info, warn};

/// Connection string of the process-local fallback database.
pub const IN_MEMORY_URL: &str = "sqlite::memory:";

/// Where the data lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// A configured `SQLite` database
    Sqlite,

    /// The in-memory fallback; lost on restart
    Memory,
}

impl Backend {
    /// Stable name used in diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sqlite => "sqlite",
            Self::Memory => "memory",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Db {
    pool: SqlitePool,
    backend: Backend,
}

impl Db {
    #[must_use]
    pub fn new(pool: SqlitePool, backend: Backend) -> Self {
        Self { pool, backend }
    }

    /// Begin a transaction.
    ///
    /// # Errors
    ///
    /// Returns an error when no connection could be acquired.
    pub async fn begin(&self) -> Result<Transaction<'static, Sqlite>, Error> {
        self.pool.begin().await
    }

    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    #[must_use]
    pub fn backend(&self) -> Backend {
        self.backend
    }
}

/// Connect to a `SQLite` database, creating the file when missing.
///
/// # Errors
///
/// Returns an error if the URL is invalid or the connection cannot be established.
pub async fn connect(database_url: &str) -> Result<SqlitePool, Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
}

/// Open a private in-memory database.
///
/// Every connection to `sqlite::memory:` sees its own database, so the pool
/// holds exactly one connection and never recycles it.
///
/// # Errors
///
/// Returns an error if `SQLite` cannot be initialised.
pub async fn connect_in_memory() -> Result<SqlitePool, Error> {
    let options = SqliteConnectOptions::from_str(IN_MEMORY_URL)?.foreign_keys(true);

    SqlitePoolOptions::new()
        .min_connections(1)
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
}

/// Open the configured database, or the in-memory fallback when none is configured.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn open(database_url: Option<&str>) -> Result<Db, Error> {
    match database_url.map(str::trim).filter(|url| !url.is_empty()) {
        Some(url) => {
            let pool = connect(url).await?;

            info!("connected to sqlite database");

            Ok(Db::new(pool, Backend::Sqlite))
        }
        None => {
            warn!("DATABASE_URL not set, data is kept in memory and lost on restart");

            Ok(Db::new(connect_in_memory().await?, Backend::Memory))
        }
    }
}

/// Apply pending migrations.
///
/// # Errors
///
/// Returns an error if a migration fails to apply.
pub async fn migrate(pool: &SqlitePool) -> Result<(), MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await
}

/// Storage failures, classified the way every service reports them.
#[derive(Debug)]
pub(crate) enum StorageFailure {
    NotFound,
    AlreadyExists,
    InvalidReference,
    MissingRequiredData,
    InvalidData,
    Other(Error),
}

impl From<Error> for StorageFailure {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::ForeignKeyViolation) => Self::InvalidReference,
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            Some(ErrorKind::Other | _) | None => Self::Other(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use sqlx::query_scalar;
    use testresult::TestResult;

    use super::*;

    #[tokio::test]
    async fn open_without_url_falls_back_to_memory() -> TestResult {
        let db = open(None).await?;

        migrate(db.pool()).await?;

        let tables: i64 = query_scalar(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'products'",
        )
        .fetch_one(db.pool())
        .await?;

        assert_eq!(db.backend(), Backend::Memory);
        assert_eq!(tables, 1);

        Ok(())
    }

    #[tokio::test]
    async fn blank_url_is_treated_as_missing() -> TestResult {
        let db = open(Some("  ")).await?;

        assert_eq!(db.backend().as_str(), "memory");

        Ok(())
    }

    #[test]
    fn row_not_found_maps_to_not_found() {
        assert!(matches!(
            StorageFailure::from(Error::RowNotFound),
            StorageFailure::NotFound
        ));
    }
}
