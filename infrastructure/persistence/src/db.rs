use sqlx::{PgPool, postgres::PgPoolOptions};
use std::{
    path::{Path, PathBuf},
    time::Duration,
};
use thiserror::Error;
use tokio::sync::OnceCell;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("database.missing_connection_string")]
    MissingConnectionString,
    #[error("database.connection_error")]
    ConnectionError,
    #[error("database.migration_error")]
    MigrationError,
}

/// Configuration for the database connection.
///
/// The connection string is optional here: its absence is only reported when
/// a pool is actually requested, so the service can start without a database
/// and fail per request instead of at boot.
pub struct DatabaseConfig {
    pub connection_string: Option<String>,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    /// When set, migrations from this directory run once right after the
    /// first successful connect, before the pool is handed out.
    pub migrations_path: Option<PathBuf>,
}

impl DatabaseConfig {
    /// Creates a new database configuration with default pool settings.
    pub fn new(connection_string: Option<String>) -> Self {
        Self {
            connection_string,
            max_connections: 5,
            acquire_timeout: Duration::from_secs(30),
            migrations_path: None,
        }
    }
}

/// Lazily-initialized connection pool with single-flight setup.
///
/// The pool is established on first `get` and cached for the process
/// lifetime. Concurrent callers during the establishment window share one
/// in-flight attempt instead of opening duplicate pools. A failed attempt
/// leaves the cell empty, so the next call retries from scratch.
///
/// When an attempt fails, waiters queued behind it do not receive that
/// error: each runs its own connect attempt in turn, still one at a time.
/// Against an unreachable database a burst of N callers therefore sees N
/// serialized failures rather than one shared failure.
pub struct LazyPool {
    config: DatabaseConfig,
    cell: OnceCell<PgPool>,
}

impl LazyPool {
    pub fn new(config: DatabaseConfig) -> Self {
        Self {
            config,
            cell: OnceCell::new(),
        }
    }

    /// Returns the cached pool, establishing it first if necessary.
    pub async fn get(&self) -> Result<&PgPool, DatabaseError> {
        self.cell
            .get_or_try_init(|| async {
                let url = self
                    .config
                    .connection_string
                    .as_deref()
                    .ok_or(DatabaseError::MissingConnectionString)?;

                let pool = PgPoolOptions::new()
                    .max_connections(self.config.max_connections)
                    .acquire_timeout(self.config.acquire_timeout)
                    .connect(url)
                    .await
                    .map_err(|err| {
                        tracing::error!("Database connection failed: {}", err);
                        DatabaseError::ConnectionError
                    })?;

                if let Some(path) = &self.config.migrations_path {
                    run_migrations(&pool, path).await?;
                }

                Ok(pool)
            })
            .await
    }
}

/// Runs database migrations from the specified directory.
pub async fn run_migrations(pool: &PgPool, migrations_path: &Path) -> Result<(), DatabaseError> {
    if !migrations_path.exists() {
        return Err(DatabaseError::MigrationError);
    }

    sqlx::migrate::Migrator::new(migrations_path)
        .await
        .map_err(|err| {
            tracing::error!("Failed to load migrations: {}", err);
            DatabaseError::MigrationError
        })?
        .run(pool)
        .await
        .map_err(|err| {
            tracing::error!("Migration failed: {}", err);
            DatabaseError::MigrationError
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn should_report_missing_connection_string_lazily() {
        let pool = LazyPool::new(DatabaseConfig::new(None));
        assert!(matches!(
            pool.get().await,
            Err(DatabaseError::MissingConnectionString)
        ));
    }

    #[tokio::test]
    async fn should_stay_retryable_after_failed_attempt() {
        let pool = Arc::new(LazyPool::new(DatabaseConfig::new(None)));

        // Concurrent callers before any pool exists: every one observes the
        // failure, and the cell stays empty for the next attempt.
        let tasks: Vec<_> = (0..8)
            .map(|_| {
                let pool = pool.clone();
                tokio::spawn(async move { pool.get().await.is_err() })
            })
            .collect();
        for task in tasks {
            assert!(task.await.unwrap());
        }

        assert!(matches!(
            pool.get().await,
            Err(DatabaseError::MissingConnectionString)
        ));
    }
}
