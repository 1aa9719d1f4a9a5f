use persistence::db::{DatabaseConfig, LazyPool};
use std::{env, path::PathBuf};

/// Build the lazy database pool handle from environment variables.
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string. Not required at startup;
///   when absent the first database operation fails with a configuration
///   error.
/// - MIGRATIONS_PATH: optional directory of sqlx migrations to apply once
///   after the first successful connect. By default migrations are expected
///   to be applied out of band.
pub fn lazy_pool_from_env() -> LazyPool {
    let mut config = DatabaseConfig::new(env::var("DATABASE_URL").ok());
    config.migrations_path = env::var("MIGRATIONS_PATH").ok().map(PathBuf::from);
    LazyPool::new(config)
}
