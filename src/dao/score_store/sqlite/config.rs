use std::str::FromStr;

use sqlx::sqlite::SqliteConnectOptions;

use super::error::{SqliteDaoError, SqliteResult};

/// URL of a private, process-local in-memory database.
const IN_MEMORY_URL: &str = "sqlite::memory:";

#[derive(Clone, Debug)]
pub struct SqliteConfig {
    pub url: String,
    pub options: SqliteConnectOptions,
    pub max_connections: u32,
}

impl SqliteConfig {
    /// Parse `url` and enable creation of the database file when it is missing.
    pub fn from_url(url: &str, max_connections: u32) -> SqliteResult<Self> {
        let options = SqliteConnectOptions::from_str(url)
            .map_err(|source| SqliteDaoError::InvalidUrl {
                url: url.to_owned(),
                source,
            })?
            .create_if_missing(true);

        Ok(Self {
            url: url.to_owned(),
            options,
            max_connections: max_connections.max(1),
        })
    }

    /// In-memory database living as long as the pool.
    ///
    /// Every SQLite connection to `:memory:` opens its own database, so the pool
    /// is capped to a single connection.
    pub fn in_memory() -> SqliteResult<Self> {
        Self::from_url(IN_MEMORY_URL, 1)
    }
}
