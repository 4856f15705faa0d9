//! Error types shared by the SQLite storage implementation.

use thiserror::Error;

/// Convenient result alias returning [`SqliteDaoError`] failures.
pub type SqliteResult<T> = Result<T, SqliteDaoError>;

/// Failures that can occur while interacting with SQLite.
#[derive(Debug, Error)]
pub enum SqliteDaoError {
    /// The configured database URL could not be parsed.
    #[error("invalid SQLite database URL `{url}`")]
    InvalidUrl {
        url: String,
        #[source]
        source: sqlx::Error,
    },
    /// Opening the connection pool failed.
    #[error("failed to open SQLite database `{url}`")]
    Connect {
        url: String,
        #[source]
        source: sqlx::Error,
    },
    /// Creating the score table failed.
    #[error("failed to ensure table `{table}`")]
    EnsureSchema {
        table: &'static str,
        #[source]
        source: sqlx::Error,
    },
    #[error("failed to insert score")]
    InsertScore {
        #[source]
        source: sqlx::Error,
    },
    #[error("failed to list scores")]
    ListScores {
        #[source]
        source: sqlx::Error,
    },
    #[error("failed to load score `{id}`")]
    LoadScore {
        id: i64,
        #[source]
        source: sqlx::Error,
    },
    #[error("failed to delete score `{id}`")]
    DeleteScore {
        id: i64,
        #[source]
        source: sqlx::Error,
    },
    /// `SELECT 1` against the pool failed.
    #[error("SQLite health check failed")]
    HealthCheck {
        #[source]
        source: sqlx::Error,
    },
}
