mod config;
mod error;
mod schema;
pub mod store;

pub use config::SqliteConfig;
pub use error::{SqliteDaoError, SqliteResult};
pub use store::SqliteScoreStore;

use crate::dao::storage::StorageError;

impl From<SqliteDaoError> for StorageError {
    fn from(err: SqliteDaoError) -> Self {
        StorageError::fault(err.to_string(), err)
    }
}
