pub mod sqlite;

use crate::dao::models::{NewScoreEntity, ScoreEntity};
use crate::dao::query::ScoreQuery;
use crate::dao::storage::StorageResult;
use futures::future::BoxFuture;

/// Abstraction over the persistence layer for karaoke score records.
pub trait ScoreStore: Send + Sync {
    /// Insert a score and return the stored row, including `id` and `performed_at`.
    fn create_score(&self, score: NewScoreEntity) -> BoxFuture<'static, StorageResult<ScoreEntity>>;
    /// Return every score matching `query`, ordered as it requests.
    fn list_scores(&self, query: ScoreQuery) -> BoxFuture<'static, StorageResult<Vec<ScoreEntity>>>;
    fn find_score(&self, id: i64) -> BoxFuture<'static, StorageResult<Option<ScoreEntity>>>;
    /// Hard-delete a score. Resolves to `false` when no row had that id.
    fn delete_score(&self, id: i64) -> BoxFuture<'static, StorageResult<bool>>;
    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>>;
}
