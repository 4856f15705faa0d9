use futures::future::BoxFuture;
use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};
use tracing::{debug, info};

use super::{
    config::SqliteConfig,
    error::{SqliteDaoError, SqliteResult},
    schema::ensure_schema,
};
use crate::dao::{
    models::{NewScoreEntity, ScoreEntity},
    query::{SCORE_COLUMNS, SCORE_TABLE, ScoreQuery},
    score_store::ScoreStore,
    storage::StorageResult,
};

/// [`ScoreStore`] backed by a pooled SQLite database.
#[derive(Clone)]
pub struct SqliteScoreStore {
    pool: SqlitePool,
}

impl SqliteScoreStore {
    /// Open the pool and make sure the score table exists.
    pub async fn connect(config: SqliteConfig) -> SqliteResult<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            // In-memory databases vanish with their last connection.
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(config.options)
            .await
            .map_err(|source| SqliteDaoError::Connect {
                url: config.url.clone(),
                source,
            })?;

        ensure_schema(&pool).await?;
        info!(url = %config.url, table = SCORE_TABLE, "score table ready");

        Ok(Self { pool })
    }

    /// Release every pooled connection.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    async fn insert(pool: SqlitePool, score: NewScoreEntity) -> SqliteResult<ScoreEntity> {
        let sql = format!(
            "INSERT INTO {SCORE_TABLE} (song_title, artist, total_score, pitch_score, \
             technique_score, long_tone_score, stability_score, expression_score, \
             high_range_score, comments) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?) \
             RETURNING {SCORE_COLUMNS}"
        );

        sqlx::query_as::<_, ScoreEntity>(&sql)
            .bind(score.song_title)
            .bind(score.artist)
            .bind(score.total_score)
            .bind(score.pitch_score)
            .bind(score.technique_score)
            .bind(score.long_tone_score)
            .bind(score.stability_score)
            .bind(score.expression_score)
            .bind(score.high_range_score)
            .bind(score.comments)
            .fetch_one(&pool)
            .await
            .map_err(|source| SqliteDaoError::InsertScore { source })
    }

    async fn select(pool: SqlitePool, query: ScoreQuery) -> SqliteResult<Vec<ScoreEntity>> {
        let mut builder = query.select_statement();
        debug!(sql = builder.sql(), search = ?query.search, "listing scores");

        builder
            .build_query_as::<ScoreEntity>()
            .fetch_all(&pool)
            .await
            .map_err(|source| SqliteDaoError::ListScores { source })
    }

    async fn select_one(pool: SqlitePool, id: i64) -> SqliteResult<Option<ScoreEntity>> {
        let sql = format!("SELECT {SCORE_COLUMNS} FROM {SCORE_TABLE} WHERE id = ?");

        sqlx::query_as::<_, ScoreEntity>(&sql)
            .bind(id)
            .fetch_optional(&pool)
            .await
            .map_err(|source| SqliteDaoError::LoadScore { id, source })
    }

    async fn delete(pool: SqlitePool, id: i64) -> SqliteResult<bool> {
        let sql = format!("DELETE FROM {SCORE_TABLE} WHERE id = ?");

        let result = sqlx::query(&sql)
            .bind(id)
            .execute(&pool)
            .await
            .map_err(|source| SqliteDaoError::DeleteScore { id, source })?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(pool: SqlitePool) -> SqliteResult<()> {
        sqlx::query("SELECT 1")
            .execute(&pool)
            .await
            .map_err(|source| SqliteDaoError::HealthCheck { source })?;
        Ok(())
    }
}

impl ScoreStore for SqliteScoreStore {
    fn create_score(&self, score: NewScoreEntity) -> BoxFuture<'static, StorageResult<ScoreEntity>> {
        let pool = self.pool.clone();
        Box::pin(async move { Ok(Self::insert(pool, score).await?) })
    }

    fn list_scores(&self, query: ScoreQuery) -> BoxFuture<'static, StorageResult<Vec<ScoreEntity>>> {
        let pool = self.pool.clone();
        Box::pin(async move { Ok(Self::select(pool, query).await?) })
    }

    fn find_score(&self, id: i64) -> BoxFuture<'static, StorageResult<Option<ScoreEntity>>> {
        let pool = self.pool.clone();
        Box::pin(async move { Ok(Self::select_one(pool, id).await?) })
    }

    fn delete_score(&self, id: i64) -> BoxFuture<'static, StorageResult<bool>> {
        let pool = self.pool.clone();
        Box::pin(async move { Ok(Self::delete(pool, id).await?) })
    }

    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
        let pool = self.pool.clone();
        Box::pin(async move { Ok(Self::ping(pool).await?) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn store() -> SqliteScoreStore {
        SqliteScoreStore::connect(SqliteConfig::in_memory().unwrap())
            .await
            .unwrap()
    }

    fn new_score(song_title: &str, artist: &str, total_score: i64) -> NewScoreEntity {
        NewScoreEntity {
            song_title: song_title.into(),
            artist: artist.into(),
            total_score,
            pitch_score: 90,
            technique_score: 85,
            long_tone_score: 80,
            stability_score: 87,
            expression_score: 89,
            high_range_score: 91,
            comments: None,
        }
    }

    #[tokio::test]
    async fn create_assigns_id_and_timestamp() {
        let store = store().await;
        let mut input = new_score("Lemon", "Kenshi Yonezu", 88);
        input.comments = Some("great run".into());

        let created = store.create_score(input.clone()).await.unwrap();
        assert_eq!(created.id, 1);
        assert!(!created.performed_at.is_empty());
        assert_eq!(created.song_title, input.song_title);
        assert_eq!(created.comments.as_deref(), Some("great run"));

        let fetched = store.find_score(created.id).await.unwrap();
        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn ids_increase_across_creates() {
        let store = store().await;
        let first = store.create_score(new_score("A", "X", 1)).await.unwrap();
        let second = store.create_score(new_score("B", "Y", 2)).await.unwrap();
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = store().await;
        let first = store.create_score(new_score("A", "X", 1)).await.unwrap();
        assert!(store.delete_score(first.id).await.unwrap());
        let second = store.create_score(new_score("B", "Y", 2)).await.unwrap();
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn delete_reports_missing_rows() {
        let store = store().await;
        let created = store.create_score(new_score("A", "X", 1)).await.unwrap();

        assert!(!store.delete_score(created.id + 100).await.unwrap());
        assert_eq!(store.list_scores(ScoreQuery::default()).await.unwrap().len(), 1);

        assert!(store.delete_score(created.id).await.unwrap());
        assert_eq!(store.find_score(created.id).await.unwrap(), None);
        assert!(!store.delete_score(created.id).await.unwrap());
    }

    #[tokio::test]
    async fn list_filters_on_title_artist_and_comments() {
        let store = store().await;
        store
            .create_score(new_score("Bohemian Rhapsody", "Queen", 92))
            .await
            .unwrap();
        store
            .create_score(new_score("Lemon", "Kenshi Yonezu", 88))
            .await
            .unwrap();
        let mut commented = new_score("Don't Stop Me Now", "Queen", 75);
        commented.comments = Some("warm-up before Bohemian".into());
        store.create_score(commented).await.unwrap();

        let found = store
            .list_scores(ScoreQuery::from_params(Some("Bohemian"), None, None))
            .await
            .unwrap();
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|score| {
            score.song_title.contains("Bohemian")
                || score.artist.contains("Bohemian")
                || score
                    .comments
                    .as_deref()
                    .is_some_and(|comments| comments.contains("Bohemian"))
        }));

        let none = store
            .list_scores(ScoreQuery::from_params(Some("Utada"), None, None))
            .await
            .unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn list_orders_by_allowed_column() {
        let store = store().await;
        for (title, total) in [("B", 70), ("A", 95), ("C", 82)] {
            store.create_score(new_score(title, "X", total)).await.unwrap();
        }

        let ascending = store
            .list_scores(ScoreQuery::from_params(None, Some("total_score"), Some("asc")))
            .await
            .unwrap();
        let totals: Vec<i64> = ascending.iter().map(|score| score.total_score).collect();
        assert_eq!(totals, vec![70, 82, 95]);

        let by_title = store
            .list_scores(ScoreQuery::from_params(None, Some("song_title"), None))
            .await
            .unwrap();
        let titles: Vec<&str> = by_title.iter().map(|score| score.song_title.as_str()).collect();
        assert_eq!(titles, vec!["C", "B", "A"]);
    }

    #[tokio::test]
    async fn list_ignores_unknown_sort_column() {
        let store = store().await;
        store.create_score(new_score("A", "X", 1)).await.unwrap();
        store.create_score(new_score("B", "Y", 2)).await.unwrap();

        let scores = store
            .list_scores(ScoreQuery::from_params(
                None,
                Some("nonexistent_column"),
                Some("asc"),
            ))
            .await
            .unwrap();
        assert_eq!(scores.len(), 2);
    }

    #[tokio::test]
    async fn search_term_is_not_interpreted_as_sql() {
        let store = store().await;
        store.create_score(new_score("A", "X", 1)).await.unwrap();

        let scores = store
            .list_scores(ScoreQuery::from_params(Some("' OR 1=1 --"), None, None))
            .await
            .unwrap();
        assert!(scores.is_empty());
        assert_eq!(store.list_scores(ScoreQuery::default()).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn schema_creation_is_idempotent() {
        let store = store().await;
        store.create_score(new_score("A", "X", 1)).await.unwrap();

        ensure_schema(&store.pool).await.unwrap();
        assert_eq!(store.list_scores(ScoreQuery::default()).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn health_check_succeeds_on_open_pool() {
        let store = store().await;
        store.health_check().await.unwrap();
    }
}
