use sqlx::SqlitePool;

use super::error::{SqliteDaoError, SqliteResult};
use crate::dao::query::SCORE_TABLE;

const CREATE_SCORE_TABLE: &str = "CREATE TABLE IF NOT EXISTS karaoke_scores (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    song_title TEXT NOT NULL,
    artist TEXT NOT NULL,
    total_score INTEGER NOT NULL,
    pitch_score INTEGER NOT NULL,
    technique_score INTEGER NOT NULL,
    long_tone_score INTEGER NOT NULL,
    stability_score INTEGER NOT NULL,
    expression_score INTEGER NOT NULL,
    high_range_score INTEGER NOT NULL,
    comments TEXT,
    performed_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

/// Create the score table when absent. An existing table is left untouched.
pub async fn ensure_schema(pool: &SqlitePool) -> SqliteResult<()> {
    sqlx::query(CREATE_SCORE_TABLE)
        .execute(pool)
        .await
        .map_err(|source| SqliteDaoError::EnsureSchema {
            table: SCORE_TABLE,
            source,
        })?;
    Ok(())
}
