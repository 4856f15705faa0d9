use serde::{Deserialize, Serialize};

/// One row of the `karaoke_scores` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, sqlx::FromRow)]
pub struct ScoreEntity {
    /// Identifier assigned by the database on insertion.
    pub id: i64,
    /// Title of the song that was performed.
    pub song_title: String,
    /// Artist of the original song.
    pub artist: String,
    /// Overall score reported by the karaoke machine.
    pub total_score: i64,
    /// Pitch accuracy sub-score.
    pub pitch_score: i64,
    /// Technique (vibrato, kobushi, ...) sub-score.
    pub technique_score: i64,
    /// Long tone sub-score.
    pub long_tone_score: i64,
    /// Stability sub-score.
    pub stability_score: i64,
    /// Expression sub-score.
    pub expression_score: i64,
    /// High range sub-score.
    pub high_range_score: i64,
    /// Free-form notes about the performance.
    pub comments: Option<String>,
    /// Insertion timestamp written by the database (`YYYY-MM-DD HH:MM:SS`, UTC).
    pub performed_at: String,
}

/// Field values for a score that has not been persisted yet.
///
/// The store assigns `id` and `performed_at`, so neither appears here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewScoreEntity {
    pub song_title: String,
    pub artist: String,
    pub total_score: i64,
    pub pitch_score: i64,
    pub technique_score: i64,
    pub long_tone_score: i64,
    pub stability_score: i64,
    pub expression_score: i64,
    pub high_range_score: i64,
    pub comments: Option<String>,
}
