use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::{
    dao::models::{NewScoreEntity, ScoreEntity},
    dto::validation::validate_not_blank,
};

/// Payload submitted to record a karaoke performance.
#[derive(Debug, Clone, Deserialize, ToSchema, Validate)]
pub struct CreateScoreRequest {
    #[validate(custom(function = "validate_not_blank"))]
    pub song_title: String,
    #[validate(custom(function = "validate_not_blank"))]
    pub artist: String,
    pub total_score: i64,
    pub pitch_score: i64,
    pub technique_score: i64,
    pub long_tone_score: i64,
    pub stability_score: i64,
    pub expression_score: i64,
    pub high_range_score: i64,
    /// Optional free-form notes about the performance.
    #[serde(default)]
    pub comments: Option<String>,
}

impl From<CreateScoreRequest> for NewScoreEntity {
    fn from(request: CreateScoreRequest) -> Self {
        Self {
            song_title: request.song_title,
            artist: request.artist,
            total_score: request.total_score,
            pitch_score: request.pitch_score,
            technique_score: request.technique_score,
            long_tone_score: request.long_tone_score,
            stability_score: request.stability_score,
            expression_score: request.expression_score,
            high_range_score: request.high_range_score,
            comments: request.comments,
        }
    }
}

/// A stored score as returned by every read endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ScoreResponse {
    pub id: i64,
    pub song_title: String,
    pub artist: String,
    pub total_score: i64,
    pub pitch_score: i64,
    pub technique_score: i64,
    pub long_tone_score: i64,
    pub stability_score: i64,
    pub expression_score: i64,
    pub high_range_score: i64,
    /// `null` when the performance was recorded without comments.
    pub comments: Option<String>,
    /// Insertion time assigned by the server (`YYYY-MM-DD HH:MM:SS`, UTC).
    pub performed_at: String,
}

impl From<ScoreEntity> for ScoreResponse {
    fn from(entity: ScoreEntity) -> Self {
        Self {
            id: entity.id,
            song_title: entity.song_title,
            artist: entity.artist,
            total_score: entity.total_score,
            pitch_score: entity.pitch_score,
            technique_score: entity.technique_score,
            long_tone_score: entity.long_tone_score,
            stability_score: entity.stability_score,
            expression_score: entity.expression_score,
            high_range_score: entity.high_range_score,
            comments: entity.comments,
            performed_at: entity.performed_at,
        }
    }
}

/// Query string accepted by `GET /scores`.
///
/// Unknown `sort_by` or `order` values are ignored rather than rejected.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListScoresParams {
    /// Substring matched against song title, artist and comments.
    pub search: Option<String>,
    /// One of `performed_at`, `total_score`, `song_title`, `artist`.
    pub sort_by: Option<String>,
    /// `asc` or `desc` (default `desc`).
    pub order: Option<String>,
}

/// Confirmation returned once a score has been deleted.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteScoreResponse {
    pub message: String,
}

impl DeleteScoreResponse {
    pub fn deleted() -> Self {
        Self {
            message: "Score deleted successfully".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload() -> serde_json::Value {
        json!({
            "song_title": "Lemon",
            "artist": "Kenshi Yonezu",
            "total_score": 88,
            "pitch_score": 90,
            "technique_score": 85,
            "long_tone_score": 80,
            "stability_score": 87,
            "expression_score": 89,
            "high_range_score": 91
        })
    }

    #[test]
    fn comments_default_to_none() {
        let request: CreateScoreRequest = serde_json::from_value(payload()).unwrap();
        assert_eq!(request.comments, None);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn missing_sub_score_is_rejected() {
        let mut value = payload();
        value.as_object_mut().unwrap().remove("pitch_score");
        assert!(serde_json::from_value::<CreateScoreRequest>(value).is_err());
    }

    #[test]
    fn blank_title_fails_validation() {
        let mut value = payload();
        value["song_title"] = json!("  ");
        let request: CreateScoreRequest = serde_json::from_value(value).unwrap();
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("song_title"));
    }

    #[test]
    fn response_serializes_null_comments() {
        let response = ScoreResponse::from(ScoreEntity {
            id: 1,
            song_title: "Lemon".into(),
            artist: "Kenshi Yonezu".into(),
            total_score: 88,
            pitch_score: 90,
            technique_score: 85,
            long_tone_score: 80,
            stability_score: 87,
            expression_score: 89,
            high_range_score: 91,
            comments: None,
            performed_at: "2026-10-19 12:00:00".into(),
        });
        let value = serde_json::to_value(response).unwrap();
        assert_eq!(value["comments"], serde_json::Value::Null);
        assert_eq!(value["id"], 1);
    }
}
