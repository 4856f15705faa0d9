use tracing::info;
use validator::Validate;

use crate::{
    dao::query::ScoreQuery,
    dto::score::{CreateScoreRequest, DeleteScoreResponse, ListScoresParams, ScoreResponse},
    error::ServiceError,
    state::SharedState,
};

/// Persist a new performance and return it with its assigned id and timestamp.
pub async fn create_score(
    state: &SharedState,
    request: CreateScoreRequest,
) -> Result<ScoreResponse, ServiceError> {
    request.validate()?;

    let created = state.score_store().create_score(request.into()).await?;
    info!(id = created.id, song_title = %created.song_title, "score recorded");

    Ok(created.into())
}

/// List stored scores, optionally filtered and ordered.
///
/// Unknown sort columns or directions degrade to unordered output instead of failing.
pub async fn list_scores(
    state: &SharedState,
    params: ListScoresParams,
) -> Result<Vec<ScoreResponse>, ServiceError> {
    let query = ScoreQuery::from_params(
        params.search.as_deref(),
        params.sort_by.as_deref(),
        params.order.as_deref(),
    );

    let scores = state.score_store().list_scores(query).await?;
    Ok(scores.into_iter().map(Into::into).collect())
}

pub async fn get_score(state: &SharedState, id: i64) -> Result<ScoreResponse, ServiceError> {
    let Some(score) = state.score_store().find_score(id).await? else {
        return Err(score_not_found());
    };

    Ok(score.into())
}

/// Hard-delete a score.
pub async fn delete_score(
    state: &SharedState,
    id: i64,
) -> Result<DeleteScoreResponse, ServiceError> {
    let deleted = state.score_store().delete_score(id).await?;
    if !deleted {
        return Err(score_not_found());
    }

    info!(id, "score deleted");
    Ok(DeleteScoreResponse::deleted())
}

fn score_not_found() -> ServiceError {
    ServiceError::NotFound("Score not found".into())
}
