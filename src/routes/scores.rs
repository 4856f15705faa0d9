use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, post},
};

use crate::{
    dto::score::{CreateScoreRequest, DeleteScoreResponse, ListScoresParams, ScoreResponse},
    error::AppError,
    services::score_service,
    state::SharedState,
};

/// Routes recording, listing, fetching and deleting karaoke scores.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/score", post(create_score))
        .route("/scores", get(list_scores))
        .route("/scores/{id}", get(get_score).delete(delete_score))
}

/// Record a new karaoke performance.
#[utoipa::path(
    post,
    path = "/score",
    tag = "scores",
    request_body = CreateScoreRequest,
    responses(
        (status = 200, description = "Score recorded", body = ScoreResponse),
        (status = 400, description = "Blank song title or artist"),
        (status = 500, description = "Storage fault")
    )
)]
pub async fn create_score(
    State(state): State<SharedState>,
    Json(payload): Json<CreateScoreRequest>,
) -> Result<Json<ScoreResponse>, AppError> {
    Ok(Json(score_service::create_score(&state, payload).await?))
}

/// List recorded scores with optional search and ordering.
#[utoipa::path(
    get,
    path = "/scores",
    tag = "scores",
    params(ListScoresParams),
    responses((status = 200, description = "Matching scores", body = [ScoreResponse]))
)]
pub async fn list_scores(
    State(state): State<SharedState>,
    Query(params): Query<ListScoresParams>,
) -> Result<Json<Vec<ScoreResponse>>, AppError> {
    Ok(Json(score_service::list_scores(&state, params).await?))
}

/// Fetch a single score by its identifier.
#[utoipa::path(
    get,
    path = "/scores/{id}",
    tag = "scores",
    params(("id" = i64, Path, description = "Identifier of the score")),
    responses(
        (status = 200, description = "Score", body = ScoreResponse),
        (status = 404, description = "Score not found")
    )
)]
pub async fn get_score(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<Json<ScoreResponse>, AppError> {
    Ok(Json(score_service::get_score(&state, id).await?))
}

/// Delete a score by its identifier.
#[utoipa::path(
    delete,
    path = "/scores/{id}",
    tag = "scores",
    params(("id" = i64, Path, description = "Identifier of the score")),
    responses(
        (status = 200, description = "Score deleted", body = DeleteScoreResponse),
        (status = 404, description = "Score not found")
    )
)]
pub async fn delete_score(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteScoreResponse>, AppError> {
    Ok(Json(score_service::delete_score(&state, id).await?))
}
