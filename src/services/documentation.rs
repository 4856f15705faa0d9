use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for the karaoke score service.
#[openapi(
    paths(
        crate::routes::health::healthcheck,
        crate::routes::scores::create_score,
        crate::routes::scores::list_scores,
        crate::routes::scores::get_score,
        crate::routes::scores::delete_score,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::score::CreateScoreRequest,
            crate::dto::score::ScoreResponse,
            crate::dto::score::DeleteScoreResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "scores", description = "Karaoke score records"),
    )
)]
pub struct ApiDoc;
