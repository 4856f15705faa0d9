/// OpenAPI documentation generation.
pub mod documentation;
/// Health check service.
pub mod health_service;
/// Karaoke score recording and lookup.
pub mod score_service;
