//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{errors, health};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Library Admin Error API",
        version = "1.0.0",
        description = "Classification and localization of library backend errors"
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        health::health_check,
        health::readiness_check,
        errors::classify,
        errors::translate,
    ),
    components(
        schemas(
            errors::ClassifyRequest,
            errors::ClassifyResponse,
            errors::TranslateMessage,
            crate::models::ErrorCategory,
            crate::models::Severity,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "errors", description = "Error classification")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
