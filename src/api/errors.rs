//! Error classification endpoints

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::{ErrorCategory, RawError, Severity},
};

/// A failed call as seen by the client transport
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClassifyRequest {
    /// HTTP status; omitted when the request never reached the server
    pub status_code: Option<u16>,
    /// Parsed response body
    #[schema(value_type = Option<Object>)]
    pub body: Option<Value>,
    /// Set when the client aborted the request on timeout
    #[serde(default)]
    pub is_timeout: bool,
    /// Message used when nothing more specific is known
    pub default_message: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClassifyResponse {
    pub message: String,
    pub category: ErrorCategory,
    pub severity: Severity,
    /// The client should clear its session and show the login page
    pub requires_login: bool,
}

#[derive(Deserialize, Serialize, ToSchema)]
pub struct TranslateMessage {
    pub message: String,
}

/// Classify a failed call
#[utoipa::path(
    post,
    path = "/errors/classify",
    tag = "errors",
    request_body = ClassifyRequest,
    responses(
        (status = 200, description = "Localized message and category", body = ClassifyResponse)
    )
)]
pub async fn classify(
    State(state): State<crate::AppState>,
    Json(request): Json<ClassifyRequest>,
) -> Json<ClassifyResponse> {
    let classifier = &state.services.classifier;
    let raw = RawError {
        status_code: request.status_code,
        body: request.body,
        is_timeout: request.is_timeout,
    };

    let default_message = request
        .default_message
        .as_deref()
        .unwrap_or_else(|| classifier.catalog().default_message());
    let classified = classifier.classify(&raw, default_message);

    Json(ClassifyResponse {
        severity: classified.severity(),
        requires_login: classified.category.requires_login(),
        category: classified.category,
        message: classified.message,
    })
}

/// Translate a backend message
#[utoipa::path(
    post,
    path = "/errors/translate",
    tag = "errors",
    request_body = TranslateMessage,
    responses(
        (status = 200, description = "Localized message", body = TranslateMessage),
        (status = 400, description = "Empty message", body = crate::error::ErrorResponse)
    )
)]
pub async fn translate(
    State(state): State<crate::AppState>,
    Json(request): Json<TranslateMessage>,
) -> AppResult<Json<TranslateMessage>> {
    if request.message.trim().is_empty() {
        return Err(AppError::BadRequest("message must not be empty".to_string()));
    }

    let message = state.services.classifier.translator().translate(&request.message);
    Ok(Json(TranslateMessage { message }))
}
