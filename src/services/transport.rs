//! REST client for the library backend
//!
//! Every failure is normalized into a [`RawError`] here, so nothing
//! downstream has to dig through loosely shaped error objects.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{header::CONTENT_TYPE, Client, Method, StatusCode};
use serde::Serialize;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::{
    config::ApiConfig,
    error::{AppError, AppResult},
    models::RawError,
};

/// Endpoints whose 401 means "bad credentials", not "session expired"
const SESSION_ENDPOINTS: [&str; 2] = ["/auth/login", "/auth/refresh"];

pub type ApiResult = Result<Option<Value>, RawError>;

#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    token: Arc<RwLock<Option<String>>>,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> AppResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: Arc::new(RwLock::new(None)),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Set or clear the bearer token sent with every request
    pub async fn set_token(&self, token: Option<String>) {
        *self.token.write().await = token;
    }

    pub async fn token(&self) -> Option<String> {
        self.token.read().await.clone()
    }

    pub async fn get(&self, endpoint: &str) -> ApiResult {
        self.request::<()>(Method::GET, endpoint, None).await
    }

    pub async fn post<B: Serialize + ?Sized>(&self, endpoint: &str, body: &B) -> ApiResult {
        self.request(Method::POST, endpoint, Some(body)).await
    }

    pub async fn put<B: Serialize + ?Sized>(&self, endpoint: &str, body: &B) -> ApiResult {
        self.request(Method::PUT, endpoint, Some(body)).await
    }

    pub async fn patch<B: Serialize + ?Sized>(&self, endpoint: &str, body: &B) -> ApiResult {
        self.request(Method::PATCH, endpoint, Some(body)).await
    }

    pub async fn delete(&self, endpoint: &str) -> ApiResult {
        self.request::<()>(Method::DELETE, endpoint, None).await
    }

    async fn request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&B>,
    ) -> ApiResult {
        let url = format!("{}{}", self.base_url, endpoint);
        tracing::debug!("API request: {} {}", method, url);

        let mut builder = self.http.request(method, &url);
        if let Some(token) = self.token().await {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(transport_failure)?;
        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(String::from);

        tracing::debug!("API response: {} for {}", status, url);

        if !status.is_success() {
            let text = match response.text().await {
                Ok(text) => text,
                Err(e) if e.is_timeout() => return Err(RawError::timeout()),
                Err(_) => String::new(),
            };
            let raw = RawError::from_response(
                status.as_u16(),
                status.canonical_reason().unwrap_or_default(),
                content_type.as_deref(),
                &text,
            );
            tracing::error!(status = status.as_u16(), url = %url, "API error response");

            if status == StatusCode::UNAUTHORIZED
                && !SESSION_ENDPOINTS.iter().any(|e| endpoint.contains(e))
            {
                tracing::warn!("Unauthorized, clearing session token");
                self.set_token(None).await;
            }
            return Err(raw);
        }

        let is_json = content_type
            .as_deref()
            .map(|ct| ct.contains("application/json"))
            .unwrap_or(false);
        if status == StatusCode::NO_CONTENT || !is_json {
            return Ok(None);
        }

        response.json::<Value>().await.map(Some).map_err(transport_failure)
    }
}

/// Map a reqwest failure that carries no usable response
fn transport_failure(error: reqwest::Error) -> RawError {
    if error.is_timeout() {
        tracing::warn!("Request timed out: {}", error);
        RawError::timeout()
    } else {
        tracing::error!("Network error: {}", error);
        RawError::network()
    }
}
