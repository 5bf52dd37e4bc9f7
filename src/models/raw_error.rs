//! Failed-request model produced at the transport boundary

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use utoipa::ToSchema;

/// A failed REST call, normalized once by the transport.
///
/// `status_code` is `None` when the request never reached the server
/// (DNS failure, connection refused, aborted request).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RawError {
    pub status_code: Option<u16>,
    #[schema(value_type = Option<Object>)]
    pub body: Option<Value>,
    #[serde(default)]
    pub is_timeout: bool,
}

impl RawError {
    /// Connection-level failure
    pub fn network() -> Self {
        Self::default()
    }

    /// Request aborted by the client-side timeout
    pub fn timeout() -> Self {
        Self {
            is_timeout: true,
            ..Self::default()
        }
    }

    /// Non-2xx response with an already parsed body
    pub fn http(status_code: u16, body: Option<Value>) -> Self {
        Self {
            status_code: Some(status_code),
            body,
            is_timeout: false,
        }
    }

    /// Build a `RawError` from the parts of a non-2xx response.
    ///
    /// JSON payloads are kept as parsed (an unparsable one becomes `{}`).
    /// Anything else is wrapped as `{"message": ...}` using the response
    /// text, or the status reason phrase when the text is empty.
    pub fn from_response(
        status_code: u16,
        status_text: &str,
        content_type: Option<&str>,
        text: &str,
    ) -> Self {
        let is_json = content_type
            .map(|ct| ct.contains("application/json"))
            .unwrap_or(false);

        let body = if is_json {
            serde_json::from_str::<Value>(text).unwrap_or_else(|_| Value::Object(Map::new()))
        } else if text.is_empty() {
            json!({ "message": status_text })
        } else {
            json!({ "message": text })
        };

        Self::http(status_code, Some(body))
    }

    /// Body as a JSON object, if it is one
    pub fn body_object(&self) -> Option<&Map<String, Value>> {
        self.body.as_ref().and_then(Value::as_object)
    }

    /// String field of the body; non-string values are ignored
    pub fn body_str(&self, key: &str) -> Option<&str> {
        self.body_object()?.get(key)?.as_str()
    }

    /// First error code found under `errorCode`, `code` or `error`
    pub fn error_code(&self) -> Option<&str> {
        ["errorCode", "code", "error"]
            .iter()
            .find_map(|key| self.body_str(key).filter(|code| !code.is_empty()))
    }

    /// Backend message, when it is a non-empty string
    pub fn message(&self) -> Option<&str> {
        self.body_str("message").filter(|message| !message.is_empty())
    }
}

/// One field-level validation failure reported by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    /// Parse a `{field, message}` entry; `None` if either is missing or not a string
    pub fn from_value(value: &Value) -> Option<Self> {
        let entry = value.as_object()?;
        Some(Self {
            field: entry.get("field")?.as_str()?.to_string(),
            message: entry.get("message")?.as_str()?.to_string(),
        })
    }
}

/// Validation errors under `validationErrors`, falling back to `errors`.
///
/// Malformed entries are skipped. Returns `None` when neither key holds an
/// array.
pub fn validation_errors(raw: &RawError) -> Option<Vec<ValidationError>> {
    let body = raw.body_object()?;
    let entries = body
        .get("validationErrors")
        .and_then(Value::as_array)
        .or_else(|| body.get("errors").and_then(Value::as_array))?;

    Some(entries.iter().filter_map(ValidationError::from_value).collect())
}

/// Flattened view of a failed call for diagnostics
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDetails {
    pub status: Option<u16>,
    pub message: Option<String>,
    pub error_code: Option<String>,
    pub validation_errors: Option<Vec<ValidationError>>,
    pub timestamp: Option<String>,
    pub path: Option<String>,
    pub is_timeout: bool,
}

impl ErrorDetails {
    pub fn from_raw(raw: &RawError) -> Self {
        Self {
            status: raw.status_code,
            message: raw.message().map(String::from),
            error_code: raw
                .body_str("errorCode")
                .or_else(|| raw.body_str("code"))
                .map(String::from),
            validation_errors: raw
                .body_object()
                .and_then(|body| body.get("validationErrors"))
                .and_then(Value::as_array)
                .map(|entries| entries.iter().filter_map(ValidationError::from_value).collect()),
            timestamp: raw.body_str("timestamp").map(String::from),
            path: raw.body_str("path").map(String::from),
            is_timeout: raw.is_timeout,
        }
    }
}
