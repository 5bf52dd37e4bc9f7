//! Structured logging of failed calls

use crate::models::{ErrorDetails, RawError};

/// Emit one `error` event describing a failed call
pub fn log_error(raw: &RawError, context: &str) {
    let details = ErrorDetails::from_raw(raw);
    let rendered = serde_json::to_string(&details).unwrap_or_default();

    if context.is_empty() {
        tracing::error!(status = ?details.status, details = %rendered, "API call failed");
    } else {
        tracing::error!(status = ?details.status, details = %rendered, "API call failed in {}", context);
    }
}
