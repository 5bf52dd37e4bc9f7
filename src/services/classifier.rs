//! Failed-call classification

use std::sync::Arc;

use crate::{
    messages::{MessageCatalog, MessageTranslator},
    models::{ClassifiedError, ErrorCategory, RawError, Severity, ValidationError},
};

use super::diagnostics;

/// Result of [`ErrorClassifier::report`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub error: ClassifiedError,
    pub severity: Severity,
}

/// Maps a [`RawError`] to a localized message and a category.
///
/// Stateless apart from the shared read-only catalog; cheap to clone.
#[derive(Debug, Clone)]
pub struct ErrorClassifier {
    translator: MessageTranslator,
}

impl ErrorClassifier {
    pub fn new(catalog: Arc<MessageCatalog>) -> Self {
        Self {
            translator: MessageTranslator::new(catalog),
        }
    }

    pub fn catalog(&self) -> &MessageCatalog {
        self.translator.catalog()
    }

    pub fn translator(&self) -> &MessageTranslator {
        &self.translator
    }

    /// Classify a failed call. Never fails: unusable input ends up as
    /// `default_message` with [`ErrorCategory::Unknown`].
    pub fn classify(&self, raw: &RawError, default_message: &str) -> ClassifiedError {
        let catalog = self.catalog();

        let status = match raw.status_code {
            _ if raw.is_timeout => {
                tracing::debug!("Classified as timeout");
                return ClassifiedError::new(catalog.timeout_message(), ErrorCategory::Timeout);
            }
            None => {
                tracing::debug!("Classified as network failure");
                return ClassifiedError::new(catalog.network_message(), ErrorCategory::Network);
            }
            Some(status) => status,
        };

        if let Some(first) = first_validation_error(raw) {
            tracing::debug!(field = %first.field, "Classified from validation errors");
            return ClassifiedError::new(
                format!("{}: {}", first.field, first.message),
                ErrorCategory::Validation,
            );
        }

        if let Some((code, message)) = raw
            .error_code()
            .and_then(|code| catalog.code_message(code).map(|msg| (code, msg)))
        {
            tracing::debug!(code, "Classified from error code");
            let category = category_for_code(code).unwrap_or_else(|| ErrorCategory::from_status(status));
            return ClassifiedError::new(message, category);
        }

        if let Some(message) = raw.message() {
            tracing::debug!(status, "Classified from backend message");
            return ClassifiedError::new(
                self.translator.translate(message),
                ErrorCategory::from_status(status),
            );
        }

        if let Some(message) = catalog.status_message(status) {
            tracing::debug!(status, "Classified from status code");
            return ClassifiedError::new(message, ErrorCategory::from_status(status));
        }

        ClassifiedError::new(default_message, ErrorCategory::Unknown)
    }

    /// Classify with the catalog's default message
    pub fn classify_default(&self, raw: &RawError) -> ClassifiedError {
        self.classify(raw, self.catalog().default_message())
    }

    /// Classify, log the failure and pick a notification style
    pub fn report(&self, raw: &RawError, context: &str) -> Report {
        let error = self.classify_default(raw);
        diagnostics::log_error(raw, context);

        Report {
            severity: error.severity(),
            error,
        }
    }
}

/// First entry of a non-empty `validationErrors` array, if well-formed
fn first_validation_error(raw: &RawError) -> Option<ValidationError> {
    raw.body_object()?
        .get("validationErrors")?
        .as_array()?
        .first()
        .and_then(ValidationError::from_value)
}

/// Semantic group of a backend error code
fn category_for_code(code: &str) -> Option<ErrorCategory> {
    let category = match code {
        "UNAUTHORIZED" | "INVALID_REFRESH_TOKEN" | "ACCOUNT_DISABLED" | "INVALID_CREDENTIALS"
        | "INVALID_TOKEN" => ErrorCategory::Auth,
        "FORBIDDEN" => ErrorCategory::Permission,
        "NETWORK_ERROR" => ErrorCategory::Network,
        "TIMEOUT_ERROR" => ErrorCategory::Timeout,
        "INTERNAL_ERROR" | "SERVICE_UNAVAILABLE" | "HEALTH_CHECK_FAILED" => ErrorCategory::Server,
        "CANNOT_DISABLE_OWN_ACCOUNT" | "BORROW_LIMIT_EXCEEDED" | "BOOK_NOT_AVAILABLE"
        | "BOOK_ALREADY_RETURNED" => ErrorCategory::Conflict,
        "QUANTITY_MUST_BE_ZERO" => ErrorCategory::Validation,
        c if c.ends_with("_NOT_FOUND") => ErrorCategory::NotFound,
        c if c.ends_with("_EXISTS") || c.ends_with("_CONFLICT") || c.starts_with("CANNOT_DELETE") => {
            ErrorCategory::Conflict
        }
        c if c.starts_with("VALIDATION_") || c.starts_with("INVALID_") => ErrorCategory::Validation,
        _ => return None,
    };
    Some(category)
}
