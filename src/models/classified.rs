//! Classification results handed back to callers

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// ErrorCategory
// ---------------------------------------------------------------------------

/// Coarse bucket used by callers to pick a UI reaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCategory {
    Auth,
    Permission,
    NotFound,
    Conflict,
    Network,
    Timeout,
    Server,
    Validation,
    Unknown,
}

impl ErrorCategory {
    /// Category implied by an HTTP status code alone
    pub fn from_status(status: u16) -> Self {
        match status {
            401 => ErrorCategory::Auth,
            403 => ErrorCategory::Permission,
            404 => ErrorCategory::NotFound,
            409 => ErrorCategory::Conflict,
            408 | 504 => ErrorCategory::Timeout,
            500..=599 => ErrorCategory::Server,
            400 | 422 => ErrorCategory::Validation,
            _ => ErrorCategory::Unknown,
        }
    }

    pub fn is_auth(self) -> bool {
        self == ErrorCategory::Auth
    }

    pub fn is_permission(self) -> bool {
        self == ErrorCategory::Permission
    }

    pub fn is_not_found(self) -> bool {
        self == ErrorCategory::NotFound
    }

    pub fn is_conflict(self) -> bool {
        self == ErrorCategory::Conflict
    }

    /// The caller should drop its session and send the user to the login page
    pub fn requires_login(self) -> bool {
        self.is_auth()
    }

    /// Toast style for this category
    pub fn severity(self) -> Severity {
        match self {
            ErrorCategory::Permission | ErrorCategory::NotFound | ErrorCategory::Conflict => {
                Severity::Warning
            }
            _ => Severity::Error,
        }
    }
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ErrorCategory::Auth => "AUTH",
            ErrorCategory::Permission => "PERMISSION",
            ErrorCategory::NotFound => "NOT_FOUND",
            ErrorCategory::Conflict => "CONFLICT",
            ErrorCategory::Network => "NETWORK",
            ErrorCategory::Timeout => "TIMEOUT",
            ErrorCategory::Server => "SERVER",
            ErrorCategory::Validation => "VALIDATION",
            ErrorCategory::Unknown => "UNKNOWN",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

/// Notification style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

// ---------------------------------------------------------------------------
// ClassifiedError
// ---------------------------------------------------------------------------

/// Localized message plus category for one failed call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ClassifiedError {
    pub message: String,
    pub category: ErrorCategory,
}

impl ClassifiedError {
    pub fn new(message: impl Into<String>, category: ErrorCategory) -> Self {
        Self {
            message: message.into(),
            category,
        }
    }

    pub fn severity(&self) -> Severity {
        self.category.severity()
    }
}

impl std::fmt::Display for ClassifiedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status() {
        assert_eq!(ErrorCategory::from_status(401), ErrorCategory::Auth);
        assert_eq!(ErrorCategory::from_status(403), ErrorCategory::Permission);
        assert_eq!(ErrorCategory::from_status(404), ErrorCategory::NotFound);
        assert_eq!(ErrorCategory::from_status(409), ErrorCategory::Conflict);
        assert_eq!(ErrorCategory::from_status(408), ErrorCategory::Timeout);
        assert_eq!(ErrorCategory::from_status(504), ErrorCategory::Timeout);
        assert_eq!(ErrorCategory::from_status(502), ErrorCategory::Server);
        assert_eq!(ErrorCategory::from_status(422), ErrorCategory::Validation);
        assert_eq!(ErrorCategory::from_status(429), ErrorCategory::Unknown);
        assert_eq!(ErrorCategory::from_status(418), ErrorCategory::Unknown);
    }

    #[test]
    fn test_severity() {
        assert_eq!(ErrorCategory::Auth.severity(), Severity::Error);
        assert_eq!(ErrorCategory::Conflict.severity(), Severity::Warning);
        assert_eq!(ErrorCategory::Server.severity(), Severity::Error);
    }

    #[test]
    fn test_predicates() {
        assert!(ErrorCategory::Auth.is_auth());
        assert!(ErrorCategory::Auth.requires_login());
        assert!(!ErrorCategory::Permission.requires_login());
        assert!(!ErrorCategory::Network.requires_login());

        assert!(ErrorCategory::Permission.is_permission());
        assert!(!ErrorCategory::Auth.is_permission());

        assert!(ErrorCategory::NotFound.is_not_found());
        assert!(!ErrorCategory::Conflict.is_not_found());

        assert!(ErrorCategory::Conflict.is_conflict());
        assert!(!ErrorCategory::Validation.is_conflict());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&ErrorCategory::NotFound).unwrap();
        assert_eq!(json, "\"NOT_FOUND\"");
        assert_eq!(ErrorCategory::NotFound.to_string(), "NOT_FOUND");
    }
}
