//! Data models for failed calls and their classification

pub mod classified;
pub mod raw_error;

pub use classified::{ClassifiedError, ErrorCategory, Severity};
pub use raw_error::{validation_errors, ErrorDetails, RawError, ValidationError};
