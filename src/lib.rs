//! Library admin error service
//!
//! Classifies failed calls to the library-management REST backend into a
//! localized user-facing message and a coarse category, and exposes that
//! classification over a small JSON API.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod messages;
pub mod models;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use messages::{MessageCatalog, MessageTranslator};
pub use models::{ClassifiedError, ErrorCategory, RawError, Severity};
pub use services::classifier::ErrorClassifier;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

impl AppState {
    pub fn new(config: AppConfig) -> AppResult<Self> {
        let services = services::Services::new(&config.catalog, &config.api)?;
        Ok(Self {
            config: Arc::new(config),
            services: Arc::new(services),
        })
    }
}
