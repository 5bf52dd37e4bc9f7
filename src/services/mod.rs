//! Classification and transport services

pub mod classifier;
pub mod diagnostics;
pub mod transport;

use std::sync::Arc;

use crate::{
    config::{ApiConfig, CatalogConfig},
    error::AppResult,
    messages::{MessageCatalog, VIETNAMESE},
};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub classifier: classifier::ErrorClassifier,
    pub api: transport::ApiClient,
}

impl Services {
    /// Build the catalog once and wire the services around it
    pub fn new(catalog_config: &CatalogConfig, api_config: &ApiConfig) -> AppResult<Self> {
        let catalog = build_catalog(catalog_config)?;

        Ok(Self {
            classifier: classifier::ErrorClassifier::new(catalog),
            api: transport::ApiClient::new(api_config)?,
        })
    }
}

fn build_catalog(config: &CatalogConfig) -> AppResult<Arc<MessageCatalog>> {
    let catalog = match (&config.path, &config.default_message) {
        (None, None) => return Ok(VIETNAMESE.clone()),
        (Some(path), _) => MessageCatalog::load(path)?,
        (None, Some(_)) => MessageCatalog::vietnamese(),
    };

    Ok(Arc::new(match &config.default_message {
        Some(message) => catalog.with_default_message(message.clone()),
        None => catalog,
    }))
}
