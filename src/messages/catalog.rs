//! Localized lookup tables
//!
//! A catalog is built once (built-in or from a JSON file) and shared
//! read-only through an `Arc`.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use super::vietnamese;
use crate::error::{AppError, AppResult};

/// Built-in Vietnamese catalog, shared by every caller that does not load its own
pub static VIETNAMESE: Lazy<Arc<MessageCatalog>> = Lazy::new(|| Arc::new(MessageCatalog::vietnamese()));

/// Localized template for a backend message carrying a dynamic value
#[derive(Debug, Clone)]
pub struct MessagePattern {
    trigger: String,
    capture: Option<Regex>,
    template: String,
    fallback: String,
}

impl MessagePattern {
    pub fn new(
        trigger: impl Into<String>,
        capture: Option<&str>,
        template: impl Into<String>,
        fallback: impl Into<String>,
    ) -> AppResult<Self> {
        let capture = capture
            .map(Regex::new)
            .transpose()
            .map_err(|e| AppError::InvalidPattern(e.to_string()))?;

        Ok(Self {
            trigger: trigger.into(),
            capture,
            template: template.into(),
            fallback: fallback.into(),
        })
    }

    /// Localized message if `message` contains the trigger
    pub fn apply(&self, message: &str) -> Option<String> {
        if !message.contains(&self.trigger) {
            return None;
        }

        let value = self
            .capture
            .as_ref()
            .and_then(|re| re.captures(message))
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str());

        Some(match value {
            Some(value) => self.template.replace("{value}", value),
            None => self.fallback.clone(),
        })
    }
}

#[derive(Debug, Deserialize)]
struct PatternFile {
    trigger: String,
    capture: Option<String>,
    template: String,
    fallback: String,
}

/// On-disk catalog layout. Omitted fixed phrases fall back to the built-in ones.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogFile {
    #[serde(default)]
    codes: IndexMap<String, String>,
    #[serde(default)]
    phrases: IndexMap<String, String>,
    #[serde(default)]
    statuses: BTreeMap<u16, String>,
    network_message: Option<String>,
    timeout_message: Option<String>,
    default_message: Option<String>,
    #[serde(default)]
    patterns: Vec<PatternFile>,
}

/// Code, phrase and status tables plus the fixed fallback phrases
#[derive(Debug, Clone)]
pub struct MessageCatalog {
    codes: IndexMap<String, String>,
    phrases: IndexMap<String, String>,
    statuses: BTreeMap<u16, String>,
    patterns: Vec<MessagePattern>,
    network_message: String,
    timeout_message: String,
    default_message: String,
}

impl MessageCatalog {
    /// Built-in Vietnamese catalog
    pub fn vietnamese() -> Self {
        let patterns = vietnamese::PATTERNS
            .iter()
            .filter_map(|(trigger, capture, template, fallback)| {
                match MessagePattern::new(*trigger, *capture, *template, *fallback) {
                    Ok(pattern) => Some(pattern),
                    Err(e) => {
                        tracing::warn!("Dropping built-in pattern '{}': {}", trigger, e);
                        None
                    }
                }
            })
            .collect();

        Self {
            codes: to_owned_map(vietnamese::CODE_MESSAGES),
            phrases: to_owned_map(vietnamese::PHRASES),
            statuses: vietnamese::STATUS_MESSAGES
                .iter()
                .map(|(status, msg)| (*status, msg.to_string()))
                .collect(),
            patterns,
            network_message: vietnamese::NETWORK_MESSAGE.to_string(),
            timeout_message: vietnamese::TIMEOUT_MESSAGE.to_string(),
            default_message: vietnamese::DEFAULT_MESSAGE.to_string(),
        }
    }

    /// Parse a JSON catalog
    pub fn from_json_str(source: &str) -> AppResult<Self> {
        let file: CatalogFile = serde_json::from_str(source)?;

        let patterns = file
            .patterns
            .into_iter()
            .map(|p| MessagePattern::new(p.trigger, p.capture.as_deref(), p.template, p.fallback))
            .collect::<AppResult<Vec<_>>>()?;

        Ok(Self {
            codes: file.codes,
            phrases: file.phrases,
            statuses: file.statuses,
            patterns,
            network_message: file
                .network_message
                .unwrap_or_else(|| vietnamese::NETWORK_MESSAGE.to_string()),
            timeout_message: file
                .timeout_message
                .unwrap_or_else(|| vietnamese::TIMEOUT_MESSAGE.to_string()),
            default_message: file
                .default_message
                .unwrap_or_else(|| vietnamese::DEFAULT_MESSAGE.to_string()),
        })
    }

    /// Read and parse a JSON catalog file
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| AppError::CatalogIo {
            path: path.display().to_string(),
            source,
        })?;

        let catalog = Self::from_json_str(&source)?;
        tracing::info!(
            "Loaded message catalog from {} ({} codes, {} phrases, {} statuses)",
            path.display(),
            catalog.codes.len(),
            catalog.phrases.len(),
            catalog.statuses.len()
        );
        Ok(catalog)
    }

    /// Replace the generic fallback message
    pub fn with_default_message(mut self, message: impl Into<String>) -> Self {
        self.default_message = message.into();
        self
    }

    /// No code, phrase or status entries at all
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty() && self.phrases.is_empty() && self.statuses.is_empty()
    }

    pub fn code_message(&self, code: &str) -> Option<&str> {
        self.codes.get(code).map(String::as_str)
    }

    pub fn phrase(&self, english: &str) -> Option<&str> {
        self.phrases.get(english).map(String::as_str)
    }

    /// Phrase pairs in table order
    pub fn phrases(&self) -> impl Iterator<Item = (&str, &str)> {
        self.phrases.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn patterns(&self) -> &[MessagePattern] {
        &self.patterns
    }

    pub fn status_message(&self, status: u16) -> Option<&str> {
        self.statuses.get(&status).map(String::as_str)
    }

    pub fn network_message(&self) -> &str {
        &self.network_message
    }

    pub fn timeout_message(&self) -> &str {
        &self.timeout_message
    }

    pub fn default_message(&self) -> &str {
        &self.default_message
    }
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self::vietnamese()
    }
}

fn to_owned_map(pairs: &[(&str, &str)]) -> IndexMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
