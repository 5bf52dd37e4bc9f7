//! English backend message to localized message

use std::sync::Arc;

use super::catalog::MessageCatalog;

/// Translates backend messages using a shared catalog
#[derive(Debug, Clone)]
pub struct MessageTranslator {
    catalog: Arc<MessageCatalog>,
}

impl MessageTranslator {
    pub fn new(catalog: Arc<MessageCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &MessageCatalog {
        &self.catalog
    }

    /// Translate a backend message.
    ///
    /// Tries an exact phrase, then the parametrized patterns, then replaces
    /// every known phrase found inside the message (first occurrence each,
    /// in table order). Unknown messages come back unchanged.
    pub fn translate(&self, message: &str) -> String {
        if message.is_empty() {
            return String::new();
        }

        if let Some(exact) = self.catalog.phrase(message) {
            return exact.to_string();
        }

        if let Some(templated) = self
            .catalog
            .patterns()
            .iter()
            .find_map(|pattern| pattern.apply(message))
        {
            return templated;
        }

        // Overlapping phrases may be translated twice.
        let mut translated = message.to_string();
        for (english, localized) in self.catalog.phrases() {
            if translated.contains(english) {
                translated = translated.replacen(english, localized, 1);
            }
        }
        translated
    }
}
