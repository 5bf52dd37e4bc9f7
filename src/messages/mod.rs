//! Localized message tables and translation
//!
//! This module holds the catalogs mapping backend error codes, English
//! phrases and HTTP statuses to user-facing text.

pub mod catalog;
pub mod translator;
mod vietnamese;

pub use catalog::{MessageCatalog, MessagePattern, VIETNAMESE};
pub use translator::MessageTranslator;
