//! maildeck-common — Shared types, errors, and configuration used across all Maildeck crates.

pub mod config;
pub mod content;
pub mod error;

// Re-export commonly used types
pub use config::Config;
pub use content::{Category, ContentItem, ContentType, Entity, EntityType, SearchQuery, Source};
pub use error::{ApiError, MaildeckError};
