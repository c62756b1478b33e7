//! Core data types for the connector.

pub mod config;
pub mod evaluation;
pub mod files;
pub mod json_text;
pub mod moderation;
pub mod tools;
pub mod vector_store;
pub mod web_search;

pub use config::ConnectorConfig;
pub use evaluation::EvaluationSpec;
pub use files::{FileObject, FileUploadRequest};
pub use json_text::JsonText;
pub use moderation::ModerationRequest;
pub use tools::ToolDefinition;
pub use vector_store::{VectorStore, VectorStoreRequest};
pub use web_search::{SearchContextSize, WebSearchLocation, WebSearchOptions};
