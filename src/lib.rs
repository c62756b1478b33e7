//! llm-connector
//!
//! Assembles request payloads for LLM provider APIs (primarily the OpenAI
//! Responses API) from a declarative [`ConnectorConfig`], infers JSON
//! Schemas from example documents, and ships a thin async client for the
//! provider-side operations the connector surface needs (file upload,
//! vector stores, model listing, moderation).
#![deny(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod providers;
pub mod schema;
pub mod transformers;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(feature = "server-adapters")]
pub mod server_adapters;

pub use error::ConnectorError;
pub use types::ConnectorConfig;
