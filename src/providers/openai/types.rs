//! OpenAI wire types.
//!
//! Only the fields the connector reads are modeled; everything else in the
//! provider responses is ignored on deserialization.

use serde::Deserialize;

use crate::types::VectorStore;

/// `GET /models` response page.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelsResponse {
    pub data: Vec<ModelEntry>,
}

/// One entry of the models listing.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelEntry {
    pub id: String,
}

/// `GET /vector_stores` response page.
#[derive(Debug, Clone, Deserialize)]
pub struct VectorStoresResponse {
    pub data: Vec<VectorStore>,
}
