//! Vector store types.

use serde::{Deserialize, Serialize};

/// Request to create a vector store over previously uploaded files.
#[derive(Debug, Clone, Default)]
pub struct VectorStoreRequest {
    /// Display name; a default is substituted when blank.
    pub name: String,
    /// Uploaded file ids to index. Must be non-empty.
    pub file_ids: Vec<String>,
    /// Optional expiry in days, anchored to last activity.
    pub expires_in_days: Option<u32>,
}

impl VectorStoreRequest {
    pub fn new(name: impl Into<String>, file_ids: Vec<String>) -> Self {
        Self {
            name: name.into(),
            file_ids,
            expires_in_days: None,
        }
    }

    pub fn with_expiry_days(mut self, days: u32) -> Self {
        self.expires_in_days = Some(days);
        self
    }
}

/// Provider vector store summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorStore {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl VectorStore {
    /// Display name, falling back to the id when the store is unnamed.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().filter(|n| !n.is_empty()).unwrap_or(&self.id)
    }
}
