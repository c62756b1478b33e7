//! File upload types.

use serde::{Deserialize, Serialize};

/// Request to upload one file to provider storage.
#[derive(Debug, Clone)]
pub struct FileUploadRequest {
    /// Original filename, extension included.
    pub filename: String,
    /// File content.
    pub content: Vec<u8>,
    /// Provider purpose tag (e.g. "user_data").
    pub purpose: String,
}

impl FileUploadRequest {
    pub fn new(filename: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            content,
            purpose: "user_data".to_string(),
        }
    }

    pub fn with_purpose(mut self, purpose: impl Into<String>) -> Self {
        self.purpose = purpose.into();
        self
    }
}

/// Provider file object, as returned by the Files API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileObject {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bytes: Option<u64>,
}
