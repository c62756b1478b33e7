//! Moderation capability trait

use crate::error::ConnectorError;
use crate::types::ModerationRequest;
use async_trait::async_trait;

#[async_trait]
pub trait ModerationCapability: Send + Sync {
    /// Run content moderation and return the provider response document.
    async fn moderate(&self, request: ModerationRequest)
    -> Result<serde_json::Value, ConnectorError>;
}
