//! Model listing capability trait

use crate::error::ConnectorError;
use async_trait::async_trait;

#[async_trait]
pub trait ModelListingCapability: Send + Sync {
    /// List model ids selectable through the connector, sorted.
    async fn list_models(&self) -> Result<Vec<String>, ConnectorError>;
}
