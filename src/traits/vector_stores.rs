//! Vector store capability trait

use crate::error::ConnectorError;
use crate::types::{VectorStore, VectorStoreRequest};
use async_trait::async_trait;

#[async_trait]
pub trait VectorStoreCapability: Send + Sync {
    /// Create a vector store over uploaded files.
    async fn create_vector_store(
        &self,
        request: VectorStoreRequest,
    ) -> Result<VectorStore, ConnectorError>;

    /// List existing vector stores.
    async fn list_vector_stores(&self) -> Result<Vec<VectorStore>, ConnectorError>;
}
