//! File management capability trait

use crate::error::ConnectorError;
use crate::types::{FileObject, FileUploadRequest};
use async_trait::async_trait;

#[async_trait]
pub trait FileManagementCapability: Send + Sync {
    /// Upload a file to provider storage.
    async fn upload_file(&self, request: FileUploadRequest) -> Result<FileObject, ConnectorError>;
}
