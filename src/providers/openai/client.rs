//! `OpenAI` client implementation.
//!
//! Covers the provider-side operations the connector surface proxies: file
//! upload, vector stores, model listing, and moderation.

use async_trait::async_trait;
use secrecy::ExposeSecret;
use serde_json::{Value, json};
use tracing::{debug, warn};

use crate::error::ConnectorError;
use crate::traits::{
    FileManagementCapability, ModelListingCapability, ModerationCapability, VectorStoreCapability,
};
use crate::types::{
    FileObject, FileUploadRequest, ModerationRequest, VectorStore, VectorStoreRequest,
};

use super::config::OpenAiConfig;
use super::types::{ModelsResponse, VectorStoresResponse};

/// Upload extensions accepted by the connector surface.
const ALLOWED_UPLOAD_EXTENSIONS: &[&str] = &["csv", "txt", "pdf"];
/// MIME types matching the accepted extensions.
const ALLOWED_UPLOAD_MIME_TYPES: &[&str] = &["text/csv", "text/plain", "application/pdf"];
/// Maximum upload size in bytes (5 MB).
const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;
/// Name substituted when a vector store is created without one.
const DEFAULT_VECTOR_STORE_NAME: &str = "LLMConnector Vector Store";

/// `OpenAI` client.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    config: OpenAiConfig,
    http_client: reqwest::Client,
}

impl OpenAiClient {
    /// Create a client with a fresh HTTP client.
    pub fn new(config: OpenAiConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }

    /// Create a client reusing an existing HTTP client.
    pub const fn new_with_client(config: OpenAiConfig, http_client: reqwest::Client) -> Self {
        Self {
            config,
            http_client,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url)
    }

    fn apply_headers(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let mut request = request.bearer_auth(self.config.api_key.expose_secret());
        if let Some(organization) = &self.config.organization {
            request = request.header("OpenAI-Organization", organization);
        }
        if let Some(project) = &self.config.project {
            request = request.header("OpenAI-Project", project);
        }
        request
    }

    /// Read a response body, mapping non-success statuses to [`ConnectorError::ApiError`]
    /// with the provider's `error.message` when one is present.
    async fn read_json(response: reqwest::Response) -> Result<Value, ConnectorError> {
        let status = response.status();
        let text = response.text().await?;
        let parsed = serde_json::from_str::<Value>(&text);

        if !status.is_success() {
            let message = parsed
                .ok()
                .as_ref()
                .and_then(|body| body.pointer("/error/message"))
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or(text);
            warn!(status = status.as_u16(), "OpenAI API request failed");
            return Err(ConnectorError::api_error(status.as_u16(), message));
        }

        parsed.map_err(|e| {
            ConnectorError::ParseError(format!("Failed to parse OpenAI response: {e}"))
        })
    }

    /// Validate an upload before any network traffic.
    fn validate_upload_request(request: &FileUploadRequest) -> Result<(), ConnectorError> {
        if request.filename.is_empty() {
            return Err(ConnectorError::ValidationError(
                "Filename cannot be empty".to_string(),
            ));
        }

        if request.content.len() as u64 > MAX_UPLOAD_BYTES {
            return Err(ConnectorError::ValidationError(format!(
                "File size {} bytes exceeds maximum allowed size of {MAX_UPLOAD_BYTES} bytes",
                request.content.len()
            )));
        }

        let extension = request
            .filename
            .split('.')
            .next_back()
            .map(str::to_lowercase)
            .unwrap_or_default();
        if !ALLOWED_UPLOAD_EXTENSIONS.contains(&extension.as_str()) {
            return Err(ConnectorError::ValidationError(format!(
                "Unsupported file type: {extension}. Allowed types: {ALLOWED_UPLOAD_EXTENSIONS:?}"
            )));
        }

        let mime = mime_guess::from_path(&request.filename).first_or_octet_stream();
        if !ALLOWED_UPLOAD_MIME_TYPES.contains(&mime.essence_str()) {
            return Err(ConnectorError::ValidationError(format!(
                "Unsupported file type: {mime}"
            )));
        }

        Ok(())
    }

    /// Round every numeric category score in the first moderation result to
    /// five decimal places, in place.
    fn round_category_scores(document: &mut Value) {
        if let Some(scores) = document
            .pointer_mut("/results/0/category_scores")
            .and_then(Value::as_object_mut)
        {
            for score in scores.values_mut() {
                if let Some(value) = score.as_f64() {
                    *score = json!((value * 100_000.0).round() / 100_000.0);
                }
            }
        }
    }
}

#[async_trait]
impl FileManagementCapability for OpenAiClient {
    async fn upload_file(&self, request: FileUploadRequest) -> Result<FileObject, ConnectorError> {
        Self::validate_upload_request(&request)?;

        let mime = mime_guess::from_path(&request.filename).first_or_octet_stream();
        let part = reqwest::multipart::Part::bytes(request.content)
            .file_name(request.filename.clone())
            .mime_str(mime.essence_str())
            .map_err(|e| ConnectorError::HttpError(e.to_string()))?;
        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("purpose", request.purpose);

        debug!(filename = %request.filename, "uploading file");
        let response = self
            .apply_headers(self.http_client.post(self.url("/files")))
            .multipart(form)
            .send()
            .await?;
        let body = Self::read_json(response).await?;
        serde_json::from_value(body).map_err(|e| {
            ConnectorError::ParseError(format!("Failed to parse OpenAI file response: {e}"))
        })
    }
}

#[async_trait]
impl VectorStoreCapability for OpenAiClient {
    async fn create_vector_store(
        &self,
        request: VectorStoreRequest,
    ) -> Result<VectorStore, ConnectorError> {
        if request.file_ids.is_empty() {
            return Err(ConnectorError::ValidationError(
                "Missing or invalid 'file_ids'".to_string(),
            ));
        }

        let name = if request.name.trim().is_empty() {
            DEFAULT_VECTOR_STORE_NAME.to_string()
        } else {
            request.name
        };
        let mut body = json!({
            "file_ids": request.file_ids,
            "name": name,
        });
        if let Some(days) = request.expires_in_days {
            body["expires_after"] = json!({ "anchor": "last_active_at", "days": days });
        }

        debug!("creating vector store");
        let response = self
            .apply_headers(self.http_client.post(self.url("/vector_stores")))
            .json(&body)
            .send()
            .await?;
        let body = Self::read_json(response).await?;
        serde_json::from_value(body).map_err(|e| {
            ConnectorError::ParseError(format!("Failed to parse OpenAI vector store: {e}"))
        })
    }

    async fn list_vector_stores(&self) -> Result<Vec<VectorStore>, ConnectorError> {
        let response = self
            .apply_headers(self.http_client.get(self.url("/vector_stores")))
            .send()
            .await?;
        let body = Self::read_json(response).await?;
        let page: VectorStoresResponse = serde_json::from_value(body).map_err(|e| {
            ConnectorError::ParseError(format!("Failed to parse OpenAI vector stores: {e}"))
        })?;
        Ok(page.data)
    }
}

#[async_trait]
impl ModelListingCapability for OpenAiClient {
    async fn list_models(&self) -> Result<Vec<String>, ConnectorError> {
        let response = self
            .apply_headers(self.http_client.get(self.url("/models")))
            .send()
            .await?;
        let body = Self::read_json(response).await?;
        let page: ModelsResponse = serde_json::from_value(body).map_err(|e| {
            ConnectorError::ParseError(format!("Failed to parse OpenAI models response: {e}"))
        })?;

        // Keep the chat-capable families (gpt-*, o*) the connector can drive.
        let mut ids: Vec<String> = page
            .data
            .into_iter()
            .map(|model| model.id)
            .filter(|id| id.starts_with("gpt-") || id.starts_with('o'))
            .collect();
        ids.sort();
        Ok(ids)
    }
}

#[async_trait]
impl ModerationCapability for OpenAiClient {
    async fn moderate(&self, request: ModerationRequest) -> Result<Value, ConnectorError> {
        let response = self
            .apply_headers(self.http_client.post(self.url("/moderations")))
            .json(&json!({ "input": request.input }))
            .send()
            .await?;
        let mut body = Self::read_json(response).await?;
        Self::round_category_scores(&mut body);
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload(filename: &str, size: usize) -> FileUploadRequest {
        FileUploadRequest::new(filename, vec![0u8; size])
    }

    #[test]
    fn upload_validation_accepts_allowed_types() {
        for name in ["a.csv", "b.txt", "c.pdf", "d.CSV"] {
            assert!(OpenAiClient::validate_upload_request(&upload(name, 10)).is_ok());
        }
    }

    #[test]
    fn upload_validation_rejects_unknown_extension() {
        let err = OpenAiClient::validate_upload_request(&upload("notes.docx", 10)).unwrap_err();
        assert!(matches!(err, ConnectorError::ValidationError(_)));
    }

    #[test]
    fn upload_validation_rejects_oversized_file() {
        let err = OpenAiClient::validate_upload_request(&upload("big.txt", 6 * 1024 * 1024))
            .unwrap_err();
        assert!(matches!(err, ConnectorError::ValidationError(_)));
    }

    #[test]
    fn upload_validation_rejects_empty_filename() {
        let err = OpenAiClient::validate_upload_request(&upload("", 10)).unwrap_err();
        assert!(matches!(err, ConnectorError::ValidationError(_)));
    }

    #[test]
    fn category_scores_round_to_five_places() {
        let mut document = json!({
            "results": [{
                "flagged": false,
                "category_scores": { "hate": 0.123456789, "violence": 1e-9 },
            }],
        });
        OpenAiClient::round_category_scores(&mut document);
        assert_eq!(
            document["results"][0]["category_scores"]["hate"],
            json!(0.12346)
        );
        assert_eq!(
            document["results"][0]["category_scores"]["violence"],
            json!(0.0)
        );
    }

    #[test]
    fn rounding_tolerates_absent_scores() {
        let mut document = json!({ "results": [] });
        let before = document.clone();
        OpenAiClient::round_category_scores(&mut document);
        assert_eq!(document, before);
    }
}
