//! Axum-specific server adapters
//!
//! Thin proxy handlers that delegate to [`OpenAiClient`] and translate
//! [`ConnectorError`] into HTTP statuses: validation failures are 400,
//! provider errors keep their status, transport failures are 502.
//!
//! ## Example
//!
//! ```rust,no_run
//! use llm_connector::providers::openai::{OpenAiClient, OpenAiConfig};
//! use llm_connector::server_adapters::proxy_router;
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = OpenAiClient::new(OpenAiConfig::new("sk-..."));
//!     let app = proxy_router(client);
//!     // ... serve the app
//! }
//! ```

use std::sync::Arc;

use axum::Router;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use serde::Deserialize;
use serde_json::json;
use tracing::error;

use crate::error::ConnectorError;
use crate::providers::openai::OpenAiClient;
use crate::traits::{
    FileManagementCapability, ModelListingCapability, ModerationCapability, VectorStoreCapability,
};
use crate::types::{FileUploadRequest, ModerationRequest, VectorStoreRequest};

type SharedClient = Arc<OpenAiClient>;

/// Build a router with the connector's five proxy routes.
pub fn proxy_router(client: OpenAiClient) -> Router {
    Router::new()
        .route("/api/upload-openai-file", post(upload_file))
        .route("/api/create-openai-vectorstore", post(create_vector_store))
        .route("/api/list-openai-vectorstores", get(list_vector_stores))
        .route("/api/list-openai-models", get(list_models))
        .route("/api/openai-moderations", post(moderations))
        .with_state(Arc::new(client))
}

fn error_response(err: ConnectorError) -> Response {
    let status = match &err {
        ConnectorError::ValidationError(_) | ConnectorError::InvalidJson(_) => {
            StatusCode::BAD_REQUEST
        }
        ConnectorError::ApiError { code, .. } => {
            StatusCode::from_u16(*code).unwrap_or(StatusCode::BAD_GATEWAY)
        }
        ConnectorError::HttpError(_) => StatusCode::BAD_GATEWAY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    error!(%err, "proxy request failed");
    (status, Json(json!({ "error": err.to_string() }))).into_response()
}

async fn upload_file(State(client): State<SharedClient>, mut multipart: Multipart) -> Response {
    let mut filename = String::new();
    let mut content: Option<Vec<u8>> = None;
    let mut purpose = "user_data".to_string();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                return error_response(ConnectorError::ValidationError(format!(
                    "Malformed multipart body: {e}"
                )));
            }
        };
        let field_name = field.name().unwrap_or_default().to_string();
        match field_name.as_str() {
            "file" => {
                filename = field.file_name().unwrap_or_default().to_string();
                match field.bytes().await {
                    Ok(bytes) => content = Some(bytes.to_vec()),
                    Err(e) => {
                        return error_response(ConnectorError::ValidationError(format!(
                            "Failed to read uploaded file: {e}"
                        )));
                    }
                }
            }
            "purpose" => {
                if let Ok(text) = field.text().await {
                    purpose = text;
                }
            }
            _ => {}
        }
    }

    let Some(content) = content else {
        return error_response(ConnectorError::ValidationError(
            "No valid file uploaded".to_string(),
        ));
    };

    let request = FileUploadRequest::new(filename, content).with_purpose(purpose);
    match client.upload_file(request).await {
        Ok(file) => Json(file).into_response(),
        Err(err) => error_response(err),
    }
}

#[derive(Debug, Deserialize)]
struct CreateVectorStorePayload {
    #[serde(default)]
    name: String,
    #[serde(default)]
    file_ids: Vec<String>,
    #[serde(default)]
    expires_after: Option<ExpiresAfterPayload>,
}

#[derive(Debug, Deserialize)]
struct ExpiresAfterPayload {
    #[serde(default)]
    days: Option<u32>,
}

async fn create_vector_store(
    State(client): State<SharedClient>,
    Json(payload): Json<CreateVectorStorePayload>,
) -> Response {
    let mut request = VectorStoreRequest::new(payload.name, payload.file_ids);
    request.expires_in_days = payload.expires_after.and_then(|e| e.days);

    match client.create_vector_store(request).await {
        Ok(store) => Json(store).into_response(),
        Err(err) => error_response(err),
    }
}

async fn list_vector_stores(State(client): State<SharedClient>) -> Response {
    match client.list_vector_stores().await {
        Ok(stores) => Json(json!({ "data": stores })).into_response(),
        Err(err) => error_response(err),
    }
}

async fn list_models(State(client): State<SharedClient>) -> Response {
    match client.list_models().await {
        Ok(models) => Json(json!({ "models": models })).into_response(),
        Err(err) => error_response(err),
    }
}

#[derive(Debug, Deserialize)]
struct ModerationPayload {
    #[serde(default)]
    input: String,
}

async fn moderations(
    State(client): State<SharedClient>,
    Json(payload): Json<ModerationPayload>,
) -> Response {
    match client.moderate(ModerationRequest::new(payload.input)).await {
        Ok(document) => Json(document).into_response(),
        Err(err) => error_response(err),
    }
}
