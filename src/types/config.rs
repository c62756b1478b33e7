//! The connector configuration record.
//!
//! One flat record of every user-edited field, owned by a single editing
//! session. Serializes to and from the JSON configuration document used for
//! import/export (camelCase wire keys).

use serde::{Deserialize, Serialize};

use crate::catalog::ProviderKind;
use crate::error::ConnectorError;

use super::evaluation::EvaluationSpec;
use super::json_text::JsonText;
use super::tools::ToolDefinition;
use super::web_search::{SearchContextSize, WebSearchLocation, WebSearchOptions};

/// All user-edited connector fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectorConfig {
    #[serde(default)]
    pub step_name: String,
    #[serde(default)]
    pub provider: ProviderKind,
    /// Base URL for the Custom provider.
    #[serde(default)]
    pub provider_url: String,
    /// Provider account id used for authentication.
    #[serde(default)]
    pub account: String,
    /// Evaluator account id, serialized as `account2`.
    #[serde(default, rename = "account2")]
    pub evaluator_account: String,
    #[serde(default)]
    pub selected_model: String,
    #[serde(default)]
    pub temperature: f64,
    #[serde(default, rename = "top_p")]
    pub top_p: f64,
    #[serde(default, rename = "top_k")]
    pub top_k: u32,
    /// Store request/response logs on the provider side.
    #[serde(default)]
    pub store_logs_provider: bool,
    /// Max-token budget as entered; not all target APIs consume it.
    #[serde(default)]
    pub max_tokens: String,
    #[serde(default)]
    pub user_prompt: String,
    #[serde(default)]
    pub system_prompt: String,
    #[serde(default)]
    pub allow_web_search: bool,
    #[serde(default)]
    pub web_search: WebSearchOptions,
    #[serde(default)]
    pub web_search_params: WebSearchLocation,
    #[serde(default)]
    pub selected_vector_store_ids: Vec<String>,
    /// Opaque tool-choice selector ("auto", "none", or a tool name).
    #[serde(default)]
    pub tool_choice: String,
    #[serde(default)]
    pub tools: Vec<ToolDefinition>,
    /// Example output document used for schema inference.
    #[serde(default)]
    pub output_example: JsonText,
    /// Structured-output JSON Schema text.
    #[serde(default)]
    pub json_schema: JsonText,
    /// Run the request in provider background mode.
    #[serde(default)]
    pub background_mode: bool,
    #[serde(default)]
    pub evaluator_tool: String,
    #[serde(default)]
    pub send_to_evaluation_tool: bool,
    #[serde(default)]
    pub evaluations: Vec<EvaluationSpec>,
}

impl Default for ConnectorConfig {
    /// The editor's initial state.
    fn default() -> Self {
        Self {
            step_name: String::new(),
            provider: ProviderKind::OpenAi,
            provider_url: String::new(),
            account: String::new(),
            evaluator_account: String::new(),
            selected_model: "gpt-4.1".to_string(),
            temperature: 0.1,
            top_p: 0.9,
            top_k: 50,
            store_logs_provider: true,
            max_tokens: "2048".to_string(),
            user_prompt: String::new(),
            system_prompt: String::new(),
            allow_web_search: false,
            web_search: WebSearchOptions {
                search_engine: Some("google".to_string()),
                num_results: Some(10),
                follow_links_depth: Some(1),
                cache_ttl: Some(3600),
                safe_search: Some(false),
                rerank_results: Some(true),
                ..Default::default()
            },
            web_search_params: WebSearchLocation {
                country: Some("US".to_string()),
                timezone: Some("America/New_York".to_string()),
                search_context_size: Some(SearchContextSize::Medium),
                ..Default::default()
            },
            selected_vector_store_ids: Vec::new(),
            tool_choice: "auto".to_string(),
            tools: Vec::new(),
            output_example: JsonText::from(
                "{\n  \"name\": \"John Doe\",\n  \"age\": 40,\n  \"active\": true,\n  \"hobbies\": [\"reading\",  \"gaming\",  \"music\" ]\n}",
            ),
            json_schema: JsonText::from(
                "{\n  \"type\": \"object\",\n  \"properties\": {\n    \"answer\": { \"type\": \"string\" }\n  }\n}",
            ),
            background_mode: false,
            evaluator_tool: String::new(),
            send_to_evaluation_tool: false,
            evaluations: Vec::new(),
        }
    }
}

impl ConnectorConfig {
    /// Serialize to the pretty-printed configuration document.
    pub fn export_json(&self) -> Result<String, ConnectorError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize a configuration document.
    ///
    /// Missing optional fields take their type defaults; unparseable text is
    /// an [`ConnectorError::InvalidJson`].
    pub fn import_json(document: &str) -> Result<Self, ConnectorError> {
        serde_json::from_str(document).map_err(|e| ConnectorError::InvalidJson(e.to_string()))
    }
}
