//! OpenAI Responses API request transformer.
//!
//! Maps the connector configuration into the Responses API body shape:
//! ordered `input` messages, hosted and user-defined tool entries, and the
//! structured-output directive.

use serde_json::{Value, json};

use crate::error::ConnectorError;
use crate::schema::enforce_no_additional_props;
use crate::transformers::RequestTransformer;
use crate::types::ConnectorConfig;
use crate::types::tools::{BuiltInTool, ToolDefinition};

/// Request transformer for the OpenAI Responses API.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenAiResponsesRequestTransformer;

impl OpenAiResponsesRequestTransformer {
    /// Natural-language web-search guidance appended to the user prompt.
    ///
    /// Empty when web search is disabled or no parameter yields a line; the
    /// header is only emitted together with at least one line.
    fn web_search_suffix(config: &ConnectorConfig) -> String {
        if !config.allow_web_search {
            return String::new();
        }
        let lines = config.web_search.instruction_lines();
        if lines.is_empty() {
            return String::new();
        }
        let details: Vec<String> = lines.iter().map(|line| format!("- {line}")).collect();
        format!("\n\nWeb Search Instructions:\n{}", details.join("\n"))
    }

    /// Build the ordered `input` message list.
    fn build_input(config: &ConnectorConfig, user_prompt: &str) -> Vec<Value> {
        let mut input = Vec::with_capacity(2);

        let system_prompt = config.system_prompt.trim();
        if !system_prompt.is_empty() {
            input.push(json!({ "role": "system", "content": system_prompt }));
        }

        let full_user_prompt = format!("{user_prompt}{}", Self::web_search_suffix(config));
        input.push(json!({ "role": "user", "content": full_user_prompt.trim() }));

        input
    }

    /// Assemble the tool list: file search, web search, then user-defined
    /// tools in declaration order.
    fn build_tools(config: &ConnectorConfig) -> Result<Vec<Value>, ConnectorError> {
        let mut tools = Vec::new();

        if !config.selected_vector_store_ids.is_empty() {
            tools.push(
                BuiltInTool::FileSearch {
                    vector_store_ids: config.selected_vector_store_ids.clone(),
                }
                .to_json(),
            );
        }

        if config.allow_web_search {
            tools.push(
                BuiltInTool::WebSearchPreview {
                    search_context_size: config.web_search_params.search_context_size,
                    user_location: config.web_search_params.clone(),
                }
                .to_json(),
            );
        }

        for tool in &config.tools {
            match tool {
                ToolDefinition::Function {
                    name,
                    description,
                    parameters,
                } => {
                    if name.is_empty() || parameters.is_blank() {
                        continue;
                    }
                    // A parameter parse failure aborts the whole assembly
                    // rather than silently skipping the tool.
                    let parsed = parameters.parsed().map_err(|_| {
                        ConnectorError::ValidationError(format!(
                            "Invalid JSON in parameters for function \"{name}\"."
                        ))
                    })?;
                    tools.push(json!({
                        "type": "function",
                        "function": {
                            "name": name,
                            "description": description,
                            "parameters": parsed,
                        },
                    }));
                }
                ToolDefinition::Mcp {
                    server_label,
                    server_url,
                    auth_token,
                } => {
                    if server_label.is_empty() || server_url.is_empty() || auth_token.is_empty() {
                        continue;
                    }
                    tools.push(json!({
                        "type": "mcp",
                        "server_label": server_label,
                        "server_url": server_url,
                        "headers": { "Authorization": format!("Bearer {auth_token}") },
                    }));
                }
            }
        }

        Ok(tools)
    }
}

impl RequestTransformer for OpenAiResponsesRequestTransformer {
    fn provider_id(&self) -> &str {
        "openai_responses"
    }

    fn transform_request(
        &self,
        config: &ConnectorConfig,
    ) -> Result<serde_json::Value, ConnectorError> {
        let user_prompt = config.user_prompt.trim();
        if user_prompt.is_empty() {
            return Err(ConnectorError::ValidationError(
                "User prompt is required.".to_string(),
            ));
        }

        let model = config.selected_model.trim();
        if model.is_empty() {
            return Err(ConnectorError::ValidationError(
                "Model is required.".to_string(),
            ));
        }

        let mut body = json!({
            "model": model,
            "temperature": config.temperature,
            "top_p": config.top_p,
            "background": config.background_mode,
            "store": config.store_logs_provider,
            "input": Self::build_input(config, user_prompt),
            "tool_choice": config.tool_choice,
            "tools": Self::build_tools(config)?,
        });

        if !config.json_schema.is_blank() {
            // Parse a fresh copy and close every object node; the pass must
            // not mutate the configuration's own schema text.
            let mut schema = config.json_schema.parsed().map_err(|_| {
                ConnectorError::ValidationError(
                    "Invalid JSON Schema for structured output.".to_string(),
                )
            })?;
            enforce_no_additional_props(&mut schema);
            body["text"] = json!({
                "format": {
                    "type": "json_schema",
                    "name": "structured_output",
                    "strict": true,
                    "schema": schema,
                },
            });
        }

        Ok(body)
    }
}
