//! Tool definition types for request assembly.

use serde::{Deserialize, Serialize};

use super::json_text::JsonText;
use super::web_search::{SearchContextSize, WebSearchLocation};

/// A user-defined tool carried in the connector configuration.
///
/// Emission rules: a `Function` is only written into a request body when its
/// name is non-empty and its parameters validate as JSON; an `Mcp` entry
/// requires all three of server label, server URL, and auth token.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "toolType", rename_all = "lowercase")]
pub enum ToolDefinition {
    /// Caller-declared function the model may request to invoke.
    Function {
        name: String,
        #[serde(default)]
        description: String,
        /// JSON-Schema parameters, raw text until explicitly parsed.
        #[serde(default)]
        parameters: JsonText,
    },
    /// Remote MCP tool server.
    Mcp {
        #[serde(default)]
        server_label: String,
        #[serde(default)]
        server_url: String,
        #[serde(default)]
        auth_token: String,
    },
}

impl ToolDefinition {
    /// Fresh function tool with the editor's default parameter skeleton.
    pub fn new_function() -> Self {
        Self::Function {
            name: String::new(),
            description: String::new(),
            parameters: JsonText::from(
                "{\n  \"type\": \"object\",\n  \"properties\": {},\n  \"required\": []\n}",
            ),
        }
    }
}

/// Provider-hosted tools the assembler can enable on a request.
#[derive(Debug, Clone, PartialEq)]
pub enum BuiltInTool {
    /// File search over selected vector stores.
    FileSearch { vector_store_ids: Vec<String> },
    /// Hosted web search with an approximate user location.
    WebSearchPreview {
        search_context_size: Option<SearchContextSize>,
        user_location: WebSearchLocation,
    },
}

impl BuiltInTool {
    /// Convert to the Responses API tool entry.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::FileSearch { vector_store_ids } => serde_json::json!({
                "type": "file_search",
                "vector_store_ids": vector_store_ids,
            }),
            Self::WebSearchPreview {
                search_context_size,
                user_location,
            } => serde_json::json!({
                "type": "web_search_preview",
                "search_context_size": search_context_size.unwrap_or_default().as_str(),
                "user_location": user_location.to_approximate_json(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_search_carries_store_ids() {
        let tool = BuiltInTool::FileSearch {
            vector_store_ids: vec!["vs1".into(), "vs2".into()],
        };
        let v = tool.to_json();
        assert_eq!(v.get("type").and_then(|s| s.as_str()), Some("file_search"));
        let ids = v
            .get("vector_store_ids")
            .and_then(|a| a.as_array())
            .cloned()
            .unwrap();
        assert_eq!(ids.len(), 2);
    }

    #[test]
    fn web_search_defaults_context_size_to_medium() {
        let tool = BuiltInTool::WebSearchPreview {
            search_context_size: None,
            user_location: WebSearchLocation::default(),
        };
        let v = tool.to_json();
        assert_eq!(
            v.get("search_context_size").and_then(|s| s.as_str()),
            Some("medium")
        );
        let loc = v.get("user_location").and_then(|o| o.as_object()).unwrap();
        assert_eq!(loc.get("type").and_then(|s| s.as_str()), Some("approximate"));
        assert!(loc.get("country").unwrap().is_null());
    }

    #[test]
    fn tool_definition_tag_round_trips() {
        let mcp = ToolDefinition::Mcp {
            server_label: "docs".into(),
            server_url: "https://mcp.example.com".into(),
            auth_token: "tok".into(),
        };
        let v = serde_json::to_value(&mcp).expect("ok");
        assert_eq!(v.get("toolType").and_then(|s| s.as_str()), Some("mcp"));
        let back: ToolDefinition = serde_json::from_value(v).expect("ok");
        assert!(matches!(back, ToolDefinition::Mcp { .. }));
    }

    #[test]
    fn imported_function_parameters_stay_editable() {
        let doc = serde_json::json!({
            "toolType": "function",
            "name": "lookup",
            "description": "search",
            "parameters": {"type": "object", "properties": {"q": {"type": "string"}}},
        });
        let tool: ToolDefinition = serde_json::from_value(doc).expect("ok");
        let ToolDefinition::Function { parameters, .. } = tool else {
            panic!("expected function tool");
        };
        assert!(parameters.to_text().contains("\"q\""));
    }
}
