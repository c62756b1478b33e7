//! Evaluation definition carried in the connector configuration.
//!
//! Evaluations are configuration-only here: they are exported with the
//! configuration document and executed by an external evaluation tool.

use serde::{Deserialize, Serialize};

/// One configured evaluation of the model output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationSpec {
    /// Evaluation category key (see [`crate::catalog::evaluation_categories`]).
    #[serde(default)]
    pub category: String,
    /// Evaluation type key within the category.
    #[serde(default, rename = "type")]
    pub eval_type: String,
    /// Custom evaluator prompt (custom type only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_def: Option<String>,
    /// Expected structural format for format checks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Pattern for regex validation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regex: Option<String>,
    /// Comma-separated keywords for presence checks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    /// Unit for response-length checks ("character" or "word").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_length_type: Option<String>,
    /// Maximum response length in the chosen unit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_response_length: Option<u32>,
    /// Stop the pipeline when this evaluation fails.
    #[serde(default)]
    pub stop: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_keys_are_camel_case() {
        let eval = EvaluationSpec {
            category: "Structural/Format".into(),
            eval_type: "regex".into(),
            regex: Some("^ok$".into()),
            response_length_type: Some("character".into()),
            ..Default::default()
        };
        let v = serde_json::to_value(&eval).expect("ok");
        assert_eq!(v["type"], serde_json::json!("regex"));
        assert_eq!(v["responseLengthType"], serde_json::json!("character"));
        assert!(v.get("customDef").is_none());
    }
}
