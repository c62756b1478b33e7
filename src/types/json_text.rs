//! Two-state JSON field: raw editable text or a validated JSON value.
//!
//! Editor-facing fields (tool parameters, example documents, schema text)
//! start life as raw text and are transitioned to a validated value by an
//! explicit [`JsonText::parsed`] call. Consumers that need JSON never
//! operate on the raw state directly.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::error::ConnectorError;

/// A JSON document field in one of two explicit states.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum JsonText {
    /// Raw editable text, not yet validated.
    Raw(String),
    /// Validated JSON value.
    Json(Value),
}

impl JsonText {
    /// True when there is nothing to parse or emit.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Raw(text) => text.trim().is_empty(),
            Self::Json(value) => value.is_null(),
        }
    }

    /// Transition to the validated state.
    ///
    /// Raw text that does not parse is an [`ConnectorError::InvalidJson`];
    /// an already-validated value is returned as an owned copy.
    pub fn parsed(&self) -> Result<Value, ConnectorError> {
        match self {
            Self::Raw(text) => serde_json::from_str(text)
                .map_err(|e| ConnectorError::InvalidJson(e.to_string())),
            Self::Json(value) => Ok(value.clone()),
        }
    }

    /// Render as editable text (pretty-printed for validated values).
    pub fn to_text(&self) -> String {
        match self {
            Self::Raw(text) => text.clone(),
            Self::Json(value) => {
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            }
        }
    }
}

impl Default for JsonText {
    fn default() -> Self {
        Self::Raw(String::new())
    }
}

impl From<&str> for JsonText {
    fn from(text: &str) -> Self {
        Self::Raw(text.to_string())
    }
}

impl Serialize for JsonText {
    /// Raw text that parses as JSON is exported as the parsed value, falling
    /// back to the raw string otherwise; validated values export as-is.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Raw(text) => match serde_json::from_str::<Value>(text) {
                Ok(value) => value.serialize(serializer),
                Err(_) => text.serialize(serializer),
            },
            Self::Json(value) => value.serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn raw_text_parses_on_transition() {
        let field = JsonText::from(r#"{"a": 1}"#);
        assert_eq!(field.parsed().expect("ok"), json!({"a": 1}));
    }

    #[test]
    fn bad_raw_text_is_invalid_json() {
        let field = JsonText::from("{nope");
        assert!(matches!(field.parsed(), Err(ConnectorError::InvalidJson(_))));
    }

    #[test]
    fn blankness_covers_both_states() {
        assert!(JsonText::from("   ").is_blank());
        assert!(JsonText::Json(Value::Null).is_blank());
        assert!(!JsonText::Json(json!({})).is_blank());
    }

    #[test]
    fn export_embeds_parseable_text_as_value() {
        let exported = serde_json::to_value(JsonText::from(r#"{"x": true}"#)).expect("ok");
        assert_eq!(exported, json!({"x": true}));

        let fallback = serde_json::to_value(JsonText::from("plain text")).expect("ok");
        assert_eq!(fallback, json!("plain text"));
    }

    #[test]
    fn import_accepts_string_or_value() {
        let raw: JsonText = serde_json::from_value(json!("{\"a\":1}")).expect("ok");
        assert_eq!(raw, JsonText::Raw("{\"a\":1}".to_string()));

        let value: JsonText = serde_json::from_value(json!({"a": 1})).expect("ok");
        assert_eq!(value, JsonText::Json(json!({"a": 1})));
    }
}
