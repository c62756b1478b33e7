//! JSON text helpers for editor surfaces.

use serde_json::Value;

use crate::error::ConnectorError;

/// Pretty-print a JSON text with two-space indentation.
///
/// Text that does not parse is an [`ConnectorError::InvalidJson`]; the
/// original text is never modified in place.
pub fn format_json_text(text: &str) -> Result<String, ConnectorError> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| ConnectorError::InvalidJson(e.to_string()))?;
    Ok(serde_json::to_string_pretty(&value)?)
}

/// Check a JSON text, reporting the parser's message for invalid input.
pub fn validate_json_text(text: &str) -> Result<(), ConnectorError> {
    serde_json::from_str::<Value>(text)
        .map(|_| ())
        .map_err(|e| ConnectorError::InvalidJson(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_pretty_prints_compact_text() {
        let formatted = format_json_text(r#"{"a":1,"b":[true,null]}"#).expect("ok");
        assert!(formatted.contains("\n"));
        assert!(formatted.contains("\"a\": 1"));
    }

    #[test]
    fn format_preserves_key_order() {
        let formatted = format_json_text(r#"{"z":1,"a":2}"#).expect("ok");
        assert!(formatted.find("\"z\"").unwrap() < formatted.find("\"a\"").unwrap());
    }

    #[test]
    fn invalid_text_reports_parser_message() {
        let err = format_json_text("{oops").unwrap_err();
        assert!(matches!(err, ConnectorError::InvalidJson(_)));
        assert!(validate_json_text("{oops").is_err());
        assert!(validate_json_text("[1, 2]").is_ok());
    }
}
