//! Error types for the connector library.

use thiserror::Error;

/// Unified error type for connector operations.
///
/// Every variant corresponds to one user- or provider-correctable condition;
/// none are retried automatically and none are process-fatal.
#[derive(Debug, Error)]
pub enum ConnectorError {
    /// User-supplied text is not parseable JSON.
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// A semantically required field is missing or a tool definition is malformed.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// The schema inferencer was given a non-object top-level value.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Transport-level HTTP failure.
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// Non-success response from the provider API.
    #[error("API error {code}: {message}")]
    ApiError { code: u16, message: String },

    /// Internal JSON serialization failure.
    #[error("JSON error: {0}")]
    JsonError(String),
}

impl ConnectorError {
    /// Build an API error from a provider status code and message body.
    pub fn api_error(code: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            code,
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for ConnectorError {
    fn from(err: reqwest::Error) -> Self {
        Self::HttpError(err.to_string())
    }
}

impl From<serde_json::Error> for ConnectorError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_formats_code_and_message() {
        let err = ConnectorError::api_error(429, "rate limited");
        assert_eq!(err.to_string(), "API error 429: rate limited");
    }

    #[test]
    fn json_error_converts_from_serde() {
        let parse_failure = serde_json::from_str::<serde_json::Value>("{broken").unwrap_err();
        let err: ConnectorError = parse_failure.into();
        assert!(matches!(err, ConnectorError::JsonError(_)));
    }
}
