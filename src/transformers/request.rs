//! Request transformer trait.

use crate::error::ConnectorError;
use crate::types::ConnectorConfig;

/// Maps connector configuration into a provider request body.
///
/// Implementations are pure: for fixed input the output is identical on
/// repeated calls, with no timestamps or randomness inserted.
pub trait RequestTransformer {
    /// Provider identifier (e.g. "openai_responses").
    fn provider_id(&self) -> &str;

    /// Build the full request body, validating cross-field requirements.
    ///
    /// Fails with [`ConnectorError::ValidationError`] when a required field
    /// is missing or a tool definition is malformed; no partial body is
    /// returned.
    fn transform_request(&self, config: &ConnectorConfig)
    -> Result<serde_json::Value, ConnectorError>;
}
