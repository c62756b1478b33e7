//! OpenAI client configuration.

use secrecy::SecretString;

/// Default OpenAI API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Configuration for [`OpenAiClient`](super::OpenAiClient).
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// API key, kept secret until header construction.
    pub api_key: SecretString,
    /// Base URL without a trailing slash.
    pub base_url: String,
    /// Optional organization header value.
    pub organization: Option<String>,
    /// Optional project header value.
    pub project: Option<String>,
}

impl OpenAiConfig {
    /// Create a configuration with the default endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::from(api_key.into()),
            base_url: DEFAULT_BASE_URL.to_string(),
            organization: None,
            project: None,
        }
    }

    /// Override the base URL (e.g. for a mock server or gateway).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_organization(mut self, organization: impl Into<String>) -> Self {
        self.organization = Some(organization.into());
        self
    }

    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let config = OpenAiConfig::new("k").with_base_url("http://localhost:8080/");
        assert_eq!(config.base_url, "http://localhost:8080");
    }

    #[test]
    fn defaults_to_public_endpoint() {
        let config = OpenAiConfig::new("k");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.organization.is_none());
    }
}
