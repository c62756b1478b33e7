//! Web search parameter types.
//!
//! [`WebSearchOptions`] holds the instruction parameters that are rendered
//! into natural-language guidance appended to the user prompt;
//! [`WebSearchLocation`] holds the approximate-location hints carried on the
//! hosted web-search tool entry itself.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Context window budget for hosted web search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchContextSize {
    Low,
    #[default]
    Medium,
    High,
}

impl SearchContextSize {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Instruction parameters for web search.
///
/// Each populated parameter contributes one instruction line, in the field
/// order below. Numeric parameters set to zero are treated as unset.
/// `region` and `language` are carried in the configuration document but do
/// not generate instruction lines.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WebSearchOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_engine: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_restriction: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_results: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet_length: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude_keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub query_boost: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub follow_links_depth: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_ttl: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safe_search: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rerank_results: Option<bool>,
}

impl WebSearchOptions {
    /// Render one instruction line per populated parameter, in fixed order.
    pub fn instruction_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();

        if let Some(engine) = non_blank(&self.search_engine) {
            lines.push(format!("Use \"{engine}\" as the search engine."));
        }
        if let Some(site) = non_blank(&self.site_restriction) {
            lines.push(format!("Limit search to \"{site}\"."));
        }
        if let Some(n) = self.num_results.filter(|n| *n > 0) {
            lines.push(format!("Return up to {n} results."));
        }
        if let Some(range) = non_blank(&self.date_range) {
            lines.push(format!("Restrict results to \"{range}\"."));
        }
        if let Some(format) = non_blank(&self.result_format) {
            lines.push(format!("Format results as \"{format}\"."));
        }
        if let Some(n) = self.snippet_length.filter(|n| *n > 0) {
            lines.push(format!("Each snippet should be about {n} characters."));
        }
        if !self.exclude_keywords.is_empty() {
            lines.push(format!(
                "Exclude results containing: {}.",
                self.exclude_keywords.join(", ")
            ));
        }
        if !self.query_boost.is_empty() {
            lines.push(format!(
                "Prioritize results including: {}.",
                self.query_boost.join(", ")
            ));
        }
        if let Some(depth) = self.follow_links_depth.filter(|n| *n > 0) {
            lines.push(format!("Follow links up to {depth} levels deep."));
        }
        if let Some(ttl) = self.cache_ttl.filter(|n| *n > 0) {
            lines.push(format!("Cache results for {ttl} seconds."));
        }
        if let Some(safe) = self.safe_search {
            lines.push(format!(
                "Safe Search is {}.",
                if safe { "enabled" } else { "disabled" }
            ));
        }
        if let Some(rerank) = self.rerank_results {
            lines.push(format!(
                "Re-rank results using AI: {}.",
                if rerank { "yes" } else { "no" }
            ));
        }

        lines
    }
}

fn non_blank(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.trim().is_empty())
}

/// Approximate user location for the hosted web-search tool.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WebSearchLocation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Region, serialized as `state` in the configuration document.
    #[serde(default, rename = "state", skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_context_size: Option<SearchContextSize>,
}

impl WebSearchLocation {
    /// Render as the `user_location` object of a web-search tool entry.
    ///
    /// Blank components become JSON null, never empty strings.
    pub fn to_approximate_json(&self) -> Value {
        serde_json::json!({
            "type": "approximate",
            "country": null_when_blank(&self.country),
            "region": null_when_blank(&self.region),
            "city": null_when_blank(&self.city),
            "timezone": null_when_blank(&self.timezone),
        })
    }
}

fn null_when_blank(field: &Option<String>) -> Value {
    match field.as_deref().map(str::trim) {
        Some(s) if !s.is_empty() => Value::String(s.to_string()),
        _ => Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_blank_options_yield_no_lines() {
        assert!(WebSearchOptions::default().instruction_lines().is_empty());
    }

    #[test]
    fn lines_follow_fixed_parameter_order() {
        let options = WebSearchOptions {
            search_engine: Some("google".into()),
            num_results: Some(10),
            safe_search: Some(false),
            rerank_results: Some(true),
            ..Default::default()
        };
        assert_eq!(
            options.instruction_lines(),
            vec![
                "Use \"google\" as the search engine.".to_string(),
                "Return up to 10 results.".to_string(),
                "Safe Search is disabled.".to_string(),
                "Re-rank results using AI: yes.".to_string(),
            ]
        );
    }

    #[test]
    fn zero_numeric_parameters_are_unset() {
        let options = WebSearchOptions {
            num_results: Some(0),
            cache_ttl: Some(0),
            follow_links_depth: Some(0),
            snippet_length: Some(0),
            ..Default::default()
        };
        assert!(options.instruction_lines().is_empty());
    }

    #[test]
    fn region_and_language_do_not_generate_lines() {
        let options = WebSearchOptions {
            region: Some("EU".into()),
            language: Some("en".into()),
            ..Default::default()
        };
        assert!(options.instruction_lines().is_empty());
    }

    #[test]
    fn keyword_lists_join_with_commas() {
        let options = WebSearchOptions {
            exclude_keywords: vec!["spam".into(), "ads".into()],
            query_boost: vec!["rust".into()],
            ..Default::default()
        };
        assert_eq!(
            options.instruction_lines(),
            vec![
                "Exclude results containing: spam, ads.".to_string(),
                "Prioritize results including: rust.".to_string(),
            ]
        );
    }

    #[test]
    fn location_blanks_become_null() {
        let location = WebSearchLocation {
            country: Some("US".into()),
            region: Some("".into()),
            ..Default::default()
        };
        let v = location.to_approximate_json();
        assert_eq!(v["country"], serde_json::json!("US"));
        assert!(v["region"].is_null());
        assert!(v["city"].is_null());
        assert!(v["timezone"].is_null());
    }

    #[test]
    fn location_region_uses_state_wire_key() {
        let doc = serde_json::json!({"country": "US", "state": "CA"});
        let location: WebSearchLocation = serde_json::from_value(doc).expect("ok");
        assert_eq!(location.region.as_deref(), Some("CA"));
        let back = serde_json::to_value(&location).expect("ok");
        assert_eq!(back["state"], serde_json::json!("CA"));
    }
}
