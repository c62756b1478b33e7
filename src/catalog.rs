//! Static lookup tables for the connector surface.
//!
//! Provider/model lists and the evaluation tables are configuration data,
//! not runtime state: immutable, shared by reference, never mutated.

use std::collections::HashMap;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

/// Supported provider families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ProviderKind {
    #[default]
    #[serde(rename = "OpenAI")]
    OpenAi,
    Anthropic,
    Google,
    DeepSeek,
    Custom,
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OpenAi => write!(f, "OpenAI"),
            Self::Anthropic => write!(f, "Anthropic"),
            Self::Google => write!(f, "Google"),
            Self::DeepSeek => write!(f, "DeepSeek"),
            Self::Custom => write!(f, "Custom"),
        }
    }
}

impl ProviderKind {
    /// Construct from a provider name string; unknown names map to Custom.
    pub fn from_name(name: &str) -> Self {
        match name {
            "OpenAI" => Self::OpenAi,
            "Anthropic" => Self::Anthropic,
            "Google" => Self::Google,
            "DeepSeek" => Self::DeepSeek,
            _ => Self::Custom,
        }
    }

    /// Human-readable product label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::OpenAi => "OpenAI ChatGPT",
            Self::Anthropic => "Anthropic Claude",
            Self::Google => "Google Gemini",
            Self::DeepSeek => "DeepSeek",
            Self::Custom => "Custom",
        }
    }

    /// Models selectable for this provider. Custom providers have a single
    /// free-form entry.
    pub const fn models(self) -> &'static [&'static str] {
        match self {
            Self::OpenAi => &[
                "gpt-4.1",
                "gpt-4.1-mini",
                "gpt-4.1-nano",
                "o1-pro",
                "o1",
                "o3-mini",
                "gpt-4o",
                "gpt-4o-mini",
                "gpt-4.5-preview",
            ],
            Self::Anthropic => &["claude-3-opus", "claude-3-sonnet", "claude-3-haiku"],
            Self::Google => &[
                "gemini-1.5-pro-latest",
                "gemini-1.5-flash-latest",
                "gemini-pro",
                "gemini-pro-vision",
            ],
            Self::DeepSeek => &["deepseek-coder", "deepseek-coder-instruct", "deepseek-chat"],
            Self::Custom => &[""],
        }
    }

    /// API surfaces selectable for this provider.
    pub const fn apis(self) -> &'static [&'static str] {
        match self {
            Self::OpenAi => &["Responses API"],
            _ => &[""],
        }
    }

    /// Whether the provider's models accept a max-token budget.
    pub const fn supports_max_tokens(self) -> bool {
        true
    }
}

/// Evaluation categories and their type keys, in display order.
pub const EVALUATION_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Structural/Format",
        &["format_check", "regex", "keyword_presence", "response_lenght"],
    ),
    (
        "Content Safety",
        &["toxicity_check", "bias_detection", "hate_speech"],
    ),
    (
        "Factual Integrity",
        &["hallucination_check", "factual_consistency", "faithfulness"],
    ),
    (
        "Semantic Quality",
        &[
            "answer_relevance",
            "instruction_following",
            "completenes",
            "coherence",
            "conciseness_verbosity",
            "reasoning_quality",
        ],
    ),
    ("Custom", &["custom"]),
];

/// Offline evaluation types that carry no score threshold or retry loop.
pub const TYPES_WITHOUT_SCORE_AND_RETRY: &[&str] =
    &["format_check", "regex", "keyword_presence", "response_lenght"];

/// Template for custom evaluator prompts.
pub const EVALUATOR_PROMPT_TEMPLATE: &str = r#"You are an evaluator specialized in ......

Check if my output response contains any ......

-----DO NOT CHANGE BEYOND THIS LINE------
Respond ONLY in this JSON format:

{
  "[score_field]": float (0.0 to 1.0),
  "explanation": "A short explanation of the score."
}"#;

/// Built-in saved prompt presets, label → prompt text.
pub const SAVED_PROMPTS: &[(&str, &str)] = &[
    (
        "Bullet Summary",
        "Summarize the key points about AI in education in 3 clear bullet points.",
    ),
    (
        "Executive Summary",
        "Write an executive summary highlighting the main impacts of AI in education in a short paragraph.",
    ),
    (
        "One-Sentence Summary",
        "Summarize the role of AI in education in a single, concise sentence.",
    ),
];

lazy_static! {
    static ref EVALUATION_TYPE_LABELS: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("format_check", "Format Check (Offline)");
        m.insert("regex", "Regex Pattern Validation (Offline)");
        m.insert("keyword_presence", "Keyword Presence (Offline)");
        m.insert("response_lenght", "Response Length Check (Offline)");
        m.insert("toxicity_check", "Toxicity Check (Online)");
        m.insert("bias_detection", "Bias Detection (Online)");
        m.insert("hate_speech", "Hate Speech / Threats (Online)");
        m.insert("hallucination_check", "Hallucination Check (Online)");
        m.insert("factual_consistency", "Factual Consistency (Online)");
        m.insert("faithfulness", "Faithfulness (Online)");
        m.insert("answer_relevance", "Answer Relevance (Online)");
        m.insert("instruction_following", "Instruction Following (Online)");
        m.insert("completenes", "Completeness (Online)");
        m.insert("coherence", "Coherence (Online)");
        m.insert("conciseness_verbosity", "Conciseness / Verbosity (Online)");
        m.insert("reasoning_quality", "Reasoning Quality (Online)");
        m.insert("custom", "Custom Prompt (Online)");
        m
    };
    static ref EVALUATION_TYPE_DESCRIPTIONS: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert(
            "format_check",
            "Verifies if the output matches the expected structural format.",
        );
        m.insert("regex", "Checks if the output matches a defined regex pattern.");
        m.insert(
            "keyword_presence",
            "Checks whether specific keywords are present in the response.",
        );
        m.insert(
            "response_lenght",
            "Ensures the response length meets expected constraints.",
        );
        m.insert(
            "toxicity_check",
            "Detects toxic, offensive, or harmful language in the output.",
        );
        m.insert("bias_detection", "Detects biased or unfair statements.");
        m.insert(
            "hate_speech",
            "Identifies hate speech, threats, or abusive content.",
        );
        m.insert(
            "hallucination_check",
            "Checks whether the output contains made-up or hallucinated facts.",
        );
        m.insert(
            "factual_consistency",
            "Ensures the output is factually consistent with the input context.",
        );
        m.insert(
            "faithfulness",
            "Measures if the output faithfully represents the source or input.",
        );
        m.insert(
            "answer_relevance",
            "Checks whether the answer is relevant to the question.",
        );
        m.insert(
            "instruction_following",
            "Evaluates if the response correctly follows instructions.",
        );
        m.insert(
            "completenes",
            "Verifies whether the response fully answers the question.",
        );
        m.insert(
            "coherence",
            "Checks whether the output is logically organized and consistent.",
        );
        m.insert(
            "conciseness_verbosity",
            "Evaluates if the output is concise or overly verbose.",
        );
        m.insert(
            "reasoning_quality",
            "Measures logical reasoning quality in the response.",
        );
        m.insert(
            "custom",
            "Define your own evaluation logic with a custom prompt.",
        );
        m
    };
}

/// Evaluation categories in display order.
pub fn evaluation_categories() -> &'static [(&'static str, &'static [&'static str])] {
    EVALUATION_CATEGORIES
}

/// Types for one evaluation category; empty for unknown categories.
pub fn evaluation_types(category: &str) -> &'static [&'static str] {
    EVALUATION_CATEGORIES
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, types)| *types)
        .unwrap_or(&[])
}

/// Display label for an evaluation type key.
pub fn evaluation_type_label(eval_type: &str) -> Option<&'static str> {
    EVALUATION_TYPE_LABELS.get(eval_type).copied()
}

/// Description for an evaluation type key.
pub fn evaluation_type_description(eval_type: &str) -> Option<&'static str> {
    EVALUATION_TYPE_DESCRIPTIONS.get(eval_type).copied()
}
