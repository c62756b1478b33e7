//! `OpenAI` provider: Responses API request transformer and proxy client.

pub mod client;
pub mod config;
pub mod transformers;
pub mod types;

pub use client::OpenAiClient;
pub use config::OpenAiConfig;
pub use transformers::OpenAiResponsesRequestTransformer;
