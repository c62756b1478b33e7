//! Content moderation types.

/// Moderation request.
///
/// The response is passed through as provider JSON (with category scores
/// rounded); only the request side is modeled.
#[derive(Debug, Clone)]
pub struct ModerationRequest {
    /// Input text to moderate.
    pub input: String,
}

impl ModerationRequest {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}
