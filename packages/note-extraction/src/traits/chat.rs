//! ChatModel trait for schema-constrained completions.

use async_trait::async_trait;

use crate::error::Result;

/// A chat-style completion service that can produce structured output.
///
/// Implementations wrap a specific provider (Ollama, OpenAI, etc.) and own
/// the transport details. The extractor only needs one operation: send a
/// system + user message pair, ask for output constrained by a JSON schema,
/// and get the raw message content back.
///
/// Implementations make exactly one attempt per call; retry and caching
/// policy belong to the caller.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Request a completion whose content conforms to `schema`.
    ///
    /// Returns the raw content string of the model's message. The content is
    /// *asserted* to match the schema, not guaranteed: callers must treat
    /// parsing it as fallible.
    async fn chat_structured(
        &self,
        system: &str,
        user: &str,
        schema: serde_json::Value,
    ) -> Result<String>;
}
