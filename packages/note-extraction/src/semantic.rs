//! Semantic extraction - delegate action-item identification to a language
//! model and robustly parse its structured response.
//!
//! The public surface is fail-open: blank input short-circuits without a
//! model call, and every failure (transport, empty response, malformed
//! output) collapses to an empty list. Callers that need to tell "nothing
//! found" from "extraction failed" should watch the `tracing` output, not
//! the return value.

use serde::Deserialize;

use crate::dedupe::dedupe_case_insensitive;
use crate::error::Result;
use crate::prompts::{action_items_schema, format_extract_prompt, EXTRACT_SYSTEM_PROMPT};
use crate::traits::chat::ChatModel;

/// The response shape the model is asked to produce.
///
/// Anything that does not decode into this exact shape (non-object, missing
/// field, non-array, non-string element) is a parse failure, never a
/// partial result.
#[derive(Debug, Deserialize)]
struct ActionItemsResponse {
    action_items: Vec<String>,
}

/// Model-backed action-item extractor.
///
/// Stateless apart from the wrapped model handle: safe to share across
/// tasks, one model call per invocation, no retry and no caching.
pub struct SemanticExtractor<M> {
    model: M,
}

impl<M: ChatModel> SemanticExtractor<M> {
    /// Wrap a chat model.
    pub fn new(model: M) -> Self {
        Self { model }
    }

    /// Extract future action items from `text`.
    ///
    /// Returns trimmed, case-insensitively deduplicated items in the
    /// model's output order. Never fails: blank input and every failure
    /// class yield an empty list.
    pub async fn extract(&self, text: &str) -> Vec<String> {
        if text.trim().is_empty() {
            return Vec::new();
        }
        match self.try_extract(text).await {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!(error = %e, "semantic extraction failed, returning no items");
                Vec::new()
            }
        }
    }

    /// Fallible inner path. Call failures (`Chat`, `EmptyResponse`) and
    /// parse failures (`JsonParse`) stay distinct until the public boundary
    /// collapses them.
    async fn try_extract(&self, text: &str) -> Result<Vec<String>> {
        let content = self
            .model
            .chat_structured(
                EXTRACT_SYSTEM_PROMPT,
                &format_extract_prompt(text),
                action_items_schema(),
            )
            .await?;
        tracing::debug!(raw = %content, "model response content");
        parse_action_items(&content)
    }
}

/// Parse raw model content into a clean item list.
///
/// Tolerates the content being wrapped in a markdown code fence. Items are
/// trimmed, empties dropped, duplicates removed case-insensitively with the
/// first occurrence kept.
pub fn parse_action_items(content: &str) -> Result<Vec<String>> {
    let json = strip_code_fence(content);
    let parsed: ActionItemsResponse = serde_json::from_str(json)?;

    let cleaned: Vec<String> = parsed
        .action_items
        .into_iter()
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect();

    Ok(dedupe_case_insensitive(cleaned))
}

/// Strip a surrounding triple-backtick fence (optionally annotated with an
/// info string like "json") from model output. Unfenced content passes
/// through trimmed.
fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the fence line itself (``` or ```json); without a newline there
    // is no body to recover.
    let body = match rest.find('\n') {
        Some(i) => &rest[i + 1..],
        None => return trimmed,
    };
    let body = match body.rfind("```") {
        Some(i) => &body[..i],
        None => body,
    };
    body.trim()
}
