//! Typed errors for the extraction library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to keep the failure
//! taxonomy visible to callers: transport failures, empty model responses,
//! and malformed structured output are distinct variants.

use thiserror::Error;

/// Errors that can occur during semantic extraction.
///
/// The heuristic path is total and never produces one of these; only the
/// model-backed path does, and its public entry point collapses them all
/// to an empty result.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// Chat service unavailable or failed
    #[error("chat service error: {0}")]
    Chat(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Model returned a response with no usable content
    #[error("model returned no content")]
    EmptyResponse,

    /// Structured output failed to decode (wrong shape counts too)
    #[error("response parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;
