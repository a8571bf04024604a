//! Ollama implementation of the ChatModel trait.
//!
//! Talks to a local (or remote) Ollama server's `/api/chat` endpoint and
//! uses its `format` field to request schema-constrained JSON output.
//!
//! # Example
//!
//! ```rust,ignore
//! use note_extraction::ai::OllamaChat;
//!
//! let chat = OllamaChat::new().with_model("qwen2.5:7b");
//! let extractor = SemanticExtractor::new(chat);
//! ```

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{ExtractionError, Result};
use crate::traits::chat::ChatModel;

/// Environment variable that overrides the default model.
pub const MODEL_ENV_VAR: &str = "OLLAMA_MODEL";

/// Model used when no override is configured. A small model is enough for
/// extraction; pull it first with `ollama pull llama3.1:8b`.
pub const DEFAULT_MODEL: &str = "llama3.1:8b";

const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Ollama-backed chat client.
///
/// Low-temperature by default for near-deterministic extraction. Makes a
/// single request per call: no retries, no caching, transport-default
/// timeout.
#[derive(Clone)]
pub struct OllamaChat {
    client: Client,
    base_url: String,
    model: Option<String>,
    temperature: f32,
}

impl OllamaChat {
    /// Create a client against the default local Ollama server.
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: None,
            temperature: 0.3,
        }
    }

    /// Pin a model, bypassing the `OLLAMA_MODEL` environment lookup.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set a custom base URL (remote Ollama, proxies, etc.).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the sampling temperature (default: 0.3).
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Resolve the model for this call: explicit override, then the
    /// `OLLAMA_MODEL` environment variable, then the default. Read per call
    /// so the process needs no init/teardown to change models.
    fn resolve_model(&self) -> String {
        match &self.model {
            Some(model) => model.clone(),
            None => std::env::var(MODEL_ENV_VAR).unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
        }
    }
}

impl Default for OllamaChat {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatModel for OllamaChat {
    async fn chat_structured(
        &self,
        system: &str,
        user: &str,
        schema: serde_json::Value,
    ) -> Result<String> {
        let request = ChatRequest {
            model: self.resolve_model(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user.to_string(),
                },
            ],
            format: schema,
            stream: false,
            options: ChatOptions {
                temperature: self.temperature,
            },
        };

        let response = self
            .client
            .post(format!("{}/api/chat", self.base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| ExtractionError::Chat(e.to_string().into()))?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(ExtractionError::Chat(
                format!("Ollama API error: {}", error_text).into(),
            ));
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| ExtractionError::Chat(e.to_string().into()))?;

        let content = chat_response
            .message
            .map(|m| m.content)
            .unwrap_or_default();
        if content.trim().is_empty() {
            return Err(ExtractionError::EmptyResponse);
        }
        Ok(content)
    }
}

// Request/Response types

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    format: serde_json::Value,
    stream: bool,
    options: ChatOptions,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Serialize)]
struct ChatOptions {
    temperature: f32,
}

#[derive(Deserialize)]
struct ChatResponse {
    message: Option<ChatResponseMessage>,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: String,
}
