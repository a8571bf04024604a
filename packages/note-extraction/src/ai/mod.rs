//! Language-model client implementations.

pub mod ollama;

pub use ollama::OllamaChat;
