//! Action-Item Extraction Library
//!
//! Extracts actionable task items from free-form notes using two
//! complementary, independent strategies that share one contract
//! (`text -> ordered list of unique action-item strings`):
//!
//! - **Heuristic**: [`extract_action_items`] - deterministic, offline
//!   pattern matching over bullets, keyword prefixes, checkbox markers,
//!   with an imperative-sentence fallback. Total over all inputs.
//! - **Semantic**: [`SemanticExtractor`] - delegates tense/intent
//!   understanding to a language model behind the [`ChatModel`] trait and
//!   tolerantly parses its structured response. Fail-open: every failure
//!   degrades to an empty list.
//!
//! Composition is the caller's choice; the library does not rank, schedule,
//! or persist items. The host application (notes storage, accounts, HTTP)
//! calls in with raw text and stores the returned strings however it likes.
//! Both extractors are stateless and safe to call concurrently.
//!
//! # Usage
//!
//! ```rust,ignore
//! use note_extraction::{extract_action_items, OllamaChat, SemanticExtractor};
//!
//! // Offline path
//! let items = extract_action_items("- [ ] Set up database\nTODO: write tests");
//!
//! // Model-backed path (future-only action items)
//! let extractor = SemanticExtractor::new(OllamaChat::new());
//! let items = extractor.extract("I'm planning to repaint the fence.").await;
//! ```
//!
//! # Modules
//!
//! - [`heuristic`] - deterministic extractor
//! - [`semantic`] - model-backed extractor and response parsing
//! - [`prompts`] - prompt contract and response schema
//! - [`traits`] - the [`ChatModel`] seam
//! - [`ai`] - provider implementations ([`OllamaChat`])
//! - [`testing`] - scripted [`testing::MockChat`] for tests

pub mod ai;
mod dedupe;
pub mod error;
pub mod heuristic;
pub mod prompts;
pub mod semantic;
pub mod testing;
pub mod traits;

// Re-export core surface at crate root
pub use ai::OllamaChat;
pub use error::{ExtractionError, Result};
pub use heuristic::extract_action_items;
pub use prompts::{action_items_schema, format_extract_prompt, EXTRACT_SYSTEM_PROMPT};
pub use semantic::{parse_action_items, SemanticExtractor};
pub use testing::MockChat;
pub use traits::chat::ChatModel;
