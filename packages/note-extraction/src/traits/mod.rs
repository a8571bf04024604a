//! Core trait abstractions for the extraction library.
//!
//! Applications implement (or reuse) these to provide the language-model
//! capability behind the semantic extractor.

pub mod chat;
