//! Testing utilities including a mock chat model.
//!
//! Useful for testing extraction logic without a running model server.

use std::collections::VecDeque;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::error::{ExtractionError, Result};
use crate::traits::chat::ChatModel;

/// A scripted mock implementation of [`ChatModel`].
///
/// Returns queued responses in order and records every call for assertions
/// (e.g. that blank input never reaches the model). Can be switched into a
/// failing mode to exercise fail-open paths.
#[derive(Default, Clone)]
pub struct MockChat {
    responses: Arc<RwLock<VecDeque<String>>>,
    failure: Arc<RwLock<Option<String>>>,
    calls: Arc<RwLock<Vec<MockChatCall>>>,
}

/// Record of a call made to the mock.
#[derive(Debug, Clone)]
pub struct MockChatCall {
    pub system: String,
    pub user: String,
    pub schema: serde_json::Value,
}

impl MockChat {
    /// Create a mock with no scripted responses. A call with an empty queue
    /// errors with [`ExtractionError::EmptyResponse`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response content string.
    pub fn with_response(self, content: impl Into<String>) -> Self {
        self.responses.write().unwrap().push_back(content.into());
        self
    }

    /// Make every call fail with the given message.
    pub fn with_failure(self, message: impl Into<String>) -> Self {
        *self.failure.write().unwrap() = Some(message.into());
        self
    }

    /// Number of calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }

    /// Snapshot of recorded calls.
    pub fn calls(&self) -> Vec<MockChatCall> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl ChatModel for MockChat {
    async fn chat_structured(
        &self,
        system: &str,
        user: &str,
        schema: serde_json::Value,
    ) -> Result<String> {
        self.calls.write().unwrap().push(MockChatCall {
            system: system.to_string(),
            user: user.to_string(),
            schema,
        });

        if let Some(message) = self.failure.read().unwrap().clone() {
            return Err(ExtractionError::Chat(message.into()));
        }

        self.responses
            .write()
            .unwrap()
            .pop_front()
            .ok_or(ExtractionError::EmptyResponse)
    }
}
