//! Test doubles shared across module tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::llm_client::{CompletionProvider, CompletionRequest, LlmError};

pub use crate::store::memory::MemoryEntryStore;

/// A `CompletionProvider` that answers every call with the same canned outcome.
pub struct ScriptedProvider {
    reply: Option<String>,
    calls: AtomicUsize,
}

impl ScriptedProvider {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Fails every call with a 500 from the provider.
    pub fn failing() -> Self {
        Self {
            reply: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompletionProvider for ScriptedProvider {
    async fn complete(&self, _request: &CompletionRequest) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply.clone().ok_or_else(|| LlmError::Api {
            status: 500,
            message: "The server had an error while processing your request".to_string(),
        })
    }
}
