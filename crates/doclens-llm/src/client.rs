//! Completion client trait and scripted test double.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use doclens_core::{DoclensError, DoclensResult};

/// A single-shot text completion provider: system + user prompt in, full
/// response text out. Implementors perform no retries and no output
/// validation; both belong to the caller.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, system: &str, user: &str) -> DoclensResult<String>;
}

/// Scripted outcome for one [`MockCompletionClient`] call.
pub enum MockCompletion {
    Reply(String),
    Fail(String),
}

/// A scripted completion client for tests. Returns pre-defined completions
/// in order and counts calls.
#[derive(Default)]
pub struct MockCompletionClient {
    script: Mutex<Vec<MockCompletion>>,
    calls: AtomicUsize,
}

impl MockCompletionClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful completion.
    pub fn push_reply(&self, text: impl Into<String>) {
        self.script
            .lock()
            .unwrap()
            .push(MockCompletion::Reply(text.into()));
    }

    /// Queue a failed invocation.
    pub fn push_failure(&self, message: impl Into<String>) {
        self.script
            .lock()
            .unwrap()
            .push(MockCompletion::Fail(message.into()));
    }

    /// Number of `complete` calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompletionClient for MockCompletionClient {
    async fn complete(&self, _system: &str, _user: &str) -> DoclensResult<String> {
        let i = self.calls.fetch_add(1, Ordering::SeqCst);
        let script = self.script.lock().unwrap();
        match script.get(i) {
            Some(MockCompletion::Reply(text)) => Ok(text.clone()),
            Some(MockCompletion::Fail(message)) => {
                Err(DoclensError::model_invocation(message.clone()))
            }
            None => Err(DoclensError::model_invocation(format!(
                "no scripted completion left (call {})",
                i + 1
            ))),
        }
    }
}
