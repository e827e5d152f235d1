use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{Generation, LanguageModel};
use crate::error::PipelineError;

/// A scripted model for tests. Returns the same reply every call and keeps
/// every prompt it was given. Only compiled for tests and the `test-support`
/// feature.
pub struct MockModel {
    reply: Result<Generation, PipelineError>,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl MockModel {
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_reply(Ok(Generation::text(text)))
    }

    pub fn failing(err: PipelineError) -> Self {
        Self::with_reply(Err(err))
    }

    fn with_reply(reply: Result<Generation, PipelineError>) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl LanguageModel for MockModel {
    async fn generate(&self, prompt: &str) -> Result<Generation, PipelineError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.reply.clone()
    }

    fn model(&self) -> &str {
        "mock"
    }
}
