pub mod gemini;
#[cfg(any(test, feature = "test-support"))]
pub mod mock;

use async_trait::async_trait;

use crate::error::PipelineError;

/// Token usage from a single model call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    /// Total tokens (input + output).
    pub fn total(&self) -> u64 {
        self.input_tokens + self.output_tokens
    }
}

/// Raw text produced by the model, plus usage when the provider reports it.
#[derive(Debug, Clone, PartialEq)]
pub struct Generation {
    pub text: String,
    pub usage: Option<TokenUsage>,
}

impl Generation {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            usage: None,
        }
    }
}

/// Text generation backend. Takes a fully rendered prompt and returns the
/// raw reply in a single non-streaming call.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<Generation, PipelineError>;

    /// Model identifier, for logs and the banner.
    fn model(&self) -> &str;
}
