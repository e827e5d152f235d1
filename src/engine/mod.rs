pub mod parse;
pub mod pipeline;

use async_trait::async_trait;

use crate::error::PipelineError;
use parse::ModelOutput;

/// The outermost boundary. The HTTP layer and `main.rs` only know this trait.
#[async_trait]
pub trait Engine: Send + Sync {
    async fn run(&self, topic: &str) -> Result<ModelOutput, PipelineError>;
}
