#[cfg(any(test, feature = "test-support"))]
pub mod mock;
pub mod tavily;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::PipelineError;

/// One hit from the search provider, in provider order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub url: String,
    pub content: String,
}

impl SearchResult {
    pub fn new(url: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            content: content.into(),
        }
    }
}

/// Where the news comes from. Implementations return at most a handful of
/// recent results and never reorder them.
#[async_trait]
pub trait SearchClient: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, PipelineError>;

    /// Short name for logs and the banner.
    fn name(&self) -> &str;
}
