use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{SearchClient, SearchResult};
use crate::error::PipelineError;

/// A canned search client for tests. Records every query it receives.
/// Only compiled for tests and the `test-support` feature.
pub struct MockSearch {
    response: Result<Vec<SearchResult>, PipelineError>,
    calls: AtomicUsize,
    queries: Mutex<Vec<String>>,
}

impl MockSearch {
    pub fn new(results: Vec<SearchResult>) -> Self {
        Self::with_response(Ok(results))
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn failing(err: PipelineError) -> Self {
        Self::with_response(Err(err))
    }

    fn with_response(response: Result<Vec<SearchResult>, PipelineError>) -> Self {
        Self {
            response,
            calls: AtomicUsize::new(0),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl SearchClient for MockSearch {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, PipelineError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.queries.lock().unwrap().push(query.to_string());
        self.response.clone()
    }

    fn name(&self) -> &str {
        "mock"
    }
}
