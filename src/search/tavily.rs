use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{SearchClient, SearchResult};
use crate::consts::{LOG_BODY_LIMIT, SEARCH_MAX_RESULTS, SEARCH_TIME_RANGE};
use crate::error::{PipelineError, Provider, truncate_body};

pub const DEFAULT_BASE_URL: &str = "https://api.tavily.com";

/// Web search backed by the Tavily search API.
pub struct TavilySearch {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl TavilySearch {
    pub fn new(api_key: String, base_url: Option<String>, client: reqwest::Client) -> Self {
        Self {
            api_key,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            client,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/search", self.base_url.trim_end_matches('/'))
    }

    fn build_request<'a>(&'a self, query: &'a str) -> ApiRequest<'a> {
        ApiRequest {
            api_key: &self.api_key,
            query,
            max_results: SEARCH_MAX_RESULTS,
            time_range: SEARCH_TIME_RANGE,
        }
    }
}

#[async_trait]
impl SearchClient for TavilySearch {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, PipelineError> {
        let body = self.build_request(query);

        let resp = self
            .client
            .post(self.endpoint())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "tavily request failed");
                PipelineError::from_transport(Provider::Search, &e)
            })?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            warn!(
                status = status.as_u16(),
                body = %truncate_body(&text, LOG_BODY_LIMIT),
                "tavily returned an error"
            );
            return Err(PipelineError::UpstreamError {
                provider: Provider::Search,
                status: Some(status.as_u16()),
                summary: status.canonical_reason().unwrap_or("request rejected").to_string(),
            });
        }

        let api_resp: ApiResponse = resp
            .json()
            .await
            .map_err(|e| PipelineError::from_transport(Provider::Search, &e))?;

        let mut results: Vec<SearchResult> = api_resp
            .results
            .into_iter()
            .map(|r| SearchResult {
                url: r.url,
                content: r.content,
            })
            .collect();
        results.truncate(SEARCH_MAX_RESULTS);

        debug!(count = results.len(), "tavily search complete");
        Ok(results)
    }

    fn name(&self) -> &str {
        "tavily"
    }
}

// --- API types ---

#[derive(Serialize)]
struct ApiRequest<'a> {
    api_key: &'a str,
    query: &'a str,
    max_results: usize,
    time_range: &'a str,
}

#[derive(Deserialize)]
struct ApiResponse {
    #[serde(default)]
    results: Vec<ApiResult>,
}

#[derive(Deserialize)]
struct ApiResult {
    url: String,
    #[serde(default)]
    content: String,
}
