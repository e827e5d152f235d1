use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{Generation, LanguageModel, TokenUsage};
use crate::consts::{DEFAULT_MODEL, LOG_BODY_LIMIT, TEMPERATURE};
use crate::error::{PipelineError, Provider, truncate_body};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const API_VERSION: &str = "v1beta";

/// A language model that calls the Gemini `generateContent` API.
pub struct GeminiModel {
    model: String,
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl GeminiModel {
    pub fn new(
        model: Option<String>,
        api_key: String,
        base_url: Option<String>,
        client: reqwest::Client,
    ) -> Self {
        Self {
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_key,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            client,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            API_VERSION,
            self.model
        )
    }

    fn build_request(prompt: &str) -> ApiRequest<'_> {
        ApiRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
            },
        }
    }

    /// Join the text parts of the first candidate.
    fn extract_text(resp: ApiResponse) -> Result<Generation, PipelineError> {
        let usage = resp.usage_metadata.map(|u| TokenUsage {
            input_tokens: u.prompt_token_count,
            output_tokens: u.candidates_token_count,
        });

        let candidate = resp.candidates.into_iter().next().ok_or_else(|| {
            PipelineError::UpstreamError {
                provider: Provider::Model,
                status: None,
                summary: "no candidates returned".to_string(),
            }
        })?;

        let text: String = candidate
            .content
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        if text.is_empty() {
            let reason = candidate.finish_reason.unwrap_or_else(|| "unknown".to_string());
            return Err(PipelineError::UpstreamError {
                provider: Provider::Model,
                status: None,
                summary: format!("empty response (finish reason: {reason})"),
            });
        }

        Ok(Generation { text, usage })
    }
}

#[async_trait]
impl LanguageModel for GeminiModel {
    async fn generate(&self, prompt: &str) -> Result<Generation, PipelineError> {
        let body = Self::build_request(prompt);

        let resp = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "gemini request failed");
                PipelineError::from_transport(Provider::Model, &e)
            })?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            warn!(
                status = status.as_u16(),
                body = %truncate_body(&text, LOG_BODY_LIMIT),
                "gemini returned an error"
            );
            return Err(PipelineError::UpstreamError {
                provider: Provider::Model,
                status: Some(status.as_u16()),
                summary: status.canonical_reason().unwrap_or("request rejected").to_string(),
            });
        }

        let api_resp: ApiResponse = resp
            .json()
            .await
            .map_err(|e| PipelineError::from_transport(Provider::Model, &e))?;

        let generation = Self::extract_text(api_resp)?;

        if let Some(usage) = generation.usage {
            debug!(
                input = usage.input_tokens,
                output = usage.output_tokens,
                "gemini token usage"
            );
        }

        Ok(generation)
    }

    fn model(&self) -> &str {
        &self.model
    }
}

// --- API types ---

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    usage_metadata: Option<UsageMetadata>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    #[serde(default)]
    prompt_token_count: u64,
    #[serde(default)]
    candidates_token_count: u64,
}
