//! Process configuration, read once at startup from the environment.
//!
//! `main.rs` loads a `.env` file first (if any) so everything below can be
//! set either way.

use anyhow::{Context, Result, bail};
use std::time::Duration;

use crate::consts::DEFAULT_HTTP_TIMEOUT_SECS;

/// Provider credentials and endpoints.
#[derive(Debug, Clone)]
pub struct Config {
    pub tavily_api_key: String,
    pub tavily_base_url: Option<String>,
    pub google_api_key: String,
    pub gemini_base_url: Option<String>,
    pub model: Option<String>,
    pub http_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let Some(tavily_api_key) = get("TAVILY_API_KEY") else {
            bail!("TAVILY_API_KEY is not set");
        };
        let Some(google_api_key) = get("GOOGLE_API_KEY").or_else(|| get("GEMINI_API_KEY")) else {
            bail!("GOOGLE_API_KEY (or GEMINI_API_KEY) is not set");
        };

        let http_timeout = match get("HTTP_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("HTTP_TIMEOUT_SECS must be a number, got {raw:?}"))?,
            None => DEFAULT_HTTP_TIMEOUT_SECS,
        };

        Ok(Self {
            tavily_api_key,
            tavily_base_url: get("TAVILY_BASE_URL"),
            google_api_key,
            gemini_base_url: get("GEMINI_BASE_URL"),
            model: get("GEMINI_MODEL"),
            http_timeout: Duration::from_secs(http_timeout),
        })
    }

    /// Shared HTTP client for both upstreams.
    pub fn http_client(&self) -> Result<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(self.http_timeout)
            .build()
            .context("failed to create HTTP client")
    }
}
