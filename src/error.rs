//! Failure kinds a pipeline run can end in.

use std::fmt;

/// Which upstream a failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Search,
    Model,
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provider::Search => write!(f, "search provider"),
            Provider::Model => write!(f, "language model"),
        }
    }
}

/// Every variant carries one-line text only. Raw upstream bodies are logged
/// where they are received and never stored here.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PipelineError {
    #[error("{provider} unavailable: {reason}")]
    UpstreamUnavailable { provider: Provider, reason: String },

    #[error("{provider} error{}: {summary}", .status.map(|s| format!(" ({s})")).unwrap_or_default())]
    UpstreamError {
        provider: Provider,
        status: Option<u16>,
        summary: String,
    },

    #[error("malformed model output: {0}")]
    MalformedModelOutput(String),
}

impl PipelineError {
    /// Classify a transport-level reqwest failure.
    pub fn from_transport(provider: Provider, err: &reqwest::Error) -> Self {
        if err.is_decode() {
            return PipelineError::UpstreamError {
                provider,
                status: err.status().map(|s| s.as_u16()),
                summary: "response body could not be decoded".to_string(),
            };
        }
        let reason = if err.is_timeout() {
            "request timed out".to_string()
        } else if err.is_connect() {
            "connection failed".to_string()
        } else {
            "request failed".to_string()
        };
        PipelineError::UpstreamUnavailable { provider, reason }
    }
}

/// Cut an upstream body down to something safe to put in a log line.
pub fn truncate_body(body: &str, max: usize) -> String {
    let single_line: String = body.split_whitespace().collect::<Vec<_>>().join(" ");
    if single_line.chars().count() <= max {
        return single_line;
    }
    let cut: String = single_line.chars().take(max).collect();
    format!("{cut}…")
}
