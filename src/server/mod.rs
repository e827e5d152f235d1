//! HTTP surface: `POST /generate-post` and a `GET /` greeting.

pub mod routes;

use axum::{
    Json, Router,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::engine::Engine;
use crate::error::PipelineError;

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<dyn Engine>,
}

pub fn router(engine: Arc<dyn Engine>) -> Router {
    Router::new()
        .route("/", get(routes::root))
        .route("/generate-post", post(routes::generate_post))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { engine })
}

/// Failure body for every non-2xx response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Bad request input. Raised before the pipeline is touched.
    #[error("{detail}")]
    Validation { status: StatusCode, detail: String },

    #[error("Post generation failed: {0}")]
    Pipeline(#[from] PipelineError),
}

impl ApiError {
    pub fn validation(detail: impl Into<String>) -> Self {
        ApiError::Validation {
            status: StatusCode::BAD_REQUEST,
            detail: detail.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation { status, .. } => *status,
            ApiError::Pipeline(PipelineError::MalformedModelOutput(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::Pipeline(PipelineError::UpstreamError { .. }) => StatusCode::BAD_GATEWAY,
            ApiError::Pipeline(PipelineError::UpstreamUnavailable { .. }) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
