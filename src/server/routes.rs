use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use super::{ApiError, AppState};
use crate::consts::WELCOME_MESSAGE;
use crate::post::PostResult;

#[derive(Debug, Deserialize)]
pub struct GeneratePostRequest {
    #[serde(default)]
    pub topic: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    pub message: String,
}

pub async fn root() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: WELCOME_MESSAGE.to_string(),
    })
}

pub async fn generate_post(
    State(state): State<AppState>,
    payload: Result<Json<GeneratePostRequest>, JsonRejection>,
) -> Result<Json<PostResult>, ApiError> {
    let Json(request) = payload?;

    let topic = match request.topic {
        Some(topic) if !topic.trim().is_empty() => topic,
        _ => return Err(ApiError::validation("topic must be a non-empty string")),
    };

    info!(topic = %topic, "generating post");

    let post = state
        .engine
        .run(&topic)
        .await
        .map(|output| PostResult::from_output(&topic, output))
        .map_err(|e| {
            error!(topic = %topic, error = %e, "post generation failed");
            ApiError::from(e)
        })?;

    info!(topic = %topic, sources = post.news_sources.len(), "post generated");
    Ok(Json(post))
}
