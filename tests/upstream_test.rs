use axum::Router;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use newspost::error::{PipelineError, Provider};
use newspost::model::LanguageModel;
use newspost::model::gemini::GeminiModel;
use newspost::search::SearchClient;
use newspost::search::tavily::TavilySearch;

/// Serve every path with the same canned response; returns the base URL.
async fn serve_fixed(status: StatusCode, body: &'static str) -> String {
    let app = Router::new().fallback(move || async move { (status, body).into_response() });
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// A localhost URL nothing is listening on.
async fn closed_port() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

fn tavily(base_url: String) -> TavilySearch {
    TavilySearch::new("tvly-test".to_string(), Some(base_url), reqwest::Client::new())
}

fn gemini(base_url: String) -> GeminiModel {
    GeminiModel::new(None, "goog-test".to_string(), Some(base_url), reqwest::Client::new())
}

#[tokio::test]
async fn tavily_unreachable_is_unavailable() {
    let err = tavily(closed_port().await).search("solar").await.unwrap_err();
    assert!(matches!(
        err,
        PipelineError::UpstreamUnavailable { provider: Provider::Search, .. }
    ));
}

#[tokio::test]
async fn tavily_rejection_keeps_status_and_hides_body() {
    let base = serve_fixed(StatusCode::UNAUTHORIZED, "invalid key sk-secret-123").await;

    let err = tavily(base).search("solar").await.unwrap_err();

    assert!(matches!(
        err,
        PipelineError::UpstreamError { provider: Provider::Search, status: Some(401), .. }
    ));
    assert!(!err.to_string().contains("sk-secret-123"));
}

#[tokio::test]
async fn tavily_undecodable_body_is_upstream_error() {
    let base = serve_fixed(StatusCode::OK, "<html>not json</html>").await;

    let err = tavily(base).search("solar").await.unwrap_err();

    assert!(matches!(
        err,
        PipelineError::UpstreamError { provider: Provider::Search, .. }
    ));
}

#[tokio::test]
async fn tavily_success_is_capped_in_order() {
    let base = serve_fixed(
        StatusCode::OK,
        r#"{"results": [
            {"url": "http://1", "content": "a"},
            {"url": "http://2", "content": "b"},
            {"url": "http://3", "content": "c"},
            {"url": "http://4", "content": "d"}
        ]}"#,
    )
    .await;

    let results = tavily(base).search("solar").await.unwrap();

    let urls: Vec<_> = results.iter().map(|r| r.url.as_str()).collect();
    assert_eq!(urls, vec!["http://1", "http://2", "http://3"]);
}

#[tokio::test]
async fn gemini_unreachable_is_unavailable() {
    let err = gemini(closed_port().await).generate("prompt").await.unwrap_err();
    assert!(matches!(
        err,
        PipelineError::UpstreamUnavailable { provider: Provider::Model, .. }
    ));
}

#[tokio::test]
async fn gemini_rejection_keeps_status_and_hides_body() {
    let base = serve_fixed(StatusCode::UNAUTHORIZED, "API key not valid: goog-secret-456").await;

    let err = gemini(base).generate("prompt").await.unwrap_err();

    assert!(matches!(
        err,
        PipelineError::UpstreamError { provider: Provider::Model, status: Some(401), .. }
    ));
    assert!(!err.to_string().contains("goog-secret-456"));
}

#[tokio::test]
async fn gemini_undecodable_body_is_upstream_error() {
    let base = serve_fixed(StatusCode::OK, "definitely not json").await;

    let err = gemini(base).generate("prompt").await.unwrap_err();

    assert!(matches!(
        err,
        PipelineError::UpstreamError { provider: Provider::Model, .. }
    ));
}

#[tokio::test]
async fn gemini_success_returns_text() {
    let base = serve_fixed(
        StatusCode::OK,
        r#"{"candidates": [{"content": {"parts": [{"text": "{}"}]}, "finishReason": "STOP"}]}"#,
    )
    .await;

    let generation = gemini(base).generate("prompt").await.unwrap();

    assert_eq!(generation.text, "{}");
    assert_eq!(generation.usage, None);
}
