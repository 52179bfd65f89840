//! Integration tests for the relay REST API
//!
//! Drives the router in-process with a mock provider.

use axum::http::StatusCode;
use serde_json::json;
use serp_relay::core::types::NewsQuery;

use crate::common::{
    body_json, create_test_app, get, post_json, post_raw, sample_news_results, MockProvider,
};

#[tokio::test]
async fn test_liveness_endpoint() {
    let app = create_test_app(MockProvider::returning(json!([])));

    let response = get(app, "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"response": "agent running at port 3000"})
    );
}

#[tokio::test]
async fn test_liveness_ignores_provider_state() {
    let provider = MockProvider::failing("upstream down");
    let app = create_test_app(provider.clone());

    let response = get(app, "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await["response"],
        "agent running at port 3000"
    );
    assert!(provider.queries().is_empty());
}

#[tokio::test]
async fn test_tool_returns_news_results_unchanged() {
    let provider = MockProvider::returning(sample_news_results());
    let app = create_test_app(provider.clone());

    let response = post_json(app, "/tool", &json!({"query": "AI", "startIndex": "0"})).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, sample_news_results());
    assert_eq!(
        provider.queries(),
        vec![NewsQuery {
            query: "AI".to_string(),
            start: "0".to_string(),
        }]
    );
}

#[tokio::test]
async fn test_tool_missing_fields_default_to_empty() {
    let provider = MockProvider::returning(json!([]));
    let app = create_test_app(provider.clone());

    let response = post_json(app, "/tool", &json!({})).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
    assert_eq!(provider.queries(), vec![NewsQuery::default()]);
}

#[tokio::test]
async fn test_tool_only_query_given() {
    // The browser client posts only the query
    let provider = MockProvider::returning(json!([]));
    let app = create_test_app(provider.clone());

    let response = post_json(app, "/tool", &json!({"query": "sport"})).await;

    assert_eq!(response.status(), StatusCode::OK);
    let queries = provider.queries();
    assert_eq!(queries[0].query, "sport");
    assert_eq!(queries[0].start, "");
}

#[tokio::test]
async fn test_tool_numeric_start_index() {
    let provider = MockProvider::returning(json!([]));
    let app = create_test_app(provider.clone());

    let response = post_json(app, "/tool", &json!({"query": "AI", "startIndex": 10})).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(provider.queries()[0].start, "10");
}

#[tokio::test]
async fn test_tool_accepts_body_without_content_type() {
    let provider = MockProvider::returning(json!([{"title": "x"}]));
    let app = create_test_app(provider.clone());

    let response = post_raw(app, "/tool", r#"{"query": "AI"}"#, None).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([{"title": "x"}]));
}

#[tokio::test]
async fn test_tool_malformed_body() {
    let provider = MockProvider::returning(json!([]));
    let app = create_test_app(provider.clone());

    let response = post_raw(app, "/tool", "{not json", Some("application/json")).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["status"], 400);
    assert!(body["error"].as_str().unwrap().contains("Invalid request"));
    assert!(provider.queries().is_empty());
}

#[tokio::test]
async fn test_tool_non_object_body() {
    let provider = MockProvider::returning(json!([]));
    let app = create_test_app(provider.clone());

    let response = post_json(app, "/tool", &json!(["AI", "0"])).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(provider.queries().is_empty());
}

#[tokio::test]
async fn test_tool_empty_body() {
    let app = create_test_app(MockProvider::returning(json!([])));

    let response = post_raw(app, "/tool", "", None).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_tool_missing_news_results() {
    let app = create_test_app(MockProvider::missing_field());

    let response = post_json(app, "/tool", &json!({"query": "AI", "startIndex": "0"})).await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = body_json(response).await;
    assert_eq!(body["status"], 502);
    assert!(body["error"].as_str().unwrap().contains("news_results"));
}

#[tokio::test]
async fn test_tool_provider_failure() {
    let app = create_test_app(MockProvider::failing("connection failed"));

    let response = post_json(app, "/tool", &json!({"query": "AI"})).await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = body_json(response).await;
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("connection failed"));
}

#[tokio::test]
async fn test_tool_rejects_get() {
    let app = create_test_app(MockProvider::returning(json!([])));

    let response = get(app, "/tool").await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_unknown_route() {
    let app = create_test_app(MockProvider::returning(json!([])));

    let response = get(app, "/api/v1/search").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cors_preflight() {
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    let app = create_test_app(MockProvider::returning(json!([])));

    let response = app
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/tool")
                .header("origin", "http://localhost:5173")
                .header("access-control-request-method", "POST")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .contains_key("access-control-allow-origin"));
}
