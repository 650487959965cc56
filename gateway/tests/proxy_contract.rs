//! End-to-end tests of the proxy contract against a mock upstream.

mod common;

use axum::http::StatusCode;
use common::{app, get, get_with_cookie, json_request, read_json};
use serde_json::json;
use tower::ServiceExt;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Match, Mock, MockServer, Request, ResponseTemplate};

/// Matches only requests that carry no Authorization header at all.
struct NoAuthorizationHeader;

impl Match for NoAuthorizationHeader {
    fn matches(&self, request: &Request) -> bool {
        !request.headers.contains_key("authorization")
    }
}

async fn mock_upstream() -> (MockServer, axum::Router) {
    let server = MockServer::start().await;
    let router = app(&format!("{}/api", server.uri()));
    (server, router)
}

#[tokio::test]
async fn listing_without_pagination_forwards_defaults() {
    let (server, app) = mock_upstream().await;

    Mock::given(method("GET"))
        .and(path("/api/newsletters/"))
        .and(query_param("skip", "0"))
        .and(query_param("limit", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let response = app.oneshot(get("/api/newsletters")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn single_object_upstream_body_is_coerced_to_list() {
    let (server, app) = mock_upstream().await;

    Mock::given(method("GET"))
        .and(path("/api/newsletters/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "n1"})))
        .mount(&server)
        .await;

    let response = app.oneshot(get("/api/newsletters")).await.unwrap();
    let body = read_json(response).await;

    assert_eq!(body["data"], json!([{"id": "n1"}]));
    assert_eq!(body["message"], "Retrieved newsletter(s)");
}

#[tokio::test]
async fn unreachable_upstream_returns_internal_error_envelope() {
    // Nothing listens on the discard port, so the connect fails immediately.
    let app = app("http://127.0.0.1:9/api");

    let response = app.oneshot(get("/api/newsletters")).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = read_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Internal server error");
}

#[tokio::test]
async fn newsletter_creation_maps_body_and_forwards_created_status() {
    let (server, app) = mock_upstream().await;

    Mock::given(method("POST"))
        .and(path("/api/newsletters/"))
        .and(body_json(json!({
            "title": "Demo",
            "subject": "Demo",
            "content_html": "<p>hi</p>",
            "content_text": "<p>hi</p>",
            "template_id": null,
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "n1"})))
        .expect(1)
        .mount(&server)
        .await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/newsletters",
            json!({"eventName": "Demo", "description": "<p>hi</p>"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = read_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"], json!({"id": "n1"}));
    assert_eq!(body["message"], "Newsletter created successfully");
}

#[tokio::test]
async fn auth_cookie_becomes_bearer_header() {
    let (server, app) = mock_upstream().await;

    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .and(header("authorization", "Bearer tok123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"email": "a@b.c"})))
        .expect(1)
        .mount(&server)
        .await;

    let response = app
        .oneshot(get_with_cookie("/api/auth/me", "auth_token=tok123"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json(response).await;
    assert_eq!(body["data"]["email"], "a@b.c");
}

#[tokio::test]
async fn missing_cookie_omits_authorization_header() {
    let (server, app) = mock_upstream().await;

    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .and(NoAuthorizationHeader)
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"detail": "Not authenticated"})))
        .expect(1)
        .mount(&server)
        .await;

    let response = app.oneshot(get("/api/auth/me")).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = read_json(response).await;
    assert_eq!(body["error"], "Not authenticated");
}

#[tokio::test]
async fn empty_cookie_omits_authorization_header() {
    let (server, app) = mock_upstream().await;

    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .and(NoAuthorizationHeader)
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let response = app
        .oneshot(get_with_cookie("/api/auth/me", "auth_token="))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn upstream_rejection_forwards_status_and_detail() {
    let (server, app) = mock_upstream().await;

    Mock::given(method("POST"))
        .and(path("/api/newsletters/"))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(json!({"detail": "title too short"})),
        )
        .mount(&server)
        .await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/newsletters",
            json!({"eventName": "x"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = read_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "title too short");
}

#[tokio::test]
async fn rejection_without_detail_uses_route_failure_message() {
    let (server, app) = mock_upstream().await;

    Mock::given(method("GET"))
        .and(path("/api/newsletters/n9"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let response = app.oneshot(get("/api/newsletters/n9")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = read_json(response).await;
    assert_eq!(body["error"], "Failed to fetch newsletter");
}

#[tokio::test]
async fn article_search_renames_query_and_reshapes_results() {
    let (server, app) = mock_upstream().await;

    Mock::given(method("GET"))
        .and(path("/api/articles/"))
        .and(query_param("search", "rust"))
        .and(query_param("skip", "0"))
        .and(query_param("limit", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 7,
            "title": "Rust in Production",
            "summary": "A short summary",
            "body": "Full text",
            "source_url": "https://example.com/a",
            "tags": ["rust"],
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let response = app.oneshot(get("/api/articles?q=rust")).await.unwrap();
    let body = read_json(response).await;

    assert_eq!(
        body["data"],
        json!([{
            "id": 7,
            "title": "Rust in Production",
            "link": "https://example.com/a",
            "snippet": "A short summary",
            "source": "Backend",
        }])
    );
}

#[tokio::test]
async fn generate_applies_documented_defaults() {
    let (server, app) = mock_upstream().await;

    Mock::given(method("POST"))
        .and(path("/api/generate/newsletter"))
        .and(body_json(json!({
            "template_id": "t1",
            "categories": [],
            "tags": [],
            "num_articles": 5,
            "include_summaries": false,
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"message": "Newsletter generation started"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/generate",
            json!({"template_id": "t1"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json(response).await;
    assert_eq!(body["message"], "Newsletter generated successfully");
}

#[tokio::test]
async fn delete_with_empty_upstream_body_yields_null_data() {
    let (server, app) = mock_upstream().await;

    Mock::given(method("DELETE"))
        .and(path("/api/templates/3"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let response = app
        .oneshot(json_request("DELETE", "/api/templates/3", json!(null)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Template deleted successfully");
    assert!(body.get("data").is_none() || body["data"].is_null());
}

#[tokio::test]
async fn stats_reshapes_overview_totals() {
    let (server, app) = mock_upstream().await;

    Mock::given(method("GET"))
        .and(path("/api/analytics/overview"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_newsletters": 5,
            "total_subscribers": 120,
            "total_sent": 37,
            "avg_open_rate": 0.42,
        })))
        .mount(&server)
        .await;

    let response = app.oneshot(get("/api/stats")).await.unwrap();
    let body = read_json(response).await;

    assert_eq!(body["data"]["total"], 5);
    assert_eq!(body["data"]["summaries"], 120);
    assert_eq!(body["data"]["topics"], 37);
    assert!(body["data"]["updatedAt"].is_string());
}

#[tokio::test]
async fn unparsable_upstream_success_body_yields_internal_error() {
    let (server, app) = mock_upstream().await;

    Mock::given(method("GET"))
        .and(path("/api/analytics/overview"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let response = app.oneshot(get("/api/analytics/overview")).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = read_json(response).await;
    assert_eq!(body["error"], "Internal server error");
}

#[tokio::test]
async fn schedule_entry_creation_defaults_status_to_pending() {
    let (server, app) = mock_upstream().await;

    Mock::given(method("POST"))
        .and(path("/api/schedule/"))
        .and(body_json(json!({
            "newsletter_id": 4,
            "scheduled_for": "2025-06-01T09:00:00Z",
            "cron_expression": null,
            "status": "pending",
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 1})))
        .expect(1)
        .mount(&server)
        .await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/schedule/entries",
            json!({"newsletter_id": 4, "scheduled_for": "2025-06-01T09:00:00Z"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
}
