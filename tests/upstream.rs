//! Token cache and document proxy against a local wiremock server.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use std::sync::Arc;
use support_dashboard::auth::{AuthError, TokenCache, TokenProvider};
use support_dashboard::config::UpstreamConfig;
use support_dashboard::mock::MockReportSource;
use support_dashboard::upstream::DocumentClient;
use support_dashboard::{AppConfig, AppState, router};
use tower::ServiceExt;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// base64("svc-user:svc-pass")
const BASIC: &str = "Basic c3ZjLXVzZXI6c3ZjLXBhc3M=";

fn upstream_config(server: &MockServer) -> UpstreamConfig {
    UpstreamConfig {
        login_url: Some(format!("{}/login", server.uri())),
        document_url: Some(format!("{}/documents/", server.uri())),
        username: "svc-user".to_string(),
        password: "svc-pass".to_string(),
    }
}

fn token_cache(server: &MockServer) -> TokenCache {
    TokenCache::new(reqwest::Client::new(), &upstream_config(server))
}

async fn mount_login(server: &MockServer, token: &str, times: u64) {
    Mock::given(method("GET"))
        .and(path("/login"))
        .and(header("authorization", BASIC))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "token": token, "userId": "u-1" })),
        )
        .expect(times)
        .mount(server)
        .await;
}

fn app_for(server: &MockServer) -> axum::Router {
    let config = AppConfig {
        upstream: upstream_config(server),
        ..AppConfig::default()
    };
    let client = reqwest::Client::new();
    let tokens = TokenCache::new(client.clone(), &config.upstream);
    let documents = DocumentClient::new(client, &config.upstream);
    router(AppState::new(
        config,
        Arc::new(MockReportSource::with_seed(3)),
        Arc::new(tokens),
        documents,
    ))
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn second_call_reuses_cached_token() {
    let server = MockServer::start().await;
    mount_login(&server, "tok-1", 1).await;

    let cache = token_cache(&server);
    let first = cache.get_token().await.unwrap();
    let second = cache.get_token().await.unwrap();

    assert_eq!(first, "tok-1");
    assert_eq!(first, second);
    // `expect(1)` is verified when the server drops
}

#[tokio::test]
async fn invalidate_forces_new_login() {
    let server = MockServer::start().await;
    mount_login(&server, "tok-2", 2).await;

    let cache = token_cache(&server);
    cache.get_token().await.unwrap();
    cache.invalidate().await;
    cache.get_token().await.unwrap();
    cache.get_token().await.unwrap();
}

#[tokio::test]
async fn rejected_login_stays_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(401))
        .expect(2)
        .mount(&server)
        .await;

    let cache = token_cache(&server);
    let err = cache.get_token().await.unwrap_err();
    assert!(matches!(err, AuthError::Rejected(401)));
    assert!(cache.get_token().await.is_err());
}

#[tokio::test]
async fn proxy_forwards_upstream_document() {
    let server = MockServer::start().await;
    mount_login(&server, "tok-3", 1).await;

    let document = json!({
        "documentType": "CONTEXT",
        "tenantId": "t1",
        "documentKey": "k1",
        "ttl": "2024-12-31T00:00:00Z",
        "payload": { "totalConversations": 42 }
    });
    Mock::given(method("GET"))
        .and(path("/documents/t1/k1"))
        .and(header("authorization", "Bearer tok-3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(document.clone()))
        .expect(2)
        .mount(&server)
        .await;

    let app = app_for(&server);
    let (status, body) = get(app.clone(), "/api/lp?tenantId=t1&documentKey=k1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, document);

    let (status, _) = get(app, "/api/lp?tenantId=t1&documentKey=k1").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn proxy_forwards_status_not_body() {
    let server = MockServer::start().await;
    mount_login(&server, "tok-4", 1).await;
    Mock::given(method("GET"))
        .and(path("/documents/t1/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such document: missing"))
        .mount(&server)
        .await;

    let (status, body) = get(app_for(&server), "/api/lp?tenantId=t1&documentKey=missing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({ "success": false, "error": "Failed to fetch data from LP CCS" })
    );
}

#[tokio::test]
async fn upstream_unauthorized_drops_token() {
    let server = MockServer::start().await;
    mount_login(&server, "tok-5", 2).await;
    Mock::given(method("GET"))
        .and(path("/documents/t1/k1"))
        .respond_with(ResponseTemplate::new(401))
        .expect(2)
        .mount(&server)
        .await;

    let app = app_for(&server);
    let (status, _) = get(app.clone(), "/api/lp?tenantId=t1&documentKey=k1").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    let (status, _) = get(app, "/api/lp?tenantId=t1&documentKey=k1").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn failed_login_is_internal_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/documents/t1/k1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let (status, body) = get(app_for(&server), "/api/lp?tenantId=t1&documentKey=k1").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "success": false, "error": "Internal server error" }));
}

#[tokio::test]
async fn login_without_token_is_unauthorized() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "userId": "u-1" })))
        .expect(2)
        .mount(&server)
        .await;

    let cache = token_cache(&server);
    let err = cache.get_token().await.unwrap_err();
    assert!(matches!(err, AuthError::MissingToken));

    let (status, body) = get(app_for(&server), "/api/lp?tenantId=t1&documentKey=k1").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "success": false, "error": "Failed to authenticate" }));
}
