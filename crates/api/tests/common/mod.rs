//! Shared helpers for API integration tests.
//!
//! Requests go straight to the router via `tower::ServiceExt::oneshot`; no
//! TCP listener and no database are involved.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderValue, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use keel_api::auth::jwt::{generate_access_token, JwtConfig};
use keel_api::config::ServerConfig;
use keel_api::router::build_app_router;
use keel_api::state::AppState;
use keel_db::{InMemoryProjectStore, ProjectStore};
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec![HeaderValue::from_static("http://localhost:5173")],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        database_url: None,
        db_max_connections: 1,
        jwt: JwtConfig {
            secret: "integration-test-secret".to_string(),
            access_token_expiry_mins: 15,
        },
    }
}

/// The router plus a handle on whatever store backs it.
pub struct TestApp<S> {
    pub router: Router,
    pub store: Arc<S>,
    pub config: ServerConfig,
}

/// An app over an empty in-memory store.
pub fn build_test_app() -> TestApp<InMemoryProjectStore> {
    build_test_app_with(Arc::new(InMemoryProjectStore::new()))
}

/// An app over the given store, using the production middleware stack.
pub fn build_test_app_with<S: ProjectStore + 'static>(store: Arc<S>) -> TestApp<S> {
    let config = test_config();
    let projects: Arc<dyn ProjectStore> = store.clone();
    let state = AppState {
        projects,
        config: Arc::new(config.clone()),
    };
    TestApp {
        router: build_app_router(state, &config),
        store,
        config,
    }
}

impl<S> TestApp<S> {
    /// A valid `Authorization` header value for `user_id`.
    pub fn bearer(&self, user_id: i64) -> String {
        let token = generate_access_token(user_id, "user", &self.config.jwt).unwrap();
        format!("Bearer {token}")
    }

    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        self.send(request).await
    }

    pub async fn delete(&self, uri: &str) -> Response<Body> {
        let request = Request::builder()
            .method(Method::DELETE)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    /// POST a raw body as `user_id`.
    pub async fn post_raw(&self, uri: &str, body: impl Into<Body>, user_id: i64) -> Response<Body> {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, self.bearer(user_id))
            .body(body.into())
            .unwrap();
        self.send(request).await
    }

    /// POST JSON as `user_id`.
    pub async fn post_json(&self, uri: &str, json: serde_json::Value, user_id: i64) -> Response<Body> {
        self.post_raw(uri, json.to_string(), user_id).await
    }

    /// Upsert a project and return the envelope's `data`.
    pub async fn upsert(&self, id: Option<i64>, name: &str, user_id: i64) -> serde_json::Value {
        let response = self
            .post_json(
                "/api/v1/projects",
                serde_json::json!({"id": id, "name": name}),
                user_id,
            )
            .await;
        let json = body_json(response).await;
        assert_eq!(json["code"], 200, "upsert failed: {json}");
        json["data"].clone()
    }
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
