#![allow(dead_code)]

use astrotunes_service::config::AstroConfig;
use astrotunes_service::services::{Composer, PlaceholderComposer};
use astrotunes_service::startup::{build_router, AppState, Application};
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use std::sync::Arc;
use tower::util::ServiceExt;

pub struct TestApp {
    pub address: String,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let mut config = AstroConfig::default();
        config.common.host = "127.0.0.1".to_string();
        config.common.port = 0; // Random port for testing

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to accept connections
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp { address }
    }
}

pub fn router() -> Router {
    router_with(Arc::new(PlaceholderComposer::new()))
}

pub fn router_with(composer: Arc<dyn Composer>) -> Router {
    build_router(AppState::new(composer))
}

/// POST a raw JSON body and return status plus parsed response body.
pub async fn post_json(app: Router, uri: &str, body: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

pub fn fixed_music() -> serde_json::Value {
    serde_json::json!({
        "key": "C",
        "tempo": 120,
        "mood": "harmonic",
        "instruments": ["piano", "violin"]
    })
}
