use crate::config::SERVICE_NAME;
use crate::dtos::WelcomeResponse;
use axum::{http::Uri, response::IntoResponse, Json};
use serde_json::json;
use service_core::error::AppError;

pub const WELCOME_MESSAGE: &str = "Welcome to AstroTunes API";

pub async fn index() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: WELCOME_MESSAGE,
    })
}

pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION")
    }))
}

pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(anyhow::anyhow!("No route for {}", uri.path()))
}
