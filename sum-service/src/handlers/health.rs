use crate::AppState;
use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::IntoResponse,
    Json,
};
use serde_json::json;
use service_core::error::AppError;

pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": &*state.service_name,
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// The service holds no dependencies, so it is ready as soon as it serves.
pub async fn readiness_check() -> impl IntoResponse {
    StatusCode::OK
}

pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(anyhow::anyhow!("No route for {}", uri.path()))
}
