use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::app::AppState;
use crate::constants::{API_VERSION, SERVICE_NAME};

/// Lightweight liveness check for load balancers
pub async fn ping() -> Json<Value> {
    Json(json!({ "status": "pong" }))
}

/// API status and documentation links
pub async fn root(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "service": SERVICE_NAME,
        "version": API_VERSION,
        "environment": state.server.environment,
        "status": "running",
    }))
}

pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "healthy", "service": SERVICE_NAME }))
}

pub async fn liveness_probe() -> Json<Value> {
    Json(json!({ "status": "alive" }))
}

pub async fn readiness_probe() -> Json<Value> {
    Json(json!({ "status": "ready" }))
}
