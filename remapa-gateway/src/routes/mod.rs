use axum::{routing::get, Json, Router};
use chrono::Utc;

pub mod transform;

use crate::dto::HealthDto;

pub fn new() -> Router {
    Router::new()
        .nest("/api/transformar", transform::router())
        .route("/", get(health))
}

/// 健康检查
async fn health() -> Json<HealthDto> {
    Json(HealthDto {
        status: "API ativa".into(),
        timestamp: Utc::now(),
    })
}
