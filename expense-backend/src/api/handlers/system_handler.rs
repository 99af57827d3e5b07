// src/api/handlers/system_handler.rs
use axum::{routing::get, Router};

// データベースには触れない死活監視用エンドポイント
pub async fn health_check_handler() -> &'static str {
    "OK"
}

pub fn system_router() -> Router {
    Router::new().route("/health", get(health_check_handler))
}
