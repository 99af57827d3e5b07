// src/api/mod.rs
use crate::api::handlers::{expense_handler::expense_router, system_handler::system_router};
use crate::logging::{inject_request_context, logging_middleware};
use crate::service::expense_service::ExpenseService;
use axum::{middleware, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod dto;
pub mod handlers;

/// アプリケーション状態。ハンドラーへは State 経由で明示的に渡す
#[derive(Clone)]
pub struct AppState {
    pub expense_service: Arc<ExpenseService>,
}

impl AppState {
    pub fn new(expense_service: Arc<ExpenseService>) -> Self {
        Self { expense_service }
    }
}

/// ルーター全体を構築する（経費APIは `/api` 配下）
pub fn app_router(app_state: AppState) -> Router {
    Router::new()
        .nest("/api", expense_router(app_state))
        .merge(system_router())
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(inject_request_context))
}
