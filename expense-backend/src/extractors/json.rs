// src/extractors/json.rs
use crate::error::AppError;
use axum::extract::FromRequest;

/// `axum::Json` のリジェクションを `AppError` に統一する JSON 抽出器
#[derive(FromRequest, Debug)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
