// src/extractors/uuid.rs
use crate::error::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use uuid::Uuid;

/// パスパラメータからリソースIDを抽出する
///
/// UUID として解釈できない値は既存レコードを指し得ないため、
/// 未登録の UUID と同じく NotFound として扱う。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceId(pub Uuid);

impl<S> FromRequestParts<S> for ResourceId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(format!("Missing path parameter 'id': {}", e)))?;

        parse_resource_id(&raw).map(ResourceId)
    }
}

pub fn parse_resource_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw)
        .map_err(|_| AppError::NotFound(format!("Expense with id {} not found", raw)))
}
