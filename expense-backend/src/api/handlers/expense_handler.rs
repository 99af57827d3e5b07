// src/api/handlers/expense_handler.rs
use crate::api::dto::expense_dto::{ExpenseDto, ExpensePayload};
use crate::api::AppState;
use crate::error::{AppError, AppResult};
use crate::extractors::{AppJson, ResourceId};
use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Router,
};
use tracing::info;

// --- CRUD Handlers ---

pub async fn list_expenses_handler(
    State(app_state): State<AppState>,
) -> AppResult<Json<Vec<ExpenseDto>>> {
    let expenses = app_state.expense_service.list_expenses().await?;

    info!(expense_count = %expenses.len(), "Expenses retrieved successfully");

    Ok(Json(expenses))
}

pub async fn create_expense_handler(
    State(app_state): State<AppState>,
    AppJson(payload): AppJson<ExpensePayload>,
) -> AppResult<impl IntoResponse> {
    // 検証に失敗した場合は何も保存しない
    let validated = payload.into_validated()?;

    info!(
        category = %validated.category,
        date = %validated.date,
        "Creating new expense"
    );

    let expense_dto = app_state.expense_service.create_expense(validated).await?;

    info!(expense_id = %expense_dto.id, "Expense created successfully");

    Ok((StatusCode::CREATED, Json(expense_dto)))
}

pub async fn get_expense_handler(
    State(app_state): State<AppState>,
    ResourceId(id): ResourceId,
) -> AppResult<Json<ExpenseDto>> {
    info!(expense_id = %id, "Getting expense");

    let expense_dto = app_state.expense_service.get_expense(id).await?;

    Ok(Json(expense_dto))
}

/// 全項目の置き換え（PUT / PATCH 共通）。部分更新はサポートしない
///
/// 存在しない ID はボディの内容にかかわらず 404 を返すため、
/// ボディの解釈と検証は存在確認の後に行う。
pub async fn update_expense_handler(
    State(app_state): State<AppState>,
    ResourceId(id): ResourceId,
    payload: Result<AppJson<ExpensePayload>, AppError>,
) -> AppResult<Json<ExpenseDto>> {
    app_state.expense_service.ensure_expense_exists(id).await?;

    let AppJson(payload) = payload?;
    let validated = payload.into_validated()?;

    info!(expense_id = %id, "Updating expense");

    let expense_dto = app_state
        .expense_service
        .update_expense(id, validated)
        .await?;

    info!(expense_id = %id, "Expense updated successfully");

    Ok(Json(expense_dto))
}

pub async fn delete_expense_handler(
    State(app_state): State<AppState>,
    ResourceId(id): ResourceId,
) -> AppResult<StatusCode> {
    info!(expense_id = %id, "Deleting expense");

    app_state.expense_service.delete_expense(id).await?;

    info!(expense_id = %id, "Expense deleted successfully");

    Ok(StatusCode::NO_CONTENT)
}

// --- Router Setup ---
pub fn expense_router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/expenses",
            get(list_expenses_handler).post(create_expense_handler),
        )
        .route(
            "/expenses/{id}",
            get(get_expense_handler)
                .put(update_expense_handler)
                .patch(update_expense_handler)
                .delete(delete_expense_handler),
        )
        .with_state(app_state)
}
