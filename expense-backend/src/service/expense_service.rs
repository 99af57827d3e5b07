// src/service/expense_service.rs

use crate::api::dto::expense_dto::{ExpenseDto, ValidatedExpense};
use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::repository::expense_repository::ExpenseRepository;
use std::sync::Arc;
use uuid::Uuid;

pub struct ExpenseService {
    repo: Arc<ExpenseRepository>,
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Expense with id {} not found", id))
}

impl ExpenseService {
    pub fn new(db_pool: DbPool) -> Self {
        Self {
            repo: Arc::new(ExpenseRepository::new(db_pool)),
        }
    }

    // --- CRUD ---
    pub async fn list_expenses(&self) -> AppResult<Vec<ExpenseDto>> {
        let expenses = self.repo.find_all().await?;
        Ok(expenses.into_iter().map(Into::into).collect())
    }

    pub async fn create_expense(&self, payload: ValidatedExpense) -> AppResult<ExpenseDto> {
        let created = self.repo.create(payload).await?;
        Ok(created.into())
    }

    pub async fn get_expense(&self, id: Uuid) -> AppResult<ExpenseDto> {
        let expense = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))?;
        Ok(expense.into())
    }

    /// 更新対象が存在することを確認する（本文の検証より先に呼ぶ）
    pub async fn ensure_expense_exists(&self, id: Uuid) -> AppResult<()> {
        if self.repo.exists(id).await? {
            Ok(())
        } else {
            Err(not_found(id))
        }
    }

    pub async fn update_expense(
        &self,
        id: Uuid,
        payload: ValidatedExpense,
    ) -> AppResult<ExpenseDto> {
        let updated = self
            .repo
            .update(id, payload)
            .await?
            .ok_or_else(|| not_found(id))?;
        Ok(updated.into())
    }

    pub async fn delete_expense(&self, id: Uuid) -> AppResult<()> {
        let result = self.repo.delete(id).await?;
        if result.rows_affected == 0 {
            return Err(not_found(id));
        }
        Ok(())
    }
}
