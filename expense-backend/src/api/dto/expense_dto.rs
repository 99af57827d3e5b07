// src/api/dto/expense_dto.rs
use crate::domain::expense_model;
use crate::utils::validation::{self, expense};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;
use validator::ValidationErrors;

// --- Request DTOs ---

/// 作成・更新リクエストのボディ
///
/// 型の誤りもフィールド単位のエラーとして返すため、各値は検証前の JSON として受け取る。
/// 明示的な `null` は未指定と同じ扱いになる。
#[derive(Deserialize, Serialize, Debug, Default, Clone)]
pub struct ExpensePayload {
    pub description: Option<Value>,
    pub amount: Option<Value>,
    pub category: Option<Value>,
    pub date: Option<Value>,
}

/// 検証済みの入力。作成と更新（全項目の置き換え）で共通
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedExpense {
    pub description: String,
    pub amount: Decimal,
    pub category: String,
    pub date: NaiveDate,
}

impl ExpensePayload {
    /// すべてのフィールドを検証し、失敗したフィールドをまとめて返す
    pub fn into_validated(self) -> Result<ValidatedExpense, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let description = validation::validate_required_string(
            "description",
            self.description.as_ref(),
            expense::DESCRIPTION_MAX_LENGTH,
        )
        .map_err(|e| errors.add("description", e))
        .ok();
        let amount = validation::validate_amount("amount", self.amount.as_ref())
            .map_err(|e| errors.add("amount", e))
            .ok();
        let category = validation::validate_required_string(
            "category",
            self.category.as_ref(),
            expense::CATEGORY_MAX_LENGTH,
        )
        .map_err(|e| errors.add("category", e))
        .ok();
        let date = validation::validate_date("date", self.date.as_ref())
            .map_err(|e| errors.add("date", e))
            .ok();

        match (description, amount, category, date) {
            (Some(description), Some(amount), Some(category), Some(date)) => {
                Ok(ValidatedExpense {
                    description,
                    amount,
                    category,
                    date,
                })
            }
            _ => Err(errors),
        }
    }
}

// --- Response DTO ---

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ExpenseDto {
    pub id: Uuid,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub category: String,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// SeaORM の Model から ExpenseDto への変換
impl From<expense_model::Model> for ExpenseDto {
    fn from(model: expense_model::Model) -> Self {
        Self {
            id: model.id,
            description: model.description,
            amount: model.amount,
            category: model.category,
            date: model.date,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
