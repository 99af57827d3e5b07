// src/repository/expense_repository.rs
use crate::api::dto::expense_dto::ValidatedExpense;
use crate::domain::expense_model::{
    self, ActiveModel as ExpenseActiveModel, Entity as ExpenseEntity,
};
use sea_orm::{entity::*, query::*, DbConn, DbErr, DeleteResult, PaginatorTrait, Set};
use uuid::Uuid;

pub struct ExpenseRepository {
    db: DbConn,
}

impl ExpenseRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<expense_model::Model>, DbErr> {
        ExpenseEntity::find_by_id(id).one(&self.db).await
    }

    /// 作成日の降順（新しいものから）で全件取得
    pub async fn find_all(&self) -> Result<Vec<expense_model::Model>, DbErr> {
        ExpenseEntity::find()
            .order_by_desc(expense_model::Column::CreatedAt)
            .order_by_desc(expense_model::Column::Id)
            .all(&self.db)
            .await
    }

    pub async fn create(&self, payload: ValidatedExpense) -> Result<expense_model::Model, DbErr> {
        let new_expense = ExpenseActiveModel {
            description: Set(payload.description),
            amount: Set(payload.amount),
            category: Set(payload.category),
            date: Set(payload.date),
            ..Default::default()
        };
        new_expense.insert(&self.db).await
    }

    /// 4つの可変フィールドをすべて置き換える。対象が無ければ None
    pub async fn update(
        &self,
        id: Uuid,
        payload: ValidatedExpense,
    ) -> Result<Option<expense_model::Model>, DbErr> {
        let expense = match ExpenseEntity::find_by_id(id).one(&self.db).await? {
            Some(e) => e,
            None => return Ok(None),
        };

        let mut active_model: ExpenseActiveModel = expense.into();
        active_model.description = Set(payload.description);
        active_model.amount = Set(payload.amount);
        active_model.category = Set(payload.category);
        active_model.date = Set(payload.date);

        match active_model.update(&self.db).await {
            Ok(model) => Ok(Some(model)),
            // 取得と更新の間に削除された場合
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub async fn delete(&self, id: Uuid) -> Result<DeleteResult, DbErr> {
        ExpenseEntity::delete_by_id(id).exec(&self.db).await
    }

    pub async fn exists(&self, id: Uuid) -> Result<bool, DbErr> {
        let count = ExpenseEntity::find_by_id(id).count(&self.db).await?;
        Ok(count > 0)
    }
}
